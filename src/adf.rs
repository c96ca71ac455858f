//! Atlassian Document Format to plain text.
//!
//! JIRA Cloud returns rich-text fields as an ADF tree (nested JSON). Only the
//! text content matters here, so the tree is flattened depth-first. This
//! conversion never fails: unknown or malformed nodes simply contribute
//! nothing, and the worst case is an empty string.

use serde_json::Value;

/// Flatten an ADF tree (or any JSON value) into newline-joined text.
pub fn adf_to_text(node: &Value) -> String {
    let mut parts: Vec<String> = Vec::new();
    walk(node, &mut parts);
    parts.join("\n")
}

fn walk(node: &Value, parts: &mut Vec<String>) {
    match node {
        Value::Array(items) => {
            for item in items {
                walk(item, parts);
            }
        }
        Value::String(s) => parts.push(s.clone()),
        Value::Object(map) => {
            if map.get("type").and_then(Value::as_str) == Some("text") {
                if let Some(text) = map.get("text").and_then(Value::as_str) {
                    parts.push(text.to_string());
                    return;
                }
            }
            if let Some(content) = map.get("content") {
                walk(content, parts);
            }
        }
        // null, bool, number: nothing to collect
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_yields_empty() {
        assert_eq!(adf_to_text(&Value::Null), "");
    }

    #[test]
    fn test_plain_string_passes_through() {
        assert_eq!(adf_to_text(&json!("hello")), "hello");
    }

    #[test]
    fn test_typical_document() {
        let doc = json!({
            "type": "doc",
            "version": 1,
            "content": [
                {
                    "type": "paragraph",
                    "content": [
                        { "type": "text", "text": "First paragraph." }
                    ]
                },
                {
                    "type": "paragraph",
                    "content": [
                        { "type": "text", "text": "Second " },
                        { "type": "text", "text": "paragraph." }
                    ]
                }
            ]
        });
        assert_eq!(
            adf_to_text(&doc),
            "First paragraph.\nSecond \nparagraph."
        );
    }

    #[test]
    fn test_bullet_list_texts_are_collected() {
        let doc = json!({
            "type": "doc",
            "content": [{
                "type": "bulletList",
                "content": [
                    {
                        "type": "listItem",
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "item one" }]
                        }]
                    },
                    {
                        "type": "listItem",
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "item two" }]
                        }]
                    }
                ]
            }]
        });
        assert_eq!(adf_to_text(&doc), "item one\nitem two");
    }

    #[test]
    fn test_text_node_without_text_field_recurses_into_content() {
        let doc = json!({
            "type": "text",
            "content": [{ "type": "text", "text": "nested anyway" }]
        });
        assert_eq!(adf_to_text(&doc), "nested anyway");
    }

    #[test]
    fn test_numbers_and_bools_contribute_nothing() {
        let doc = json!({ "content": [1, true, { "type": "text", "text": "kept" }, null] });
        assert_eq!(adf_to_text(&doc), "kept");
    }

    #[test]
    fn test_malformed_shapes_degrade_to_empty() {
        assert_eq!(adf_to_text(&json!({ "unexpected": { "deeply": 42 } })), "");
        assert_eq!(adf_to_text(&json!(37)), "");
        assert_eq!(adf_to_text(&json!([])), "");
    }

    #[test]
    fn test_array_of_strings_joined_with_newlines() {
        assert_eq!(adf_to_text(&json!(["a", "b", "c"])), "a\nb\nc");
    }
}
