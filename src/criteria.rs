//! Acceptance-criteria extraction from free-form issue text.
//!
//! JIRA issues rarely carry a structured acceptance-criteria field, so this
//! module pulls a best-guess section out of the description text instead.
//! Two strategies run in order and the first hit wins:
//!
//! 1. [`heading_search`] - look for a known heading marker and capture the
//!    paragraph that follows it.
//! 2. [`line_prefix_scan`] - walk lines collecting `AC:`-prefixed and
//!    bulleted lines.
//!
//! Both strategies are pure functions over the input text. No signal at all
//! yields `None`, which callers treat as "leave the field blank", never as an
//! error.

use regex::Regex;

/// Heading markers, checked in this order. The first entry found anywhere in
/// the text wins, even when a later entry occurs earlier in the text.
///
/// The list intentionally keeps entries that are prefixes of later ones
/// ("acceptance criteria" shadows the ":"/"-"/newline variants at the same
/// position); reordering it would change which match wins on real-world input.
const HEADING_MARKERS: [&str; 6] = [
    "acceptance criteria",
    "acceptance-criteria",
    "acceptance:",
    "acceptance criteria:",
    "acceptance criteria -",
    "acceptance criteria\n",
];

/// Upper bound on the number of characters captured after a heading marker.
const SNIPPET_CAP: usize = 600;

/// Extract the acceptance-criteria section from issue text.
///
/// Returns `None` for empty input and for text with no recognizable
/// acceptance-criteria signal. Deterministic: the same input always produces
/// the same output. Never panics.
pub fn extract(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    heading_search(text).or_else(|| line_prefix_scan(text))
}

/// Strategy 1: search for a heading marker and capture the text after it.
///
/// The search is case-insensitive (ASCII fold, so byte offsets stay aligned
/// with the original text). After the marker, up to [`SNIPPET_CAP`] characters
/// are taken, a leading run of colons/hyphens/whitespace is stripped, and the
/// capture stops at the first blank line.
fn heading_search(text: &str) -> Option<String> {
    let lower = text.to_ascii_lowercase();
    for marker in HEADING_MARKERS {
        let Some(idx) = lower.find(marker) else {
            continue;
        };
        let snippet: String = text[idx + marker.len()..]
            .chars()
            .take(SNIPPET_CAP)
            .collect();
        let cleaned = snippet
            .trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
            .trim();
        let end = match cleaned.find("\n\n") {
            Some(pos) if pos > 0 => pos,
            _ => cleaned.len(),
        };
        return Some(cleaned[..end].trim().to_string());
    }
    None
}

/// Strategy 2: walk lines, collecting from an `AC:` / "acceptance criteria"
/// starter until a blank line or a new heading.
fn line_prefix_scan(text: &str) -> Option<String> {
    let ac_prefix = Regex::new(r"(?i)^AC[:-]").unwrap();
    let ac_strip = Regex::new(r"(?i)^AC[:-]\s*").unwrap();
    let acceptance_line = Regex::new(r"(?i)^(acceptance criteria|acceptance):?").unwrap();
    let bullet = Regex::new(r"^[-*]\s+").unwrap();
    // Heading shape is deliberately case-sensitive: "Notes:" ends collection,
    // "notes:" does not.
    let heading = Regex::new(r"^[A-Z][A-Za-z\s]+:$").unwrap();

    let mut collected: Vec<String> = Vec::new();
    let mut collecting = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if !collecting && ac_prefix.is_match(trimmed) {
            collecting = true;
            let rest = ac_strip.replace(trimmed, "");
            if !rest.is_empty() {
                collected.push(rest.into_owned());
            }
            continue;
        }
        if !collecting && acceptance_line.is_match(trimmed) {
            collecting = true;
            continue;
        }
        if collecting {
            if trimmed.is_empty() {
                break;
            }
            if bullet.is_match(trimmed) {
                collected.push(bullet.replace(trimmed, "").into_owned());
            } else if heading.is_match(trimmed) {
                break;
            } else {
                collected.push(trimmed.to_string());
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}
