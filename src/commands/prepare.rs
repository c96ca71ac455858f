//! Prepare command handler.
//!
//! Loads a generation request file, optionally prefills it from a JIRA
//! issue, validates it, and writes the normalized form back.

use crate::config;
use crate::error::Result;
use crate::jira::JiraClient;
use crate::output::{print_info, BOLD, GREEN, RESET};
use crate::request::GenerateRequest;
use std::path::Path;

pub fn prepare_command(file: &Path, issue_key: Option<&str>) -> Result<()> {
    // Parse without validating first: the issue prefill may supply the fields
    // the file leaves blank.
    let mut request = GenerateRequest::read(file)?;

    if let Some(key) = issue_key {
        let client = JiraClient::new(config::load_settings()?);
        if !client.is_configured() {
            print_info("No JIRA credentials configured; prefilling from a mock issue.");
        }
        let issue = super::fetch_with_spinner(&client, key)?;
        request.apply_issue(&issue);
    }

    request.validate()?;
    request.save(file)?;

    println!("{GREEN}Request OK:{RESET} {BOLD}{}{RESET}", request.story_title);
    let criteria_lines = request
        .acceptance_criteria
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count();
    println!(
        "  {} acceptance-criteria line(s), {} test case(s) requested",
        criteria_lines, request.testcase_count
    );
    let categories = request.categories();
    if !categories.is_empty() {
        println!("  categories: {}", categories.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CasegenError;
    use std::fs;
    use tempfile::TempDir;

    fn write_request(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("request.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_prepare_valid_request_rewrites_file() {
        let dir = TempDir::new().unwrap();
        let path = write_request(
            &dir,
            r#"{"storyTitle": "Login", "acceptanceCriteria": "can log in"}"#,
        );

        prepare_command(&path, None).unwrap();

        // Normalized form gains the defaulted count
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"testcaseCount\": 5"));
    }

    #[test]
    fn test_prepare_invalid_request_fails_and_keeps_file() {
        let dir = TempDir::new().unwrap();
        let original = r#"{"storyTitle": "", "acceptanceCriteria": "x"}"#;
        let path = write_request(&dir, original);

        let result = prepare_command(&path, None);
        assert!(matches!(result, Err(CasegenError::InvalidRequest(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_prepare_missing_file_errors() {
        let result = prepare_command(Path::new("/nonexistent/request.json"), None);
        assert!(matches!(result, Err(CasegenError::RequestNotFound(_))));
    }
}
