//! Fetch command handler.
//!
//! Fetches a JIRA issue and prints the fields used to prefill a generation
//! request: summary, description, and acceptance criteria.

use crate::config;
use crate::error::Result;
use crate::jira::JiraClient;
use crate::output::{print_info, print_issue};

/// Fetch an issue by key and display it.
///
/// With `--json`, prints the reshaped issue as pretty JSON instead of the
/// labeled sections.
pub fn fetch_command(key: &str, json: bool) -> Result<()> {
    let settings = config::load_settings()?;
    let client = JiraClient::new(settings);

    if !client.is_configured() {
        print_info("No JIRA credentials configured; returning a mock issue.");
    }

    let issue = super::fetch_with_spinner(&client, key)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else {
        print_issue(&issue);
    }
    Ok(())
}
