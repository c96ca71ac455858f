//! CLI command handlers for casegen.
//!
//! Each subcommand has its own module with a single handler function.
//!
//! # Commands
//!
//! - [`fetch`] - Fetch a JIRA issue and show its prefill fields
//! - [`extract`] - Extract acceptance criteria from text
//! - [`prepare`] - Validate and normalize a generation request file
//! - [`testdata`] - Generate rows of random test data
//! - [`config`] - Show the resolved JIRA settings

mod config;
mod extract;
mod fetch;
mod prepare;
mod testdata;

pub use config::config_command;
pub use extract::extract_command;
pub use fetch::fetch_command;
pub use prepare::prepare_command;
pub use testdata::testdata_command;

use crate::error::Result;
use crate::jira::{Issue, JiraClient};
use indicatif::ProgressBar;
use std::time::Duration;

/// Fetch an issue with a spinner while the request is in flight.
fn fetch_with_spinner(client: &JiraClient, key: &str) -> Result<Issue> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Fetching {}...", key.trim()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = client.fetch_issue(key);
    spinner.finish_and_clear();
    result
}
