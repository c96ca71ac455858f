//! JIRA issue fetching and reshaping.
//!
//! Talks to the JIRA Cloud REST v2 API and reduces an issue to the three
//! fields the request form cares about: summary, description, and acceptance
//! criteria. The description arrives either as a plain string (server) or an
//! ADF document (cloud); acceptance criteria prefer the structured custom
//! field and fall back to heuristic extraction from the description.

use crate::adf::adf_to_text;
use crate::config::JiraSettings;
use crate::criteria;
use crate::error::{CasegenError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The JIRA custom field that holds structured acceptance criteria when the
/// project has one. Checked before falling back to text extraction.
const ACCEPTANCE_CRITERIA_FIELD: &str = "customfield_10037";

/// An issue reduced to the fields used to prefill a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<String>,
}

/// Blocking client around the JIRA REST API.
pub struct JiraClient {
    settings: JiraSettings,
    http: reqwest::blocking::Client,
}

impl JiraClient {
    pub fn new(settings: JiraSettings) -> Self {
        Self {
            settings,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// True when base URL, username, and API token are all set.
    pub fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }

    /// Fetch an issue by key and reshape it into an [`Issue`].
    ///
    /// Without configured credentials this returns a clearly-marked mock
    /// issue so the rest of the workflow stays usable offline. A 404 maps to
    /// [`CasegenError::IssueNotFound`]; any other non-success status carries
    /// the response body in [`CasegenError::JiraApi`].
    pub fn fetch_issue(&self, key: &str) -> Result<Issue> {
        let key = validate_issue_key(key)?;

        if !self.is_configured() {
            return Ok(mock_issue(key));
        }

        // is_configured() checked all three above
        let base = self.settings.base_url.as_deref().unwrap_or_default();
        let username = self.settings.username.as_deref().unwrap_or_default();
        let api_token = self.settings.api_token.as_deref().unwrap_or_default();

        let url = format!("{}/rest/api/2/issue/{}", base.trim_end_matches('/'), key);
        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .basic_auth(username, Some(api_token))
            .send()?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CasegenError::IssueNotFound(key.to_string()));
        }
        if !status.is_success() {
            return Err(CasegenError::JiraApi {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }

        // A body that isn't valid JSON degrades to an empty issue rather than
        // failing the whole fetch.
        let data: Value = resp.json().unwrap_or(Value::Null);
        Ok(reshape_issue(&data))
    }
}

/// Validate and trim an issue key.
///
/// Keys are used verbatim in the request path, so anything outside
/// `[A-Za-z0-9_-]` is rejected up front instead of being escaped.
pub fn validate_issue_key(key: &str) -> Result<&str> {
    let trimmed = key.trim();
    let valid = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(trimmed)
    } else {
        Err(CasegenError::InvalidIssueKey(key.to_string()))
    }
}

/// Build the placeholder issue returned when no JIRA credentials are set.
fn mock_issue(key: &str) -> Issue {
    Issue {
        summary: format!("MOCK: {} - Sample Story Title", key),
        description: format!(
            "MOCK: This is a mock description for issue {}. Set JIRA_BASE_URL, \
             JIRA_USERNAME and JIRA_API_TOKEN (or ~/.config/casegen/config.toml) \
             to enable real integration.",
            key
        ),
        acceptance_criteria: None,
    }
}

/// Reduce a raw issue payload to the prefill fields.
pub fn reshape_issue(data: &Value) -> Issue {
    let fields = data.get("fields").cloned().unwrap_or(Value::Null);

    let summary = fields
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let description = match fields.get("description") {
        Some(Value::String(s)) => s.clone(),
        Some(v @ Value::Object(_)) => {
            let text = adf_to_text(v);
            if text.is_empty() {
                v.to_string()
            } else {
                text
            }
        }
        _ => String::new(),
    };

    let from_field = match fields.get(ACCEPTANCE_CRITERIA_FIELD) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(v @ Value::Object(_)) => {
            let text = adf_to_text(v);
            Some(if text.is_empty() { v.to_string() } else { text })
        }
        _ => None,
    };

    // An empty structured field counts as absent so the heuristic still runs.
    let acceptance_criteria = from_field
        .filter(|s| !s.is_empty())
        .or_else(|| criteria::extract(&description));

    Issue {
        summary,
        description,
        acceptance_criteria,
    }
}
