use crate::error::{CasegenError, Result};
use crate::jira::Issue;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Test categories a request may ask for.
pub const CATEGORIES: [&str; 6] = [
    "Functional",
    "Integration",
    "E2E",
    "Performance",
    "Security",
    "Boundary",
];

/// Bounds on the number of test cases a request may ask for.
pub const MIN_TESTCASE_COUNT: u32 = 1;
pub const MAX_TESTCASE_COUNT: u32 = 20;

/// A test-case generation request: the user story plus generation knobs.
///
/// This is the payload handed to the downstream generation service, kept as
/// camelCase JSON on disk so files round-trip with that contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub story_title: String,
    pub acceptance_criteria: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub additional_info: String,
    /// Comma-joined subset of [`CATEGORIES`], absent for "any".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_testcase_count")]
    pub testcase_count: u32,
}

fn default_testcase_count() -> u32 {
    5
}

impl GenerateRequest {
    pub fn load(path: &Path) -> Result<Self> {
        let request = Self::read(path)?;
        request.validate()?;
        Ok(request)
    }

    /// Parse a request file without validating it.
    ///
    /// Used when a later step (issue prefill) may still supply required
    /// fields the file leaves blank.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CasegenError::RequestNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| CasegenError::InvalidRequest(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.story_title.trim().is_empty() {
            return Err(CasegenError::InvalidRequest(
                "story title is required".into(),
            ));
        }
        if self.acceptance_criteria.trim().is_empty() {
            return Err(CasegenError::InvalidRequest(
                "acceptance criteria are required".into(),
            ));
        }
        if !(MIN_TESTCASE_COUNT..=MAX_TESTCASE_COUNT).contains(&self.testcase_count) {
            return Err(CasegenError::InvalidRequest(format!(
                "testcaseCount must be between {} and {}",
                MIN_TESTCASE_COUNT, MAX_TESTCASE_COUNT
            )));
        }
        if let Some(category) = &self.category {
            for name in category.split(',').map(str::trim) {
                if !CATEGORIES.contains(&name) {
                    return Err(CasegenError::InvalidRequest(format!(
                        "unknown category '{}' (valid: {})",
                        name,
                        CATEGORIES.join(", ")
                    )));
                }
            }
        }
        Ok(())
    }

    /// Prefill the request from a fetched issue.
    ///
    /// Only non-empty fetched values overwrite; whatever the user already
    /// typed survives an issue with blank fields.
    pub fn apply_issue(&mut self, issue: &Issue) {
        if !issue.summary.is_empty() {
            self.story_title = issue.summary.clone();
        }
        if !issue.description.is_empty() {
            self.description = issue.description.clone();
        }
        if let Some(criteria) = issue
            .acceptance_criteria
            .as_deref()
            .filter(|c| !c.is_empty())
        {
            self.acceptance_criteria = criteria.to_string();
        }
    }

    /// Categories as a list, empty when none were requested.
    pub fn categories(&self) -> Vec<&str> {
        self.category
            .as_deref()
            .map(|c| c.split(',').map(str::trim).collect())
            .unwrap_or_default()
    }
}
