use std::sync::Mutex;

use async_trait::async_trait;

use super::{Issue, IssueState, Label, NewIssue, Tracker};
use crate::errors::TrackerError;

/// In-memory tracker that records create calls, for handler tests.
pub struct MockTracker {
    pub issues: Vec<Issue>,
    pub progress: String,
    pub fail_issues: bool,
    pub fail_progress: bool,
    /// When set, `create_issue` fails with this upstream status/body.
    pub create_failure: Option<(u16, String)>,
    pub created: Mutex<Vec<NewIssue>>,
}

impl MockTracker {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            progress: String::new(),
            fail_issues: false,
            fail_progress: false,
            create_failure: None,
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn with_progress(mut self, progress: &str) -> Self {
        self.progress = progress.to_string();
        self
    }

    pub fn with_issues_failure(mut self) -> Self {
        self.fail_issues = true;
        self
    }

    pub fn with_progress_failure(mut self) -> Self {
        self.fail_progress = true;
        self
    }

    pub fn with_create_failure(mut self, status: u16, body: &str) -> Self {
        self.create_failure = Some((status, body.to_string()));
        self
    }
}

#[async_trait]
impl Tracker for MockTracker {
    async fn list_issues(&self) -> Result<Vec<Issue>, TrackerError> {
        if self.fail_issues {
            return Err(TrackerError::Api {
                status: 502,
                body: "upstream listing failed".to_string(),
            });
        }
        Ok(self.issues.clone())
    }

    async fn fetch_progress_log(&self) -> Result<String, TrackerError> {
        if self.fail_progress {
            return Err(TrackerError::Api {
                status: 404,
                body: "Not Found".to_string(),
            });
        }
        Ok(self.progress.clone())
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<serde_json::Value, TrackerError> {
        if let Some((status, body)) = &self.create_failure {
            return Err(TrackerError::Api {
                status: *status,
                body: body.clone(),
            });
        }
        self.created.lock().unwrap().push(issue.clone());
        Ok(serde_json::json!({
            "number": 101,
            "title": issue.title,
            "state": "open",
            "labels": issue.labels,
        }))
    }
}

/// Issue fixture with sensible defaults for classification tests.
pub fn make_issue(number: i64, state: IssueState, labels: &[&str]) -> Issue {
    Issue {
        id: 900_000 + number,
        number,
        title: format!("Issue {number}"),
        body: Some(format!("Body of issue {number}")),
        state,
        created_at: Some("2026-01-02T10:00:00Z".to_string()),
        updated_at: Some("2026-01-05T12:00:00Z".to_string()),
        labels: labels
            .iter()
            .map(|name| Label {
                name: (*name).to_string(),
                color: None,
            })
            .collect(),
        pull_request: None,
    }
}
