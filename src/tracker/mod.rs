//! Issue tracker client seam.
//!
//! The board handlers talk to a [`Tracker`] rather than to GitHub directly,
//! so the HTTP surface can be exercised against an in-memory mock. The only
//! production implementation is [`github::GitHubTracker`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

pub mod github;

#[cfg(test)]
pub mod tests;

/// Lifecycle state of a tracker issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// A label attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// An issue record as returned by the tracker (subset of fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub number: i64,
    pub title: String,
    pub body: Option<String>,
    pub state: IssueState,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Pull requests also come through the issues endpoint; the client
    /// filters records carrying this marker before returning them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

/// Payload for creating a new issue.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Read/write access to the external issue tracker.
#[async_trait]
pub trait Tracker: Send + Sync {
    /// List every issue across all states, newest-updated first, with pull
    /// requests filtered out.
    async fn list_issues(&self) -> Result<Vec<Issue>, TrackerError>;

    /// Fetch the raw progress log text. Callers treat any failure here as
    /// an empty log.
    async fn fetch_progress_log(&self) -> Result<String, TrackerError>;

    /// Create a new issue and return the tracker's record of it verbatim.
    async fn create_issue(&self, issue: &NewIssue) -> Result<serde_json::Value, TrackerError>;
}
