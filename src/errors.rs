//! Typed error hierarchy for the loopboard service.
//!
//! Two enums cover the two failure domains:
//! - `ConfigError` — startup configuration problems (fatal)
//! - `TrackerError` — outbound tracker call failures

use thiserror::Error;

/// Errors raised while assembling the runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LOOPBOARD_REPO is not set")]
    MissingRepo,

    #[error("Invalid repository slug {slug:?}: expected owner/repo")]
    InvalidRepo { slug: String },

    #[error("Missing LOOPBOARD_TOKEN or GITHUB_TOKEN")]
    MissingToken,
}

/// Errors from the issue tracker client.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Tracker request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response; the status and body are forwarded to callers
    /// that need to surface the upstream failure verbatim.
    #[error("Tracker returned {status}: {body}")]
    Api { status: u16, body: String },
}
