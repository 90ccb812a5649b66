//! Runtime configuration for loopboard.
//!
//! Everything the service needs from its environment is resolved once at
//! startup and injected into the tracker client at construction time; no
//! module reads the environment per request.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Default path of the progress log file inside the tracked repository.
pub const DEFAULT_PROGRESS_PATH: &str = "progress.txt";

/// An `owner/repo` slug identifying the tracked repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoSlug {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepo {
            slug: s.to_string(),
        };
        let (owner, repo) = s.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Resolved configuration for the board service.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub repo: RepoSlug,
    pub token: String,
    /// In-repo path of the free-text progress log the assembler scans.
    pub progress_path: String,
}

impl BoardConfig {
    /// Load configuration from the process environment.
    ///
    /// `LOOPBOARD_REPO` is required; the token comes from `LOOPBOARD_TOKEN`
    /// with a `GITHUB_TOKEN` fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var("LOOPBOARD_REPO").ok(),
            std::env::var("LOOPBOARD_TOKEN")
                .or_else(|_| std::env::var("GITHUB_TOKEN"))
                .ok(),
            std::env::var("LOOPBOARD_PROGRESS_PATH").ok(),
        )
    }

    fn from_parts(
        repo: Option<String>,
        token: Option<String>,
        progress_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let repo = repo.ok_or(ConfigError::MissingRepo)?.parse()?;
        let token = token.filter(|t| !t.is_empty()).ok_or(ConfigError::MissingToken)?;
        Ok(Self {
            repo,
            token,
            progress_path: progress_path
                .unwrap_or_else(|| DEFAULT_PROGRESS_PATH.to_string()),
        })
    }
}
