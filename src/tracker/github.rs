//! GitHub REST implementation of the [`Tracker`] trait.

use async_trait::async_trait;
use reqwest::header;

use super::{Issue, NewIssue, Tracker};
use crate::config::{BoardConfig, RepoSlug};
use crate::errors::TrackerError;

const API_ROOT: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = "loopboard";
const PAGE_SIZE: usize = 100;

/// GitHub-backed tracker client. Repository slug, credential, and the
/// progress-log path are injected at construction; nothing is read from the
/// environment per call.
pub struct GitHubTracker {
    client: reqwest::Client,
    repo: RepoSlug,
    token: String,
    progress_path: String,
}

impl GitHubTracker {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            repo: config.repo.clone(),
            token: config.token.clone(),
            progress_path: config.progress_path.clone(),
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{API_ROOT}{path}"))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
    }
}

/// Turn a non-success response into `TrackerError::Api`, preserving the
/// upstream status and body for forwarding.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, TrackerError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(TrackerError::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl Tracker for GitHubTracker {
    async fn list_issues(&self) -> Result<Vec<Issue>, TrackerError> {
        let path = format!("/repos/{}/issues", self.repo);
        let mut all_issues = Vec::new();
        let mut page = 1u32;

        loop {
            let resp = self
                .request(reqwest::Method::GET, &path)
                .query(&[
                    ("state", "all"),
                    ("per_page", &PAGE_SIZE.to_string()),
                    ("sort", "updated"),
                    ("page", &page.to_string()),
                ])
                .send()
                .await?;
            let issues: Vec<Issue> = check(resp).await?.json().await?;

            let count = issues.len();
            // Pull requests come through the issues endpoint too.
            all_issues.extend(issues.into_iter().filter(|i| i.pull_request.is_none()));

            if count < PAGE_SIZE {
                break; // Last page
            }
            page += 1;
        }

        Ok(all_issues)
    }

    async fn fetch_progress_log(&self) -> Result<String, TrackerError> {
        let path = format!("/repos/{}/contents/{}", self.repo, self.progress_path);
        let resp = self
            .request(reqwest::Method::GET, &path)
            .header(header::ACCEPT, "application/vnd.github.raw")
            .send()
            .await?;
        Ok(check(resp).await?.text().await?)
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<serde_json::Value, TrackerError> {
        let path = format!("/repos/{}/issues", self.repo);
        let resp = self
            .request(reqwest::Method::POST, &path)
            .json(issue)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }
}
