//! One-shot board computation — `loopboard snapshot`.
//!
//! Runs the same read path as the HTTP endpoint and prints the resulting
//! document to stdout, for cron captures and debugging.

use anyhow::{Context, Result};

use loopboard::board::assemble::assemble_board;
use loopboard::config::BoardConfig;
use loopboard::tracker::Tracker;
use loopboard::tracker::github::GitHubTracker;

pub async fn cmd_snapshot(pretty: bool) -> Result<()> {
    let board = BoardConfig::from_env()?;
    let tracker = GitHubTracker::new(&board);

    let issues = tracker
        .list_issues()
        .await
        .context("Failed to list issues")?;
    let progress = match tracker.fetch_progress_log().await {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("progress log unavailable: {err}");
            String::new()
        }
    };

    let view = assemble_board(&issues, &progress);
    let json = if pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    println!("{json}");

    Ok(())
}
