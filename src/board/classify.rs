//! Per-issue classification rules.
//!
//! Every rule is an ordered keyword-group scan over lower-cased label names
//! (case-insensitive substring match, first group wins), so rule precedence
//! stays explicit and testable.

use std::sync::LazyLock;

use regex::Regex;

use super::models::{ColumnId, Priority, Tag, TagIcon, Task, Tone};
use crate::tracker::Issue;

const DONE_KEYWORDS: &[&str] = &["merged", "done", "completed", "complete"];
const REVIEW_KEYWORDS: &[&str] = &[
    "review",
    "in-review",
    "needs-review",
    "pr-open",
    "pull-request",
    "pr",
];
const ACTIVE_KEYWORDS: &[&str] = &[
    "active",
    "in-progress",
    "in progress",
    "doing",
    "running",
    "workflow",
];
const READY_KEYWORDS: &[&str] = &["ready", "todo", "backlog"];

const HIGH_KEYWORDS: &[&str] = &["p0", "p1", "high", "urgent", "critical"];
const MEDIUM_KEYWORDS: &[&str] = &["p2", "medium", "normal"];

const PURPLE_KEYWORDS: &[&str] = &["bug", "critical", "urgent"];
const GREEN_KEYWORDS: &[&str] = &["done", "ready", "complete", "approved"];
const BLUE_KEYWORDS: &[&str] = &["feat", "feature", "enhancement"];

const BRANCH_KEYWORDS: &[&str] = &["feat", "feature", "branch"];
const CHECK_KEYWORDS: &[&str] = &["done", "ready", "complete", "approved"];
const SUMMARY_KEYWORDS: &[&str] = &["summary", "spec"];
const COMMIT_KEYWORDS: &[&str] = &["commit"];

/// Maximum number of decorative tags carried by a task.
pub const MAX_TAGS: usize = 4;

/// Maximum characters of a task description, ellipsis included.
pub const MAX_DESCRIPTION: usize = 120;

static GROUP_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^prd[-\s]?").expect("valid group label pattern"));

fn label_match(labels: &[String], keywords: &[&str]) -> bool {
    labels
        .iter()
        .any(|label| keywords.iter().any(|keyword| label.contains(keyword)))
}

fn lowercased_labels(issue: &Issue) -> Vec<String> {
    issue
        .labels
        .iter()
        .map(|label| label.name.to_lowercase())
        .collect()
}

/// Assign the board column for an issue. Total: every issue lands in
/// exactly one bucket.
pub fn pick_column(issue: &Issue) -> ColumnId {
    let labels = lowercased_labels(issue);

    if label_match(&labels, DONE_KEYWORDS) {
        return ColumnId::Done;
    }
    if !issue.state.is_open() {
        return ColumnId::Done;
    }
    if label_match(&labels, REVIEW_KEYWORDS) {
        return ColumnId::Review;
    }
    if label_match(&labels, ACTIVE_KEYWORDS) {
        return ColumnId::Active;
    }
    if label_match(&labels, READY_KEYWORDS) {
        return ColumnId::Ready;
    }

    if issue.state.is_open() {
        ColumnId::Ready
    } else {
        ColumnId::Done
    }
}

pub fn pick_priority(labels: &[String]) -> Priority {
    if label_match(labels, HIGH_KEYWORDS) {
        return Priority::High;
    }
    if label_match(labels, MEDIUM_KEYWORDS) {
        return Priority::Medium;
    }
    Priority::Low
}

/// Group tag: the first `prd…` label upper-cased, else a synthetic
/// `AL-<number>` id.
pub fn pick_group(issue: &Issue) -> String {
    issue
        .labels
        .iter()
        .find(|label| GROUP_LABEL.is_match(&label.name))
        .map(|label| label.name.to_uppercase())
        .unwrap_or_else(|| format!("AL-{}", issue.number))
}

/// First non-blank line of the body, capped at [`MAX_DESCRIPTION`] chars.
pub fn trim_description(body: Option<&str>) -> String {
    let line = body.and_then(|b| b.lines().map(str::trim).find(|l| !l.is_empty()));

    let Some(line) = line else {
        return "No description provided.".to_string();
    };
    if line.chars().count() <= MAX_DESCRIPTION {
        return line.to_string();
    }
    let head: String = line.chars().take(MAX_DESCRIPTION - 3).collect();
    format!("{head}...")
}

pub fn pick_tone(name: &str) -> Tone {
    let labels = [name.to_lowercase()];
    if label_match(&labels, PURPLE_KEYWORDS) {
        return Tone::Purple;
    }
    if label_match(&labels, GREEN_KEYWORDS) {
        return Tone::Green;
    }
    if label_match(&labels, BLUE_KEYWORDS) {
        return Tone::Blue;
    }
    Tone::Slate
}

fn looks_like_commit_hash(name: &str) -> bool {
    name.len() >= 6
        && name
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

pub fn pick_icon(name: &str) -> Option<TagIcon> {
    let lowered = name.to_lowercase();
    let labels = [lowered.clone()];
    if label_match(&labels, BRANCH_KEYWORDS) {
        return Some(TagIcon::Branch);
    }
    if label_match(&labels, CHECK_KEYWORDS) {
        return Some(TagIcon::Check);
    }
    if label_match(&labels, SUMMARY_KEYWORDS) {
        return Some(TagIcon::Summary);
    }
    if looks_like_commit_hash(&lowered) || label_match(&labels, COMMIT_KEYWORDS) {
        return Some(TagIcon::Commit);
    }
    None
}

/// Up to [`MAX_TAGS`] decorative tags in source label order. Tone and icon
/// rules are independent of each other.
pub fn build_tags(issue: &Issue) -> Vec<Tag> {
    issue
        .labels
        .iter()
        .filter(|label| !label.name.is_empty())
        .take(MAX_TAGS)
        .map(|label| Tag {
            label: label.name.clone(),
            tone: pick_tone(&label.name),
            icon: pick_icon(&label.name),
        })
        .collect()
}

/// Classify one issue into its task card. Pure function of the issue's
/// fields.
pub fn classify(issue: &Issue) -> Task {
    let labels = lowercased_labels(issue);

    Task {
        id: format!("issue-{}", issue.number),
        priority: pick_priority(&labels),
        group: pick_group(issue),
        title: issue.title.clone(),
        description: trim_description(issue.body.as_deref()),
        tags: build_tags(issue),
    }
}
