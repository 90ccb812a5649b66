//! Board assembly: classified issues + progress log → [`BoardView`].

use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;

use super::classify;
use super::models::{
    Activity, ActivityIcon, BoardStatus, BoardView, Column, ColumnId, CurrentTask, Priority,
    RunState, Task,
};
use crate::tracker::Issue;

/// Lines of the log blob shown in the collapsed preview.
const PREVIEW_LINES: usize = 12;
/// Lines of the log blob shown when expanded.
const EXPANDED_LINES: usize = 120;
/// Issues rendered as the log fallback when no progress text exists.
const FALLBACK_ISSUES: usize = 6;

static ISSUE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Issue #(\d+)").expect("valid issue reference pattern"));

/// Extract the most recently referenced issue number from the progress log.
///
/// The *last* textual occurrence wins; with interleaved runs in one log this
/// is the only signal used to promote a ready issue to active.
pub fn extract_active_issue_number(progress: &str) -> Option<i64> {
    ISSUE_REF
        .captures_iter(progress)
        .last()
        .and_then(|caps| caps[1].parse::<i64>().ok())
}

/// Partition issues into the four columns, preserving input order.
///
/// A log-derived active issue number promotes a default `ready` placement to
/// `active` for the matching open issue; explicit done/review/active labels
/// are never overridden.
pub fn build_columns(issues: &[Issue], active_issue_number: Option<i64>) -> Vec<Column> {
    let mut buckets: [Vec<Task>; 4] = Default::default();

    for issue in issues {
        let mut column = classify::pick_column(issue);
        if column == ColumnId::Ready
            && issue.state.is_open()
            && active_issue_number == Some(issue.number)
        {
            column = ColumnId::Active;
        }
        let slot = match column {
            ColumnId::Ready => 0,
            ColumnId::Active => 1,
            ColumnId::Review => 2,
            ColumnId::Done => 3,
        };
        buckets[slot].push(classify::classify(issue));
    }

    ColumnId::ALL
        .into_iter()
        .zip(buckets)
        .map(|(id, tasks)| Column {
            id,
            title: id.title().to_string(),
            count: tasks.len(),
            accent: id.accent().to_string(),
            tasks,
        })
        .collect()
}

fn column_tasks<'a>(columns: &'a [Column], id: ColumnId) -> &'a [Task] {
    columns
        .iter()
        .find(|column| column.id == id)
        .map(|column| column.tasks.as_slice())
        .unwrap_or(&[])
}

/// The single live-activity entry shown in the agent panel.
pub fn build_live_activity(columns: &[Column], issues: &[Issue]) -> Vec<Activity> {
    if let Some(task) = column_tasks(columns, ColumnId::Active).first() {
        return vec![Activity {
            icon: ActivityIcon::Search,
            label: "Working".to_string(),
            detail: task.title.clone(),
        }];
    }

    let latest = issues
        .iter()
        .find(|issue| issue.state.is_open())
        .or_else(|| issues.first());
    match latest {
        Some(issue) => {
            let label = if issue.state.is_open() {
                "Queued"
            } else {
                "Recently closed"
            };
            vec![Activity {
                icon: ActivityIcon::Book,
                label: label.to_string(),
                detail: format!("#{} {}", issue.number, issue.title),
            }]
        }
        None => vec![Activity {
            icon: ActivityIcon::Chat,
            label: "Idle".to_string(),
            detail: "No active tasks".to_string(),
        }],
    }
}

/// Headline task for the status panel: first active, else first ready, else
/// the first task anywhere on the board.
pub fn build_current_task(columns: &[Column]) -> CurrentTask {
    let task = column_tasks(columns, ColumnId::Active)
        .first()
        .or_else(|| column_tasks(columns, ColumnId::Ready).first())
        .or_else(|| columns.iter().find_map(|column| column.tasks.first()));

    match task {
        Some(task) => CurrentTask {
            title: task.title.clone(),
            priority: task.priority,
        },
        None => CurrentTask {
            title: "No open tasks".to_string(),
            priority: Priority::Low,
        },
    }
}

/// Render an RFC 3339 timestamp as local 24-hour `HH:MM:SS`. Absent or
/// unparseable values yield no output.
fn format_time(value: Option<&str>) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(value?).ok()?;
    Some(parsed.with_timezone(&Local).format("%H:%M:%S").to_string())
}

/// Coarse run status derived from the issue listing.
///
/// `running_since` takes the *last* open entry of the listing. The listing
/// arrives newest-updated-first from the tracker, so that entry is the
/// oldest one; this ordering assumption is part of the upstream contract.
pub fn build_status(issues: &[Issue]) -> BoardStatus {
    let open: Vec<&Issue> = issues.iter().filter(|issue| issue.state.is_open()).collect();

    BoardStatus {
        state: if open.is_empty() {
            RunState::Idle
        } else {
            RunState::Running
        },
        running_since: format_time(open.last().and_then(|issue| issue.created_at.as_deref())),
        last_update: format_time(issues.first().and_then(|issue| issue.updated_at.as_deref())),
    }
}

/// Log preview/expanded text, falling back to an issue digest when the
/// progress log is blank.
pub fn build_logs(progress: &str, issues: &[Issue]) -> (String, String) {
    let trimmed = progress.trim();
    if !trimmed.is_empty() {
        let lines: Vec<&str> = trimmed.lines().collect();
        let preview = lines[..lines.len().min(PREVIEW_LINES)].join("\n");
        let expanded = lines[..lines.len().min(EXPANDED_LINES)].join("\n");
        return (preview, expanded);
    }

    let fallback = issues
        .iter()
        .take(FALLBACK_ISSUES)
        .map(|issue| format!("#{} {}", issue.number, issue.title))
        .collect::<Vec<_>>()
        .join("\n");
    if fallback.is_empty() {
        let none = "No progress yet.".to_string();
        (none.clone(), none)
    } else {
        (fallback.clone(), fallback)
    }
}

/// Assemble the full board document from pre-fetched inputs. Pure; all I/O
/// happens in the caller.
pub fn assemble_board(issues: &[Issue], progress: &str) -> BoardView {
    let active_issue_number = extract_active_issue_number(progress);
    let columns = build_columns(issues, active_issue_number);
    let (log_preview, log_expanded) = build_logs(progress, issues);
    let system_count = issues.iter().filter(|issue| issue.state.is_open()).count();

    BoardView {
        activities: build_live_activity(&columns, issues),
        current_task: build_current_task(&columns),
        status: build_status(issues),
        columns,
        log_preview,
        log_expanded,
        system_count,
    }
}
