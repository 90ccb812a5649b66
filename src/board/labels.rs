//! Write-path label normalization for issue creation.

use super::models::Priority;

/// Maximum labels forwarded on an issue-creation call.
pub const MAX_LABELS: usize = 10;

/// Clean up user-supplied labels: trim, drop blanks, append the derived
/// priority tag when absent, deduplicate by exact string match (case
/// matters), and cap at [`MAX_LABELS`].
pub fn normalize_labels(labels: &[String], priority: Priority) -> Vec<String> {
    let mut candidates: Vec<String> = labels
        .iter()
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect();

    let priority_label = priority.as_label();
    if !candidates.iter().any(|label| label == priority_label) {
        candidates.push(priority_label.to_string());
    }

    let mut normalized = Vec::new();
    for label in candidates {
        if !normalized.contains(&label) {
            normalized.push(label);
        }
        if normalized.len() == MAX_LABELS {
            break;
        }
    }
    normalized
}
