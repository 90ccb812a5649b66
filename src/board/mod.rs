//! Board view-model computation.
//!
//! Turns a tracker issue listing (plus a free-text progress log) into the
//! JSON document the dashboard renders. Everything here is a pure function
//! over pre-fetched data; the handlers in `crate::api` do the I/O.
//!
//! | Module     | Responsibility                                            |
//! |------------|-----------------------------------------------------------|
//! | `models`   | View types: `Task`, `Column`, `BoardView`, wire enums     |
//! | `classify` | Per-issue rules: column, priority, group, tags, trimming  |
//! | `assemble` | Aggregation: columns, activity, status, logs, open count  |
//! | `labels`   | Write-path label normalization for issue creation         |

pub mod assemble;
pub mod classify;
pub mod labels;
pub mod models;
