//! Per-row status taxonomy stamped into the output file.

use std::fmt;

/// Maximum characters of response body or error message carried in a status.
const EXCERPT_LEN: usize = 100;

/// Classified result of processing one row. Serialized via `Display` into
/// the status column, never parsed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The API accepted the transaction ID (HTTP 200).
    Success,
    /// HTTP 401.
    Unauthorized,
    /// HTTP 404, the order code is unknown to the API.
    NotFound,
    /// Any other HTTP status, with a truncated body excerpt.
    Other { status: u16, body: String },
    /// The request exceeded the per-call timeout.
    Timeout,
    /// The connection could not be established.
    ConnectionError,
    /// Any other transport-level failure, with a truncated message.
    Exception(String),
    /// Row too short to address the required columns.
    SkippedInsufficientColumns,
    /// Order code or transaction ID blank after trimming.
    SkippedMissingData,
    /// Row was eligible but no call was made (dry-run mode).
    DryRun,
}

/// How a status counts against the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally {
    Succeeded,
    Failed,
    /// Dry-run rows are stamped but excluded from both counters.
    Untallied,
}

impl UpdateStatus {
    pub fn tally(&self) -> Tally {
        match self {
            UpdateStatus::Success => Tally::Succeeded,
            UpdateStatus::DryRun => Tally::Untallied,
            _ => Tally::Failed,
        }
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStatus::Success => write!(f, "Success"),
            UpdateStatus::Unauthorized => write!(f, "Unauthorized"),
            UpdateStatus::NotFound => write!(f, "Order not found"),
            UpdateStatus::Other { status, body } => {
                write!(f, "Error: {} - {}", status, excerpt(body))
            }
            UpdateStatus::Timeout => write!(f, "Timeout"),
            UpdateStatus::ConnectionError => write!(f, "Connection error"),
            UpdateStatus::Exception(msg) => write!(f, "Exception: {}", excerpt(msg)),
            UpdateStatus::SkippedInsufficientColumns => write!(f, "Skipped - insufficient columns"),
            UpdateStatus::SkippedMissingData => write!(f, "Skipped - missing data"),
            UpdateStatus::DryRun => write!(f, "DRY_RUN"),
        }
    }
}

/// Truncate a diagnostic excerpt to at most [`EXCERPT_LEN`] characters.
pub fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_LEN).collect()
}
