use std::fmt;

use crate::error::MirrorError;

/// How an operation ended, as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Finished,
    Cancelled,
}

/// Severity tag attached to every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        })
    }
}

/// Operation-specific counters carried by a successful report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counts {
    /// Snap to Symmetry: vertices snapped and vertices left without a partner.
    Matched { matched: usize, unmatched: usize },
    /// Check Symmetry: vertices without a mirror partner.
    Asymmetric { asymmetric: usize },
    /// Selection filters and Snap to Middle: vertices touched.
    Affected { vertices: usize },
}

/// What a successful operation produced, before it is turned into a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub message: String,
    pub counts: Counts,
}

impl Outcome {
    #[must_use]
    pub fn new(message: impl Into<String>, counts: Counts) -> Self {
        Self {
            message: message.into(),
            counts,
        }
    }
}

/// Result record returned to the host for every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationReport {
    pub status: Status,
    pub severity: Severity,
    pub message: String,
    pub counts: Option<Counts>,
}

impl OperationReport {
    /// Report for an operation that ran to completion.
    #[must_use]
    pub fn finished(outcome: Outcome) -> Self {
        Self {
            status: Status::Finished,
            severity: Severity::Info,
            message: outcome.message,
            counts: Some(outcome.counts),
        }
    }

    /// Report for an operation that was aborted before touching the mesh.
    #[must_use]
    pub fn cancelled(error: &MirrorError) -> Self {
        Self {
            status: Status::Cancelled,
            severity: error.severity(),
            message: error.to_string(),
            counts: None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == Status::Finished
    }
}

impl fmt::Display for OperationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
