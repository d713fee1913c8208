use thiserror::Error;

use crate::report::Severity;

/// Top-level error type for mirror symmetry operations.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MirrorError {
    /// Severity with which this error is reported back to the host.
    ///
    /// Vacuous requests (nothing enabled, nothing selected) are warnings;
    /// everything else is an error.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Precondition(_) => Severity::Error,
            Self::Config(err) if err.is_vacuous() => Severity::Warning,
            Self::Config(_) => Severity::Error,
        }
    }
}

/// Errors raised when the host cannot supply a usable mesh.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("no object in edit mode")]
    NoEditTarget,

    #[error("vertex index {index} is out of range for a mesh of {count} vertices")]
    VertexOutOfRange { index: usize, count: usize },

    #[error("selection has {selection} flags but the mesh has {positions} vertices")]
    SelectionLengthMismatch { positions: usize, selection: usize },

    #[error("model-to-world transform is not invertible")]
    SingularTransform,
}

/// Errors related to the settings an operation was invoked with.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no axis selected")]
    NoAxisSelected,

    #[error("no axis selected for center threshold")]
    NoCenterAxisSelected,

    #[error("no vertices selected")]
    NoSelection,

    #[error("{name} = {value} must be a finite, non-negative distance")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("unknown axis: {0:?}")]
    UnknownAxis(String),
}

impl ConfigError {
    /// Returns `true` for well-formed requests that simply have nothing to do.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        matches!(
            self,
            Self::NoAxisSelected | Self::NoCenterAxisSelected | Self::NoSelection
        )
    }
}

/// Convenience type alias for results using [`MirrorError`].
pub type Result<T> = std::result::Result<T, MirrorError>;
