use thiserror::Error;

/// Session-level failures. Per-slot problems never show up here except as
/// the aggregate `PartiallyFailed` warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("word count must be between 1 and {max}, got {requested}")]
    InvalidCount { requested: usize, max: usize },
    #[error("no words could be loaded for this session")]
    Empty,
    #[error("{failed} of {total} words could not be loaded")]
    PartiallyFailed { failed: usize, total: usize },
}

/// Rejected screen transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error("cannot {action} while {screen}")]
    InvalidTransition {
        screen: &'static str,
        action: &'static str,
    },
    /// Recoverable: `previous` on the first word
    #[error("already at the first word")]
    AtFirstWord,
    #[error(transparent)]
    Session(#[from] SessionError),
}
