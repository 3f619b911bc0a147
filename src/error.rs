//! Error types for harness operations.
//!
//! This module defines the error types that can occur while sampling cases
//! and writing reports.

/// Errors that can occur while running the benchmark harness
#[derive(Debug)]
#[non_exhaustive]
pub enum BenchError {
    /// A case dropped its completion handle without resolving it
    CaseAbandoned { case: String },
    /// Report output or runtime construction failed
    Io(std::io::Error),
}

impl std::fmt::Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchError::CaseAbandoned { case } => {
                write!(
                    f,
                    "Case '{}' dropped its completion handle without resolving it. \
                     The timed interval never ended, so no measurement exists for this case.",
                    case
                )
            }
            BenchError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::Io(err) => Some(err),
            BenchError::CaseAbandoned { .. } => None,
        }
    }
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::Io(err)
    }
}

/// Result type for harness operations
pub type BenchResult<T> = Result<T, BenchError>;
