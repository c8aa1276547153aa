//! Error types for signature generation.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a [`PositionSource`](crate::source::PositionSource).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Temporary failure; the cell is retried.
    #[error("position source unavailable: {0}")]
    Unavailable(String),
    /// The source answered with data that cannot form a chart.
    #[error("unusable positions: {0}")]
    Unusable(String),
}

impl SourceError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Configuration loading or validation failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Analysis could not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("sample matrix is empty")]
    EmptyMatrix,
    #[error("reference sample (slice {time_slice}, location {location}) is not in the matrix")]
    MissingReference { time_slice: usize, location: usize },
}

/// Top-level error for the signature pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JanmaError {
    #[error("invalid birth date {input:?}: expected YYYY-MM-DD")]
    InvalidDate { input: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cell (slice {time_slice}, location {location}) failed: {source}")]
    Source {
        time_slice: usize,
        location: usize,
        #[source]
        source: SourceError,
    },
    #[error("matrix has {actual} entries, expected {expected}")]
    MatrixSize { expected: usize, actual: usize },
    #[error("matrix cell (slice {time_slice}, location {location}) is duplicated or out of range")]
    MatrixCoverage { time_slice: usize, location: usize },
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unavailable_is_transient() {
        assert!(SourceError::Unavailable("timeout".into()).is_transient());
        assert!(!SourceError::Unusable("NaN".into()).is_transient());
    }

    #[test]
    fn source_error_names_cell() {
        let err = JanmaError::Source {
            time_slice: 3,
            location: 7,
            source: SourceError::Unusable("NaN longitude".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("slice 3"));
        assert!(msg.contains("location 7"));
    }

    #[test]
    fn analysis_converts() {
        let err: JanmaError = AnalysisError::EmptyMatrix.into();
        assert!(matches!(err, JanmaError::Analysis(AnalysisError::EmptyMatrix)));
    }
}
