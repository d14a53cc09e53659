use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while reading, parsing, resolving or saving a solution
#[derive(Debug, Error, Diagnostic)]
pub enum SolutionError {
    /// A line does not match the grammar at the point where it is expected.
    /// `line` is 1-based.
    #[error("{}:{line}: {message}", .path.display())]
    #[diagnostic(code(sole::malformed_input), help("Incorrect Visual Studio solution file syntax"))]
    MalformedInput {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A dependency identifier has no matching project in the same solution
    #[error("Unknown project id {id} as dependency of {referrer}")]
    #[diagnostic(code(sole::unresolved_reference))]
    UnresolvedReference { id: String, referrer: String },

    /// Reading or writing the underlying file failed
    #[error("{action} {} failed", .path.display())]
    #[diagnostic(code(sole::io_failure))]
    IoFailure {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SolutionError>;

impl SolutionError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SolutionError::IoFailure {
            action: "Reading",
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SolutionError::IoFailure {
            action: "Saving",
            path: path.into(),
            source,
        }
    }

    /// 1-based line number for syntax errors
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            SolutionError::MalformedInput { line, .. } => Some(*line),
            _ => None,
        }
    }
}
