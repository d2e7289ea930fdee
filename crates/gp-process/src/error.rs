//! Process errors.

use std::io;

use thiserror::Error;

/// Result type for process operations.
pub type ProcessResult<T> = Result<T, ProcessError>;

#[derive(Error, Debug)]
pub enum ProcessError {
    /// Pipe creation, fork, or exec of the program failed.
    #[error("failed to launch {program}: {source}")]
    Creation {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Writing to the child's stdin failed for a reason other than a signal.
    #[error("write to plotting process failed: {0}")]
    Write(#[source] io::Error),

    /// The stdin pipe has already been closed.
    #[error("plotting process input is closed")]
    Closed,
}

impl ProcessError {
    /// OS error code (`errno`) behind the failure, if any.
    pub fn code(&self) -> Option<i32> {
        match self {
            ProcessError::Creation { source, .. } | ProcessError::Write(source) => {
                source.raw_os_error()
            }
            ProcessError::Closed => None,
        }
    }

    pub fn is_creation(&self) -> bool {
        matches!(self, ProcessError::Creation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_comes_from_os_error() {
        let err = ProcessError::Write(io::Error::from_raw_os_error(32));
        assert_eq!(err.code(), Some(32));
        assert!(!err.is_creation());

        let err = ProcessError::Creation {
            program: "gnuplot".into(),
            source: io::Error::from_raw_os_error(2),
        };
        assert_eq!(err.code(), Some(2));
        assert!(err.to_string().starts_with("failed to launch gnuplot"));

        assert_eq!(ProcessError::Closed.code(), None);
    }
}
