//! Plot errors.

use gp_process::ProcessError;
use thiserror::Error;

/// Result type for plot operations.
pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Error, Debug)]
pub enum PlotError {
    /// The plotting program could not be started; the plot does not exist.
    #[error("failed to start plotting process: {0}")]
    Spawn(#[source] ProcessError),

    /// Command text could not be delivered. Pending changes stay dirty and
    /// are retried by the next `update()`.
    #[error("{during}: {source}")]
    Write {
        during: &'static str,
        #[source]
        source: ProcessError,
    },

    /// A data point's `write_values` reported an error.
    #[error("failed to format command text")]
    Format(#[from] std::fmt::Error),

    #[error("Invalid configuration: {what}")]
    Config { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlotError {
    /// OS error code of the underlying process failure, if any.
    pub fn code(&self) -> Option<i32> {
        match self {
            PlotError::Spawn(source) | PlotError::Write { source, .. } => source.code(),
            PlotError::Io(err) => err.raw_os_error(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn write_error_names_the_operation() {
        let err = PlotError::Write {
            during: "append",
            source: ProcessError::Write(io::Error::from_raw_os_error(32)),
        };
        assert!(err.to_string().starts_with("append: "));
        assert_eq!(err.code(), Some(32));
    }

    #[test]
    fn config_error_has_no_code() {
        let err = PlotError::Config {
            what: "batch_size must be positive".into(),
        };
        assert_eq!(err.code(), None);
        assert!(err.to_string().contains("batch_size"));
    }
}
