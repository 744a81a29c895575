use std::path::PathBuf;
use std::time::Duration;

/// Fatal, document-level failures. Line-level mismatches are never errors.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{program}: failed to parse {} (exit code {})", .path.display(), .code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    Extraction {
        program: String,
        path: PathBuf,
        code: Option<i32>,
    },

    #[error("{program}: timed out after {}s extracting {}", .timeout.as_secs(), .path.display())]
    Timeout {
        program: String,
        path: PathBuf,
        timeout: Duration,
    },

    #[error("failed to run {program} on {}", .path.display())]
    Spawn {
        program: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: could not match due date in {}", .path.display())]
    DueDateNotFound { path: PathBuf },

    #[error("invalid statement pattern: {0}")]
    Pattern(#[from] regex::Error),
}
