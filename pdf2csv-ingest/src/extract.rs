//! External text-extraction collaborator.
//!
//! The production extractor shells out to poppler's `pdftotext -raw`, the
//! same linearized layout every issuer format is written against.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use crate::error::LoadError;

/// Raw output of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    /// Exit code of the tool; `None` when it was killed by a signal.
    pub code: Option<i32>,
}

impl Extraction {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Turns a document into linearized text.
pub trait TextExtractor {
    /// Name used in diagnostics.
    fn program(&self) -> &str;

    /// Run the extractor. Only spawn failures and timeouts are `Err`; a
    /// non-zero exit is reported through [`Extraction::code`].
    fn extract(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<Extraction, LoadError>> + Send;
}

/// `pdftotext <args> <path> -` with a bounded run time.
#[derive(Debug, Clone)]
pub struct Pdftotext {
    command: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl Pdftotext {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    pub fn new(command: impl Into<PathBuf>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            args,
            timeout,
        }
    }
}

impl Default for Pdftotext {
    fn default() -> Self {
        Self::new("pdftotext", vec!["-raw".to_string()], Self::DEFAULT_TIMEOUT)
    }
}

impl TextExtractor for Pdftotext {
    fn program(&self) -> &str {
        self.command
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("pdftotext")
    }

    async fn extract(&self, path: &Path) -> Result<Extraction, LoadError> {
        let spawn_err = |source| LoadError::Spawn {
            program: self.program().to_string(),
            path: path.to_path_buf(),
            source,
        };

        tracing::debug!(command = %self.command.display(), args = ?self.args, path = %path.display(), "extracting text");

        let child = tokio::process::Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .arg("-")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(spawn_err)?;

        // Dropping the future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(res) => res.map_err(spawn_err)?,
            Err(_) => {
                return Err(LoadError::Timeout {
                    program: self.program().to_string(),
                    path: path.to_path_buf(),
                    timeout: self.timeout,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(status = %output.status, stderr = %stderr.trim(), "extractor failed");
        }

        Ok(Extraction {
            text: String::from_utf8_lossy(&output.stdout).into_owned(),
            code: output.status.code(),
        })
    }
}
