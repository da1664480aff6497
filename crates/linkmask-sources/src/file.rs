use std::borrow::Cow;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use linkmask_core::{SinkError, SourceError};
use tracing::{debug, warn};

use crate::handler::{Sink, Source, join_messages};

/// Reads one message per line from a file
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the run, so links on the remaining lines are still masked.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Source for FileSource {
    async fn produce(&self) -> Result<Vec<String>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::Read {
                location: self.path.display().to_string(),
                source: e,
            })?;

        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            warn!(path = %self.path.display(), "Input is not valid UTF-8, replacing invalid bytes");
        }

        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        debug!(path = %self.path.display(), lines = lines.len(), "Read input file");

        Ok(lines)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Writes messages to a file, newline separated with no trailing newline
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Write {
            location: self.path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl Sink for FileSink {
    async fn present(&self, messages: &[String]) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        tokio::fs::write(&self.path, join_messages(messages))
            .await
            .map_err(|e| self.write_error(e))?;

        debug!(path = %self.path.display(), lines = messages.len(), "Wrote output file");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
