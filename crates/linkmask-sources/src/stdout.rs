use async_trait::async_trait;
use linkmask_core::SinkError;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::handler::{Sink, join_messages};

/// Writes messages to standard output
pub struct StdoutSink;

impl StdoutSink {
    /// Newline-terminated output; nothing at all for an empty run
    async fn write_to<W>(writer: &mut W, messages: &[String]) -> Result<(), SinkError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        if messages.is_empty() {
            return Ok(());
        }

        let mut payload = join_messages(messages);
        payload.push('\n');

        let write_error = |source| SinkError::Write {
            location: "stdout".to_string(),
            source,
        };

        writer
            .write_all(payload.as_bytes())
            .await
            .map_err(write_error)?;
        writer.flush().await.map_err(write_error)
    }
}

#[async_trait]
impl Sink for StdoutSink {
    async fn present(&self, messages: &[String]) -> Result<(), SinkError> {
        Self::write_to(&mut tokio::io::stdout(), messages).await
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}
