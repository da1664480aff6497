//! Source and sink traits

use async_trait::async_trait;
use linkmask_core::{SinkError, SourceError};

/// Provides every message for a run in one call
#[async_trait]
pub trait Source: Send + Sync {
    async fn produce(&self) -> Result<Vec<String>, SourceError>;

    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;
}

/// Persists the final messages in one call
#[async_trait]
pub trait Sink: Send + Sync {
    async fn present(&self, messages: &[String]) -> Result<(), SinkError>;

    fn describe(&self) -> String;
}

/// Join messages the way every sink writes them
pub fn join_messages(messages: &[String]) -> String {
    messages.join("\n")
}
