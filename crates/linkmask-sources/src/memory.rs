use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use linkmask_core::{SinkError, SourceError};

use crate::handler::{Sink, Source};

/// Messages held in memory
pub struct TextSource {
    messages: Vec<String>,
}

impl TextSource {
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl Source for TextSource {
    async fn produce(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.messages.clone())
    }

    fn describe(&self) -> String {
        format!("text:{} message(s)", self.messages.len())
    }
}

/// Collects presented messages; clones share the same buffer
#[derive(Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
    presented: Arc<AtomicUsize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages from the most recent `present` call
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of `present` calls so far
    pub fn presented(&self) -> usize {
        self.presented.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Sink for MemorySink {
    async fn present(&self, messages: &[String]) -> Result<(), SinkError> {
        let mut stored = self
            .messages
            .lock()
            .map_err(|_| SinkError::Other(anyhow::anyhow!("Memory sink lock poisoned")))?;
        *stored = messages.to_vec();
        self.presented.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
