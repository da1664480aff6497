use std::sync::Arc;
use std::time::{Duration, Instant};

use linkmask_config::Config;
use linkmask_core::{Error, Message, OutputOrder, Result};
use linkmask_mask::{LinkMasker, WorkerPool};
use linkmask_sources::{Sink, Source};
use serde::Serialize;
use tracing::{info, warn};

/// Summary of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub source: String,
    pub sink: String,
    pub messages: usize,
    pub links_masked: usize,
    pub workers: usize,
    pub order: OutputOrder,
    #[serde(with = "millis")]
    pub elapsed: Duration,
}

/// Source -> WorkerPool -> Sink
pub struct Pipeline {
    source: Box<dyn Source>,
    sink: Box<dyn Sink>,
    pool: Arc<WorkerPool>,
    order: OutputOrder,
}

impl Pipeline {
    pub fn new(source: Box<dyn Source>, sink: Box<dyn Sink>, pool: WorkerPool) -> Self {
        Self {
            source,
            sink,
            pool: Arc::new(pool),
            order: OutputOrder::default(),
        }
    }

    pub fn from_config(
        config: &Config,
        source: Box<dyn Source>,
        sink: Box<dyn Sink>,
    ) -> Result<Self> {
        config.validate()?;

        let masker = LinkMasker::new(config.masking.scheme.clone(), config.masking.mask_char)?;
        let pool = WorkerPool::with_masker(config.pool.workers, masker)?;

        Ok(Self::new(source, sink, pool).with_order(config.pool.order))
    }

    pub fn with_order(mut self, order: OutputOrder) -> Self {
        self.order = order;
        self
    }

    /// Run once, end to end. Nothing reaches the sink unless every message was masked.
    pub async fn run(&self) -> Result<RunReport> {
        let started = Instant::now();

        // 1. Produce
        let texts = self.source.produce().await?;
        let messages = Message::sequence(texts);
        let total = messages.len();
        info!(
            source = %self.source.describe(),
            messages = total,
            workers = self.pool.workers(),
            "Masking messages"
        );

        // 2. Mask on OS threads, off the async runtime
        let pool = Arc::clone(&self.pool);
        let output = tokio::task::spawn_blocking(move || pool.run(messages))
            .await
            .map_err(|e| Error::Pool(e.to_string()))??
            .ordered(self.order);

        if !output.failures.is_empty() {
            for failure in &output.failures {
                warn!(index = failure.index, reason = %failure.reason, "Message not masked");
            }
            return Err(Error::Mask(output.failures));
        }

        // 3. Present
        let links_masked = output.links_masked();
        self.sink.present(&output.texts()).await?;

        let report = RunReport {
            source: self.source.describe(),
            sink: self.sink.describe(),
            messages: total,
            links_masked,
            workers: self.pool.workers(),
            order: self.order,
            elapsed: started.elapsed(),
        };
        info!(
            sink = %report.sink,
            messages = report.messages,
            links = report.links_masked,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Run complete"
        );

        Ok(report)
    }
}

mod millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }
}
