//! Fixed-size worker pool
//!
//! The job queue is filled completely and closed before any worker starts,
//! so a worker can never observe an empty-but-open queue. Results flow back
//! through a second channel and are only drained after every worker joined.

use std::sync::Arc;
use std::thread;

use crossbeam::channel::{self, Receiver, Sender};
use linkmask_core::{Error, MaskError, MaskedMessage, Message, OutputOrder, Result};
use tracing::{debug, info};

use crate::masker::{LinkMasker, Transform};

pub const DEFAULT_WORKERS: usize = 10;

type Outcome = std::result::Result<MaskedMessage, MaskError>;

/// Everything the workers produced for one run
#[derive(Debug, Default)]
pub struct PoolOutput {
    pub masked: Vec<MaskedMessage>,
    pub failures: Vec<MaskError>,
}

impl PoolOutput {
    /// Total number of messages accounted for, masked or failed
    pub fn len(&self) -> usize {
        self.masked.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn links_masked(&self) -> usize {
        self.masked.iter().map(|m| m.links).sum()
    }

    /// Rearrange results for the requested output order
    pub fn ordered(mut self, order: OutputOrder) -> Self {
        if order == OutputOrder::Input {
            self.masked.sort_by_key(|m| m.index);
            self.failures.sort_by_key(|f| f.index);
        }
        self
    }

    pub fn texts(&self) -> Vec<String> {
        self.masked.iter().map(|m| m.text.clone()).collect()
    }
}

pub struct WorkerPool {
    workers: usize,
    transform: Arc<dyn Transform>,
}

impl WorkerPool {
    pub fn new(workers: usize, transform: Arc<dyn Transform>) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidWorkerCount(workers));
        }

        Ok(Self { workers, transform })
    }

    /// Pool applying `masker` on `workers` threads
    pub fn with_masker(workers: usize, masker: LinkMasker) -> Result<Self> {
        Self::new(workers, Arc::new(masker))
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Transform every message, blocking until all workers have finished
    ///
    /// A failing message is collected in `failures` without stopping the
    /// others. Results arrive in completion order.
    pub fn run(&self, messages: Vec<Message>) -> Result<PoolOutput> {
        let total = messages.len();
        let capacity = total.max(1);

        let (job_tx, job_rx) = channel::bounded::<Message>(capacity);
        for message in messages {
            job_tx
                .send(message)
                .map_err(|_| Error::Pool("job queue closed while filling".to_string()))?;
        }
        drop(job_tx);

        let (result_tx, result_rx) = channel::bounded::<Outcome>(capacity);
        let transform: &dyn Transform = self.transform.as_ref();

        let panicked = thread::scope(|scope| {
            let handles: Vec<_> = (0..self.workers)
                .map(|id| {
                    let jobs = job_rx.clone();
                    let results = result_tx.clone();
                    scope.spawn(move || work(id, jobs, results, transform))
                })
                .collect();
            drop(result_tx);

            handles
                .into_iter()
                .map(|handle| handle.join())
                .filter(|joined| joined.is_err())
                .count()
        });

        if panicked > 0 {
            return Err(Error::Pool(format!("{} worker(s) panicked", panicked)));
        }

        let mut output = PoolOutput::default();
        for outcome in result_rx.try_iter() {
            match outcome {
                Ok(masked) => output.masked.push(masked),
                Err(failure) => output.failures.push(failure),
            }
        }

        if output.len() != total {
            return Err(Error::Pool(format!(
                "expected {} results, collected {}",
                total,
                output.len()
            )));
        }

        info!(
            messages = total,
            workers = self.workers,
            failures = output.failures.len(),
            "Worker pool finished"
        );

        Ok(output)
    }
}

fn work(id: usize, jobs: Receiver<Message>, results: Sender<Outcome>, transform: &dyn Transform) {
    let mut processed = 0usize;

    for message in jobs.iter() {
        let outcome = transform.transform(&message);
        if results.send(outcome).is_err() {
            break;
        }
        processed += 1;
    }

    debug!(worker = id, processed, "Worker drained queue");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sample_messages() -> Vec<Message> {
        let texts: Vec<String> = (0..250)
            .map(|i| match i % 4 {
                0 => format!("line {} http://host{}.example/path?q={}", i, i, i),
                1 => format!("plain line {}", i),
                2 => format!("http://a{} and http://b{} end", i, i),
                _ => "http://".to_string(),
            })
            .collect();
        Message::sequence(texts)
    }

    fn masked_set(output: &PoolOutput) -> BTreeSet<(usize, String)> {
        output
            .masked
            .iter()
            .map(|m| (m.index, m.text.clone()))
            .collect()
    }

    struct RejectOdd;

    impl Transform for RejectOdd {
        fn transform(&self, message: &Message) -> std::result::Result<MaskedMessage, MaskError> {
            if message.index % 2 == 1 {
                return Err(MaskError::new(message.index, "odd index"));
            }
            LinkMasker::default().transform(message)
        }
    }

    struct Explode;

    impl Transform for Explode {
        fn transform(&self, _message: &Message) -> std::result::Result<MaskedMessage, MaskError> {
            panic!("transform blew up");
        }
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = WorkerPool::with_masker(0, LinkMasker::default());
        assert!(matches!(result, Err(Error::InvalidWorkerCount(0))));
    }

    #[test]
    fn test_cardinality_preserved() {
        let pool = WorkerPool::with_masker(DEFAULT_WORKERS, LinkMasker::default()).unwrap();
        let messages = sample_messages();
        let total = messages.len();

        let output = pool.run(messages).unwrap();

        assert_eq!(output.len(), total);
        assert_eq!(output.masked.len(), total);
        assert!(output.failures.is_empty());
    }

    #[test]
    fn test_same_set_for_any_worker_count() {
        let reference = WorkerPool::with_masker(1, LinkMasker::default())
            .unwrap()
            .run(sample_messages())
            .unwrap();
        let expected = masked_set(&reference);

        for workers in [1, 5, 10, 100] {
            let pool = WorkerPool::with_masker(workers, LinkMasker::default()).unwrap();
            let output = pool.run(sample_messages()).unwrap();
            assert_eq!(masked_set(&output), expected, "workers = {}", workers);
        }
    }

    #[test]
    fn test_input_order_restored() {
        let pool = WorkerPool::with_masker(8, LinkMasker::default()).unwrap();

        let output = pool
            .run(sample_messages())
            .unwrap()
            .ordered(OutputOrder::Input);

        let indices: Vec<usize> = output.masked.iter().map(|m| m.index).collect();
        let expected: Vec<usize> = (0..250).collect();
        assert_eq!(indices, expected);
        assert_eq!(output.masked[3].text, "http://");
    }

    #[test]
    fn test_empty_input() {
        let pool = WorkerPool::with_masker(4, LinkMasker::default()).unwrap();

        let output = pool.run(Vec::new()).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_more_workers_than_messages() {
        let pool = WorkerPool::with_masker(100, LinkMasker::default()).unwrap();

        let output = pool.run(Message::sequence(["http://x y"])).unwrap();

        assert_eq!(output.texts(), vec!["http://* y".to_string()]);
        assert_eq!(output.links_masked(), 1);
    }

    #[test]
    fn test_failures_collected_without_aborting() {
        let pool = WorkerPool::new(3, Arc::new(RejectOdd)).unwrap();

        let output = pool.run(sample_messages()).unwrap().ordered(OutputOrder::Input);

        assert_eq!(output.len(), 250);
        assert_eq!(output.masked.len(), 125);
        assert_eq!(output.failures.len(), 125);
        assert_eq!(output.failures[0], MaskError::new(1, "odd index"));
        assert!(output.masked.iter().all(|m| m.index % 2 == 0));
    }

    #[test]
    fn test_worker_panic_reported() {
        let pool = WorkerPool::new(2, Arc::new(Explode)).unwrap();

        let result = pool.run(Message::sequence(["a", "b"]));

        assert!(matches!(result, Err(Error::Pool(_))));
    }
}
