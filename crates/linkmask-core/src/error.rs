use thiserror::Error;

/// Failure to obtain the input messages
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failure to persist the masked messages
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failure to transform a single message, keyed to its input position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Message {index} could not be masked: {reason}")]
pub struct MaskError {
    pub index: usize,
    pub reason: String,
}

impl MaskError {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("{} message(s) could not be masked", .0.len())]
    Mask(Vec<MaskError>),

    #[error("Invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    #[error("Invalid scheme marker: must not be empty")]
    InvalidScheme,

    #[error("Worker pool error: {0}")]
    Pool(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
