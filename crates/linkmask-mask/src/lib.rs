//! Link masking and the worker pool that applies it
//!
//! - `LinkMasker` redacts everything after an unencrypted scheme marker
//! - `WorkerPool` fans messages out to a fixed number of OS threads

pub mod masker;
pub mod pool;

pub use masker::{DEFAULT_MASK_CHAR, DEFAULT_SCHEME, LinkMasker, Transform};
pub use pool::{DEFAULT_WORKERS, PoolOutput, WorkerPool};
