pub mod file;
pub mod handler;
pub mod memory;
pub mod stdout;

pub use file::{FileSink, FileSource};
pub use handler::{Sink, Source};
pub use memory::{MemorySink, TextSource};
pub use stdout::StdoutSink;
