//! Sinks: where accepted log calls end up

mod traits;
mod noop;
mod console;
mod file;
mod memory;
mod fanout;
mod tracing_sink;

pub use traits::{Sink, SharedSink};
pub use noop::NoOpSink;
pub use console::{ConsoleSink, format_line};
pub use file::FileSink;
pub use memory::MemorySink;
pub use fanout::FanoutSink;
pub use tracing_sink::{TracingSink, tracing_level, TRACING_TARGET};
