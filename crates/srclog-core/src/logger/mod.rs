//! Logger handles
//!
//! - `SourceLogger`: one per source file or component
//! - `ScopedLogger`: a logger borrowed with a request context
//! - `Log`: the severity-named logging methods both expose

mod traits;
mod handle;
mod scoped;

pub use traits::Log;
pub use handle::SourceLogger;
pub use scoped::ScopedLogger;
