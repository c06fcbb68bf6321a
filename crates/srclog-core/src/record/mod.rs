//! Messages, records and request context

mod context;
mod message;
mod entry;

pub use context::{
    ContextProvider, RequestContext, NoContext,
    metadata_request_id, resolve_request_id, REQUEST_ID_KEY,
};
pub use message::{LogMessage, ErrorDetails};
pub use entry::{LogRecord, format_message};

/// Extra structured data attached to a log call
pub type Metadata = serde_json::Map<String, serde_json::Value>;
