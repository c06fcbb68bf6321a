//! Request-scoped correlation data
//!
//! Request handling code threads a [`RequestContext`] down to the places that
//! log, rather than loggers reaching into thread-local state.

use serde_json::Value;

use super::Metadata;

/// Metadata key that may carry a request id
pub const REQUEST_ID_KEY: &str = "requestId";

/// Source of the current request id
pub trait ContextProvider {
    fn current_request_id(&self) -> Option<String>;
}

/// Correlation data for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: Option<String>,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
        }
    }
}

impl ContextProvider for RequestContext {
    fn current_request_id(&self) -> Option<String> {
        self.request_id.clone().filter(|id| !id.is_empty())
    }
}

/// No request in flight
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContext;

impl ContextProvider for NoContext {
    fn current_request_id(&self) -> Option<String> {
        None
    }
}

impl<T: ContextProvider> ContextProvider for Option<T> {
    fn current_request_id(&self) -> Option<String> {
        self.as_ref().and_then(|c| c.current_request_id())
    }
}

impl<T: ContextProvider + ?Sized> ContextProvider for &T {
    fn current_request_id(&self) -> Option<String> {
        (**self).current_request_id()
    }
}

/// Request id carried in call metadata, if any
pub fn metadata_request_id(metadata: &Metadata) -> Option<String> {
    match metadata.get(REQUEST_ID_KEY)? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Pick the request id for a call: context first, then metadata
pub fn resolve_request_id(
    context: Option<&dyn ContextProvider>,
    metadata: Option<&Metadata>,
) -> Option<String> {
    context
        .and_then(|c| c.current_request_id())
        .or_else(|| metadata.and_then(metadata_request_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta(value: Value) -> Metadata {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_context_wins_over_metadata() {
        let ctx = RequestContext::new("abc-123");
        let metadata = meta(json!({ "requestId": "xyz" }));
        assert_eq!(resolve_request_id(Some(&ctx), Some(&metadata)).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_metadata_fallback() {
        let metadata = meta(json!({ "requestId": 12345678 }));
        assert_eq!(resolve_request_id(Some(&NoContext), Some(&metadata)).as_deref(), Some("12345678"));
        assert_eq!(resolve_request_id(None, Some(&metadata)).as_deref(), Some("12345678"));

        let empty_ctx = RequestContext::default();
        let metadata = meta(json!({ "requestId": "xyz" }));
        assert_eq!(resolve_request_id(Some(&empty_ctx), Some(&metadata)).as_deref(), Some("xyz"));
    }

    #[test]
    fn test_no_request_id() {
        let metadata = meta(json!({ "requestId": null, "other": "yay" }));
        assert_eq!(resolve_request_id(None, Some(&metadata)), None);
        assert_eq!(resolve_request_id(None, None), None);
    }

    #[test]
    fn test_option_provider() {
        let some: Option<RequestContext> = Some(RequestContext::new("r1"));
        let none: Option<RequestContext> = None;
        assert_eq!(some.current_request_id().as_deref(), Some("r1"));
        assert_eq!(none.current_request_id(), None);
    }
}
