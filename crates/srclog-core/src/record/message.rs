//! Log message payloads

use std::error::Error as StdError;
use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;

/// Structured details of an error being logged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetails {
    /// Short type name, e.g. `ParseIntError`
    pub name: String,
    /// The error's own `Display` text
    pub message: String,
    /// Rendered cause chain, one `caused by:` line per source
    pub stack: String,
}

impl ErrorDetails {
    pub fn new(name: impl Into<String>, message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: stack.into(),
        }
    }

    /// Capture an error value along with its `source()` chain
    ///
    /// The name comes from the static type, so a `&dyn Error` or
    /// `Box<dyn Error>` is always named `Error`. Use [`ErrorDetails::named`]
    /// when the concrete type is erased.
    pub fn from_error<E: StdError + ?Sized>(err: &E) -> Self {
        Self::named(short_type_name::<E>(), err)
    }

    /// Capture an error value under an explicit name
    pub fn named<E: StdError + ?Sized>(name: impl Into<String>, err: &E) -> Self {
        Self::new(name, err.to_string(), cause_chain(err))
    }

    /// Build from the loose fields of a foreign error object
    ///
    /// Missing `name` becomes `Error`; missing `message` or `stack` become empty.
    pub fn from_parts(name: Option<String>, message: Option<String>, stack: Option<String>) -> Self {
        Self::new(
            name.filter(|n| !n.is_empty()).unwrap_or_else(|| "Error".to_string()),
            message.unwrap_or_default(),
            stack.unwrap_or_default(),
        )
    }
}

fn short_type_name<E: ?Sized>() -> String {
    let full = std::any::type_name::<E>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
        .trim_start_matches("dyn ")
        .to_string()
}

fn cause_chain<E: StdError + ?Sized>(err: &E) -> String {
    let mut lines = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("    caused by: {}", cause));
        source = cause.source();
    }
    lines.join("\n")
}

/// What a caller hands to a logger
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    /// Plain text, forwarded as is
    Text(String),
    /// An error, rendered as `name - message - \nstack`
    Error(ErrorDetails),
    /// A structured value, rendered as compact JSON with sorted keys
    Value(Value),
}

impl LogMessage {
    /// Capture an error value
    pub fn error<E: StdError + ?Sized>(err: &E) -> Self {
        LogMessage::Error(ErrorDetails::from_error(err))
    }

    /// Snapshot any serialisable value
    ///
    /// Falls back to the `Debug` rendering if serialisation fails, so this
    /// never fails.
    pub fn from_serialize<T: Serialize + Debug + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(Value::String(s)) => LogMessage::Text(s),
            Ok(v) => LogMessage::Value(v),
            Err(_) => LogMessage::Text(format!("{:?}", value)),
        }
    }

    /// Render the message body, without label or request id
    pub fn render(&self) -> String {
        match self {
            LogMessage::Text(text) => text.clone(),
            LogMessage::Error(details) => {
                format!("{} - {} - \n{}", details.name, details.message, details.stack)
            }
            LogMessage::Value(Value::String(s)) => s.clone(),
            LogMessage::Value(value) => value.to_string(),
        }
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        LogMessage::Text(text.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        LogMessage::Text(text)
    }
}

impl From<&String> for LogMessage {
    fn from(text: &String) -> Self {
        LogMessage::Text(text.clone())
    }
}

impl From<Value> for LogMessage {
    fn from(value: Value) -> Self {
        LogMessage::Value(value)
    }
}

impl From<ErrorDetails> for LogMessage {
    fn from(details: ErrorDetails) -> Self {
        LogMessage::Error(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::fmt;

    #[derive(Debug)]
    struct Outer {
        inner: std::num::ParseIntError,
    }

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "could not read port")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.inner)
        }
    }

    #[test]
    fn test_error_details() {
        let inner = "x".parse::<u16>().unwrap_err();
        let err = Outer { inner };
        let details = ErrorDetails::from_error(&err);

        assert_eq!(details.name, "Outer");
        assert_eq!(details.message, "could not read port");
        assert_eq!(details.stack, "    caused by: invalid digit found in string");
    }

    #[test]
    fn test_error_details_dyn() {
        let err: Box<dyn StdError> = "12a".parse::<u8>().unwrap_err().into();
        let details = ErrorDetails::from_error(err.as_ref());
        assert_eq!(details.name, "Error");
        assert_eq!(details.stack, "");
    }

    #[test]
    fn test_named_keeps_erased_type_name() {
        let err: Box<dyn StdError> = Box::new(Outer {
            inner: "x".parse::<u16>().unwrap_err(),
        });
        let details = ErrorDetails::named("Outer", err.as_ref());
        assert_eq!(details.name, "Outer");
        assert_eq!(details.message, "could not read port");
        assert_eq!(details.stack, "    caused by: invalid digit found in string");
    }

    #[test]
    fn test_from_parts() {
        let details = ErrorDetails::from_parts(
            Some("AppError".to_string()),
            Some("boom".to_string()),
            Some("AppError: boom\n    at main.js:1:1".to_string()),
        );
        assert_eq!(
            LogMessage::from(details).render(),
            "AppError - boom - \nAppError: boom\n    at main.js:1:1"
        );

        let bare = ErrorDetails::from_parts(None, None, None);
        assert_eq!(bare, ErrorDetails::new("Error", "", ""));
    }

    #[test]
    fn test_render_error() {
        let message = LogMessage::from(ErrorDetails::new("AppError", "boom", "at main"));
        assert_eq!(message.render(), "AppError - boom - \nat main");
    }

    #[test]
    fn test_value_is_stable_json() {
        let message = LogMessage::from(json!({ "b": 1, "a": { "g": [{ "g": 1 }] } }));
        assert_eq!(message.render(), r#"{"a":{"g":[{"g":1}]},"b":1}"#);
    }

    #[test]
    fn test_from_serialize() {
        let mut map = HashMap::new();
        map.insert("z", 1);
        map.insert("y", 2);
        assert_eq!(LogMessage::from_serialize(&map).render(), r#"{"y":2,"z":1}"#);
        assert_eq!(LogMessage::from_serialize("plain"), LogMessage::Text("plain".to_string()));
    }

    #[test]
    fn test_from_serialize_fallback() {
        // Non-string map keys cannot be JSON object keys
        let mut map = HashMap::new();
        map.insert(vec![1u8], "v");
        let message = LogMessage::from_serialize(&map);
        assert_eq!(message, LogMessage::Text(r#"{[1]: "v"}"#.to_string()));
    }
}
