//! Node.js bindings for srclog via napi-rs
//!
//! Exposes a `Logger` class meant to be created once per file:
//!
//! ```js
//! const { Logger } = require('srclog');
//! const logger = new Logger(__filename);
//! logger.info('started', { port: 8080 });
//! logger.error(new Error('boom'));
//! ```
//!
//! Every logger writes through one process-wide set of transports. The
//! console is always present; `addFileTransport(path)` appends to it.

#![deny(clippy::all)]

use std::path::MAIN_SEPARATOR;
use std::sync::Arc;

use napi::bindgen_prelude::*;
use napi::{Env, JsObject, JsUnknown, ValueType};
use napi_derive::napi;
use once_cell::sync::Lazy;
use serde_json::Value;

use srclog_core::{
    canonicalize, ConsoleSink, ErrorDetails, FanoutSink, FileSink, Log, LogMessage, LoggerConfig,
    Metadata, ProjectRoot, RequestContext, Severity, SourceLogger,
};

/// Transports shared by every `Logger` in the process
static TRANSPORTS: Lazy<Arc<FanoutSink>> =
    Lazy::new(|| Arc::new(FanoutSink::new(vec![Arc::new(ConsoleSink::colored())])));

const UNREADABLE_MESSAGE: &str = "[unreadable message]";

// ============================================================================
// Conversions
// ============================================================================

/// Convert whatever JS handed us into a message
///
/// `Error` instances keep their `name`, `message` and `stack`, which JSON
/// conversion would drop. Anything that cannot be read becomes a placeholder
/// rather than an exception.
fn to_message(env: &Env, value: JsUnknown) -> LogMessage {
    read_message(env, value).unwrap_or_else(|_| LogMessage::Text(UNREADABLE_MESSAGE.to_string()))
}

fn read_message(env: &Env, value: JsUnknown) -> Result<LogMessage> {
    if value.is_error()? {
        let object: JsObject = unsafe { value.cast() };
        return Ok(LogMessage::Error(ErrorDetails::from_parts(
            string_property(&object, "name")?,
            string_property(&object, "message")?,
            string_property(&object, "stack")?,
        )));
    }
    match value.get_type()? {
        ValueType::String => Ok(LogMessage::Text(value.coerce_to_string()?.into_utf8()?.into_owned()?)),
        _ => Ok(LogMessage::Value(env.from_js_value::<Value, _>(value)?)),
    }
}

fn string_property(object: &JsObject, key: &str) -> Result<Option<String>> {
    let value = object.get_named_property_unchecked::<JsUnknown>(key)?;
    match value.get_type()? {
        ValueType::Undefined | ValueType::Null => Ok(None),
        _ => Ok(Some(value.coerce_to_string()?.into_utf8()?.into_owned()?)),
    }
}

fn to_metadata(value: Option<Value>) -> Option<Metadata> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(other) => {
            let mut map = Metadata::new();
            map.insert("metadata".to_string(), other);
            Some(map)
        }
    }
}

/// Root used when `PROJECT_ROOT` is unset: the working directory
fn working_dir_root() -> ProjectRoot {
    std::env::current_dir()
        .map(|dir| ProjectRoot::new(format!("{}{}", dir.display(), MAIN_SEPARATOR)))
        .unwrap_or_default()
}

// ============================================================================
// Logger
// ============================================================================

#[napi]
pub struct Logger {
    inner: SourceLogger,
}

#[napi]
impl Logger {
    /// Reads `PROJECT_ROOT` and `LOG_LEVEL`; throws if `LOG_LEVEL` is invalid
    #[napi(constructor)]
    pub fn new(filename: Option<String>) -> Result<Self> {
        let settings = LoggerConfig::from_env()
            .resolve_with_root(working_dir_root())
            .map_err(|e| Error::from_reason(e.to_string()))?;
        Ok(Self {
            inner: SourceLogger::new(filename.as_deref(), &settings, TRANSPORTS.clone()),
        })
    }

    #[napi(getter, js_name = "filename")]
    pub fn filename(&self) -> String {
        self.inner.display_name().to_string()
    }

    #[napi(setter, js_name = "filename")]
    pub fn set_filename(&mut self, value: String) {
        self.inner.set_display_name(value);
    }

    #[napi(getter, js_name = "logLevel")]
    pub fn log_level(&self) -> String {
        self.inner.level().to_string()
    }

    #[napi(setter, js_name = "logLevel")]
    pub fn set_log_level(&mut self, value: String) -> Result<()> {
        self.inner
            .set_level(&value)
            .map_err(|e| Error::from_reason(e.to_string()))
    }

    #[napi]
    pub fn log(&self, env: Env, level: String, message: JsUnknown, metadata: Option<Value>) {
        self.inner.log(&level, to_message(&env, message), to_metadata(metadata).as_ref());
    }

    #[napi]
    pub fn log_error(
        &self,
        level: String,
        name: String,
        message: String,
        stack: Option<String>,
        metadata: Option<Value>,
    ) {
        let details = ErrorDetails::new(name, message, stack.unwrap_or_default());
        self.inner.log(&level, details, to_metadata(metadata).as_ref());
    }

    #[napi]
    pub fn log_with_request_id(
        &self,
        env: Env,
        request_id: String,
        level: String,
        message: JsUnknown,
        metadata: Option<Value>,
    ) {
        let ctx = RequestContext::new(request_id);
        self.inner
            .with_context(&ctx)
            .log(&level, to_message(&env, message), to_metadata(metadata).as_ref());
    }

    #[napi]
    pub fn debug(&self, env: Env, message: JsUnknown, metadata: Option<Value>) {
        self.log_severity(&env, Severity::Debug, message, metadata);
    }

    #[napi]
    pub fn info(&self, env: Env, message: JsUnknown, metadata: Option<Value>) {
        self.log_severity(&env, Severity::Info, message, metadata);
    }

    #[napi]
    pub fn notice(&self, env: Env, message: JsUnknown, metadata: Option<Value>) {
        self.log_severity(&env, Severity::Notice, message, metadata);
    }

    #[napi]
    pub fn warn(&self, env: Env, message: JsUnknown, metadata: Option<Value>) {
        self.log_severity(&env, Severity::Warning, message, metadata);
    }

    #[napi]
    pub fn warning(&self, env: Env, message: JsUnknown, metadata: Option<Value>) {
        self.log_severity(&env, Severity::Warning, message, metadata);
    }

    #[napi]
    pub fn error(&self, env: Env, message: JsUnknown, metadata: Option<Value>) {
        self.log_severity(&env, Severity::Error, message, metadata);
    }

    #[napi]
    pub fn err(&self, env: Env, message: JsUnknown, metadata: Option<Value>) {
        self.log_severity(&env, Severity::Error, message, metadata);
    }

    #[napi]
    pub fn crit(&self, env: Env, message: JsUnknown, metadata: Option<Value>) {
        self.log_severity(&env, Severity::Crit, message, metadata);
    }

    #[napi]
    pub fn alert(&self, env: Env, message: JsUnknown, metadata: Option<Value>) {
        self.log_severity(&env, Severity::Alert, message, metadata);
    }

    #[napi]
    pub fn emerg(&self, env: Env, message: JsUnknown, metadata: Option<Value>) {
        self.log_severity(&env, Severity::Emerg, message, metadata);
    }

    #[napi(js_name = "toString")]
    pub fn to_js_string(&self) -> String {
        self.inner.describe()
    }
}

impl Logger {
    fn log_severity(&self, env: &Env, severity: Severity, message: JsUnknown, metadata: Option<Value>) {
        self.inner
            .log_at(severity, to_message(env, message), to_metadata(metadata).as_ref());
    }
}

/// Canonical name of a severity (`err` → `error`), or null if unknown
#[napi]
pub fn canonicalize_level(name: String) -> Option<String> {
    canonicalize(&name).map(str::to_string)
}

/// Append every line logged from now on, by any logger, to `path`
///
/// Throws if the file cannot be opened. Loggers created before the call
/// pick up the new transport as well.
#[napi]
pub fn add_file_transport(path: String) -> Result<()> {
    let sink = FileSink::open(&path).map_err(|e| Error::from_reason(format!("{}: {}", path, e)))?;
    TRANSPORTS.push(Arc::new(sink));
    Ok(())
}
