//! Base for launcher plugins speaking the launcher's JSON-RPC flavour.
//!
//! The launcher starts the plugin process with a single JSON request as its
//! first argument. The plugin answers `query` and `context_menu` by printing
//! `{"result": [...]}` on stdout; other methods are actions and print nothing
//! unless they emit [`ApiCall`]s themselves.

mod api;
mod dispatcher;
mod request;
mod result;

pub use api::{ApiCall, LauncherApi};
pub use dispatcher::{Dispatcher, DispatcherBuilder, Handler, Plugin, CONTEXT_MENU_METHOD, QUERY_METHOD};
pub use request::PluginRequest;
pub use result::PluginResult;

use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No request given, expected it as the first argument")]
    MissingRequest,
    #[error("Invalid request")]
    InvalidRequest {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Unknown method: {0}")]
    UnknownMethod(String),
    #[error("Invalid parameters for {method}: {message}")]
    InvalidParameters { method: String, message: String },
    #[error("Method names cannot be empty")]
    InvalidMethodName,
    #[error("Method {0} is registered twice")]
    DuplicateMethod(String),
    #[error("No handler registered for query")]
    MissingQueryHandler,
    #[error("{0}")]
    Handler(String),
    #[error("DEBUG:{0}")]
    Debug(String),
    #[error("Failed to serialize the response")]
    Serialize {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to write the response")]
    Write {
        #[source]
        cause: std::io::Error,
    },
}

/// Stops the current request and shows `message` in the launcher instead.
pub fn debug(message: impl Display) -> Error {
    Error::Debug(message.to_string())
}
