pub mod client;
pub mod request_builder;
pub mod response;

pub use client::{Client, ClientRequestBuilder};
pub use response::Response;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{url} responded with status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
    #[error("Failed to send request to {url}")]
    Transport {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text from {url}")]
    ReadResponseText {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response from {url}")]
    ParseResponse {
        url: String,
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to build the http client")]
    Build {
        #[source]
        cause: reqwest::Error,
    },
}

impl Error {
    /// HTTP status of the failed call, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
