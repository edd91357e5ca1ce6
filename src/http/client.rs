use super::{
    request_builder::{Get, InitBuilder, Patch, RequestBuilder},
    Error,
};
use std::time::Duration;

pub const USER_AGENT_NAME: &str = "release-pr-writer";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated client bound to one REST API root.
#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
    token: String,
}

impl Client {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Client, Error> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|cause| Error::Build { cause })?;

        Ok(Client {
            inner,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(super) fn token(&self) -> &str {
        &self.token
    }

    pub(super) fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}

pub trait ClientRequestBuilder {
    fn get(&self, path: &str) -> RequestBuilder<Get>;
    fn patch(&self, path: &str) -> RequestBuilder<Patch>;
}

impl ClientRequestBuilder for Client {
    fn get(&self, path: &str) -> RequestBuilder<Get> {
        InitBuilder::get(self.clone(), self.url(path))
    }

    fn patch(&self, path: &str) -> RequestBuilder<Patch> {
        InitBuilder::patch(self.clone(), self.url(path))
    }
}
