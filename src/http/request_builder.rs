use super::{
    client::{Client, USER_AGENT_NAME},
    response::{AsyncFrom, Response},
    Error,
};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    Method,
};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

pub trait RequestType {}
pub struct Get;
pub struct Patch;

impl RequestType for Get {}
impl RequestType for Patch {}

pub struct InitBuilder {}

impl InitBuilder {
    pub fn get(client: Client, url: impl Into<String>) -> RequestBuilder<Get> {
        RequestBuilder::new(client, Method::GET, url)
    }

    pub fn patch(client: Client, url: impl Into<String>) -> RequestBuilder<Patch> {
        RequestBuilder::new(client, Method::PATCH, url)
    }
}

pub struct RequestBuilder<T: RequestType> {
    _marker: PhantomData<T>,
    client: Client,
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    body: Option<String>,
}

impl<T> RequestBuilder<T>
where
    T: RequestType,
{
    fn new(client: Client, method: Method, url: impl Into<String>) -> Self {
        RequestBuilder {
            _marker: PhantomData,
            client,
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub async fn send<R>(self) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let mut builder = self
            .client
            .inner()
            .request(self.method, &self.url)
            .bearer_auth(self.client.token())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, USER_AGENT_NAME);

        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }

        if let Some(body) = self.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        log::debug!("sending request to {}", self.url);
        let response = builder.send().await.map_err(|cause| {
            log::error!("Request to {} failed: {}", self.url, cause);
            Error::Transport {
                url: self.url.to_owned(),
                cause,
            }
        })?;

        Response::<R>::async_from(response).await.collect()
    }
}

impl RequestBuilder<Patch> {
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
