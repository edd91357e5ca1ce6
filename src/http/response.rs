use super::Error;
use serde::de::DeserializeOwned;

pub enum Response<T> {
    Success(Inner<T>),
    Error(Error),
}

pub struct Inner<T> {
    pub status: u16,
    pub payload: T,
}

impl<T> Response<T> {
    pub fn collect(self) -> Result<T, Error> {
        match self {
            Response::Success(response) => {
                log::debug!("response status {}", response.status);
                Ok(response.payload)
            }
            Response::Error(err) => Err(err),
        }
    }
}

pub trait AsyncFrom<T>: Sized {
    async fn async_from(value: T) -> Self;
}

impl<T> AsyncFrom<reqwest::Response> for Response<T>
where
    T: DeserializeOwned,
{
    async fn async_from(value: reqwest::Response) -> Self {
        let status = value.status().as_u16();
        let url = value.url().to_string();

        let text = match value.text().await {
            Ok(text) => text,
            Err(cause) => {
                log::error!("Failed to read response from {}: {}", url, cause);
                return Response::Error(Error::ReadResponseText { url, cause });
            }
        };

        if !(200..300).contains(&status) {
            log::error!("Response status code: {}", status);
            log::error!("Response text: {}", text);
            return Response::Error(Error::Status {
                url,
                status,
                body: text,
            });
        }

        match serde_json::from_str::<T>(&text) {
            Ok(payload) => Response::Success(Inner { status, payload }),
            Err(cause) => {
                log::error!("Failed to parse json from {}: {}", url, cause);
                Response::Error(Error::ParseResponse { url, cause })
            }
        }
    }
}
