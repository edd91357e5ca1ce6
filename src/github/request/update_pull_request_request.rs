use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePullRequestRequest {
    pub body: String,
}

impl UpdatePullRequestRequest {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
