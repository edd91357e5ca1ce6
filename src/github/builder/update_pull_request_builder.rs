use super::BuilderExecutor;
use crate::github::{github_client::GithubClient, response::PullRequest};
use anyhow::Result;

pub struct UpdatePullRequestBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    pr_number: u64,
    body: String,
}

impl<'a> UpdatePullRequestBuilder<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        pr_number: u64,
    ) -> Self {
        UpdatePullRequestBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            pr_number,
            body: String::new(),
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

impl BuilderExecutor for UpdatePullRequestBuilder<'_> {
    type Output = PullRequest;

    async fn execute(self) -> Result<Self::Output> {
        self.client
            .update_pull_request(&self.owner, &self.repo, self.pr_number, self.body)
            .await
    }
}
