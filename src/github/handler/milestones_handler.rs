use crate::github::{github_client::GithubClient, response::Milestone};
use crate::http;

pub struct MilestonesHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> MilestonesHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        MilestonesHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn list_open(&self) -> Result<Vec<Milestone>, http::Error> {
        self.client
            .list_open_milestones(&self.owner, &self.repo)
            .await
    }
}
