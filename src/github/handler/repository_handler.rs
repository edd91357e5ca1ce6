use super::{milestones_handler::MilestonesHandler, pull_requests_handler::PullRequestsHandler};
use crate::github::github_client::GithubClient;

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.repo
    }

    pub fn pull_requests(&self) -> PullRequestsHandler<'a> {
        PullRequestsHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn milestones(&self) -> MilestonesHandler<'a> {
        MilestonesHandler::new(self.client, &self.owner, &self.repo)
    }
}
