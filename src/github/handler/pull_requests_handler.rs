use crate::github::{
    builder::update_pull_request_builder::UpdatePullRequestBuilder,
    criteria::FilterCriteria,
    fetcher::{FetchStrategy, Fetcher, IssuesFetcher, PullRequestFetcher, PullsFetcher},
    github_client::GithubClient,
    response::PullRequest,
};
use crate::http;

pub struct PullRequestsHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> PullRequestsHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        PullRequestsHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn fetcher(&self, strategy: FetchStrategy) -> Fetcher<'a> {
        match strategy {
            FetchStrategy::Issues => {
                Fetcher::Issues(IssuesFetcher::new(self.client, &self.owner, &self.repo))
            }
            FetchStrategy::Pulls => {
                Fetcher::Pulls(PullsFetcher::new(self.client, &self.owner, &self.repo))
            }
        }
    }

    pub async fn list(
        &self,
        strategy: FetchStrategy,
        criteria: &FilterCriteria,
    ) -> Result<Vec<PullRequest>, http::Error> {
        self.fetcher(strategy).fetch(criteria).await
    }

    pub fn update(&self, pr_number: u64) -> UpdatePullRequestBuilder<'a> {
        UpdatePullRequestBuilder::new(self.client, &self.owner, &self.repo, pr_number)
    }
}
