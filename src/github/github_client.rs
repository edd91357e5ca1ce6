use super::{
    criteria::FilterCriteria,
    fetcher::PAGE_SIZE,
    handler::repository_handler::RepositoryHandler,
    request::{SerializeRequest, UpdatePullRequestRequest},
    response::{IssueItem, Milestone, PullRequest},
};
use crate::http::{Client, ClientRequestBuilder};
use anyhow::{Context, Result};

pub struct GithubClient {
    http: Client,
}

impl GithubClient {
    pub fn new(http: Client) -> Self {
        GithubClient { http }
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler {
        RepositoryHandler::new(self, owner, name)
    }

    pub(super) async fn list_open_milestones(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<Milestone>, crate::http::Error> {
        let uri = format!("repos/{}/{}/milestones", owner, repo);

        self.http
            .get(&uri)
            .query("state", "open")
            .query("per_page", PAGE_SIZE)
            .send()
            .await
    }

    pub(super) async fn list_issues_page(
        &self,
        owner: &str,
        repo: &str,
        criteria: &FilterCriteria,
        page: u32,
    ) -> Result<Vec<IssueItem>, crate::http::Error> {
        let uri = format!("repos/{}/{}/issues", owner, repo);

        self.http
            .get(&uri)
            .query("state", criteria.state)
            .query_opt("milestone", criteria.milestone)
            .query_opt("labels", criteria.label_filter())
            .query("per_page", PAGE_SIZE)
            .query("page", page)
            .send()
            .await
    }

    pub(super) async fn list_pulls_page(
        &self,
        owner: &str,
        repo: &str,
        criteria: &FilterCriteria,
        page: u32,
    ) -> Result<Vec<PullRequest>, crate::http::Error> {
        let uri = format!("repos/{}/{}/pulls", owner, repo);

        self.http
            .get(&uri)
            .query("state", criteria.state)
            .query_opt("milestone", criteria.milestone)
            .query_opt("labels", criteria.label_filter())
            .query("per_page", PAGE_SIZE)
            .query("page", page)
            .send()
            .await
    }

    pub(super) async fn update_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        body: String,
    ) -> Result<PullRequest> {
        let uri = format!("repos/{}/{}/pulls/{}", owner, repo, pr_number);

        log::info!("Attempting to update PR #{} in {}/{}...", pr_number, owner, repo);
        log::info!("URL: {}", self.http.url(&uri));

        let body = UpdatePullRequestRequest::new(body).into_request()?;

        let pr: PullRequest = self
            .http
            .patch(&uri)
            .body(body)
            .send()
            .await
            .with_context(|| format!("Error updating pull request #{}", pr_number))?;

        log::info!("Successfully updated PR #{}.", pr_number);

        Ok(pr)
    }
}
