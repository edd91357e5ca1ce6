use super::{criteria::FilterCriteria, github_client::GithubClient, response::PullRequest};
use crate::http;
use serde::Deserialize;

pub const PAGE_SIZE: u32 = 100;

/// Listing endpoint used to collect pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStrategy {
    /// `/issues`, which supports milestone and label filters but mixes in plain issues.
    #[default]
    Issues,
    /// `/pulls`, which returns pull requests only.
    Pulls,
}

pub trait PullRequestFetcher {
    /// Returns `None` once the endpoint hands back an empty page.
    async fn fetch_page(
        &self,
        criteria: &FilterCriteria,
        page: u32,
    ) -> Result<Option<Vec<PullRequest>>, http::Error>;

    async fn fetch(&self, criteria: &FilterCriteria) -> Result<Vec<PullRequest>, http::Error> {
        let mut all_prs = vec![];
        let mut page = 1;

        while let Some(prs) = self.fetch_page(criteria, page).await? {
            log::debug!("page {}: {} pull requests", page, prs.len());
            all_prs.extend(prs);
            page += 1;
        }

        Ok(all_prs)
    }
}

pub struct IssuesFetcher<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> IssuesFetcher<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        IssuesFetcher {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl PullRequestFetcher for IssuesFetcher<'_> {
    async fn fetch_page(
        &self,
        criteria: &FilterCriteria,
        page: u32,
    ) -> Result<Option<Vec<PullRequest>>, http::Error> {
        let items = self
            .client
            .list_issues_page(&self.owner, &self.repo, criteria, page)
            .await
            .map_err(|err| {
                log::error!("Error fetching pull requests: {}", err);
                err
            })?;

        if items.is_empty() {
            return Ok(None);
        }

        // a pull request is a kind of issue, plain issues carry no marker
        let prs = items
            .into_iter()
            .filter_map(|item| item.into_pull_request())
            .collect();

        Ok(Some(prs))
    }
}

pub struct PullsFetcher<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> PullsFetcher<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        PullsFetcher {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl PullRequestFetcher for PullsFetcher<'_> {
    async fn fetch_page(
        &self,
        criteria: &FilterCriteria,
        page: u32,
    ) -> Result<Option<Vec<PullRequest>>, http::Error> {
        let prs = self
            .client
            .list_pulls_page(&self.owner, &self.repo, criteria, page)
            .await
            .map_err(|err| {
                log::error!("Error fetching pull requests: {}", err);
                err
            })?;

        Ok(if prs.is_empty() { None } else { Some(prs) })
    }
}

/// One of the fetch strategies, picked from configuration.
pub enum Fetcher<'a> {
    Issues(IssuesFetcher<'a>),
    Pulls(PullsFetcher<'a>),
}

impl PullRequestFetcher for Fetcher<'_> {
    async fn fetch_page(
        &self,
        criteria: &FilterCriteria,
        page: u32,
    ) -> Result<Option<Vec<PullRequest>>, http::Error> {
        match self {
            Fetcher::Issues(fetcher) => fetcher.fetch_page(criteria, page).await,
            Fetcher::Pulls(fetcher) => fetcher.fetch_page(criteria, page).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::criteria::StateFilter;
    use crate::http::{client::DEFAULT_TIMEOUT, Client};
    use anyhow::Result;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::{json, Value};

    fn pr_json(number: u64) -> Value {
        json!({
            "number": number,
            "title": format!("PR {}", number),
            "state": "closed",
            "labels": [],
            "assignees": [],
            "milestone": null,
            "pull_request": {"url": "u"}
        })
    }

    fn github(server: &ServerGuard) -> GithubClient {
        GithubClient::new(Client::new(server.url(), "token", DEFAULT_TIMEOUT).unwrap())
    }

    #[tokio::test]
    async fn should_paginate_until_an_empty_page() -> Result<()> {
        let mut server = Server::new_async().await;
        let github = github(&server);

        let mut mocks = vec![];
        for page in 1..=3u64 {
            let items: Vec<Value> = (1..=100).map(|n| pr_json((page - 1) * 100 + n)).collect();
            let m = server
                .mock("GET", "/repos/o/r/issues")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("page".into(), page.to_string()),
                    Matcher::UrlEncoded("per_page".into(), "100".into()),
                    Matcher::UrlEncoded("state".into(), "all".into()),
                ]))
                .with_body(Value::Array(items).to_string())
                .expect(1)
                .create_async()
                .await;
            mocks.push(m);
        }
        let last = server
            .mock("GET", "/repos/o/r/issues")
            .match_query(Matcher::UrlEncoded("page".into(), "4".into()))
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        let prs = IssuesFetcher::new(&github, "o", "r")
            .fetch(&FilterCriteria::all())
            .await?;

        for m in mocks {
            m.assert_async().await;
        }
        last.assert_async().await;
        assert_eq!(prs.len(), 300);
        assert_eq!(prs.first().map(|p| p.number), Some(1));
        assert_eq!(prs.last().map(|p| p.number), Some(300));

        Ok(())
    }

    #[tokio::test]
    async fn should_drop_plain_issues_but_keep_paginating() -> Result<()> {
        let mut server = Server::new_async().await;
        let github = github(&server);

        let issue = json!({"number": 7, "title": "Issue", "state": "open"});
        let first = server
            .mock("GET", "/repos/o/r/issues")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_body(json!([issue]).to_string())
            .create_async()
            .await;
        let second = server
            .mock("GET", "/repos/o/r/issues")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_body(json!([pr_json(8)]).to_string())
            .create_async()
            .await;
        let third = server
            .mock("GET", "/repos/o/r/issues")
            .match_query(Matcher::UrlEncoded("page".into(), "3".into()))
            .with_body("[]")
            .create_async()
            .await;

        let prs = github
            .repo("o", "r")
            .pull_requests()
            .list(FetchStrategy::Issues, &FilterCriteria::all())
            .await?;

        first.assert_async().await;
        second.assert_async().await;
        third.assert_async().await;
        assert_eq!(prs.iter().map(|p| p.number).collect::<Vec<_>>(), vec![8]);

        Ok(())
    }

    #[tokio::test]
    async fn should_forward_filters_and_keep_every_pull() -> Result<()> {
        let mut server = Server::new_async().await;
        let github = github(&server);

        let pr = json!({"number": 9, "title": "Fix", "state": "closed"});
        let first = server
            .mock("GET", "/repos/o/r/pulls")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("state".into(), "closed".into()),
                Matcher::UrlEncoded("labels".into(), "bug".into()),
                Matcher::UrlEncoded("milestone".into(), "5".into()),
            ]))
            .with_body(json!([pr]).to_string())
            .create_async()
            .await;
        let second = server
            .mock("GET", "/repos/o/r/pulls")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_body("[]")
            .create_async()
            .await;

        let criteria = FilterCriteria::new("bug", StateFilter::Closed).milestone(Some(5));
        let prs = github
            .repo("o", "r")
            .pull_requests()
            .list(FetchStrategy::Pulls, &criteria)
            .await?;

        first.assert_async().await;
        second.assert_async().await;
        assert_eq!(prs.len(), 1);
        assert_eq!(prs[0].number, 9);

        Ok(())
    }

    #[tokio::test]
    async fn should_abort_on_the_first_failing_page() -> Result<()> {
        let mut server = Server::new_async().await;
        let github = github(&server);

        let m = server
            .mock("GET", "/repos/o/r/issues")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(500)
            .with_body("boom")
            .expect(1)
            .create_async()
            .await;

        let result = IssuesFetcher::new(&github, "o", "r")
            .fetch(&FilterCriteria::all())
            .await;

        m.assert_async().await;
        assert_eq!(result.unwrap_err().status(), Some(500));

        Ok(())
    }
}
