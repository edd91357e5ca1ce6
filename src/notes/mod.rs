pub mod composer;
pub mod filter;
pub mod milestone;
mod template;

pub use composer::{compose, ReleaseNote};
pub use filter::filter;

use crate::{
    config::{self, Config, MilestoneSource},
    github::{BuilderExecutor, FilterCriteria, GithubClient, PullRequest, StateFilter},
    http::Client,
};
use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{variable} environment variable not set")]
    MissingToken { variable: &'static str },
    #[error("No matching pull requests found")]
    NoPullRequests,
    #[error("Unable to find the exact release PR, found {count}: {numbers:?}")]
    AmbiguousReleasePullRequest { count: usize, numbers: Vec<u64> },
    #[error("Release PR #{number} has no milestone")]
    MissingMilestone { number: u64 },
    #[error("Found {count} open milestones, unable to determine the milestone required")]
    AmbiguousMilestone { count: usize },
    #[error("No suitable milestone found")]
    NoSuitableMilestone,
}

/// Returns the only open pull request carrying `label`.
pub fn find_release_pr<'a>(prs: &'a [PullRequest], label: &str) -> Result<&'a PullRequest, Error> {
    let candidates = filter(prs, &FilterCriteria::new(label, StateFilter::Open));

    match candidates.as_slice() {
        [release_pr] => Ok(*release_pr),
        _ => {
            let numbers: Vec<u64> = candidates.iter().map(|pr| pr.number).collect();
            log::error!("Unable to find the exact release PR. Returned result: {:?}", numbers);
            Err(Error::AmbiguousReleasePullRequest {
                count: numbers.len(),
                numbers,
            })
        }
    }
}

/// Builds the GitHub client from `config` and the `GITHUB_TOKEN` variable.
pub fn connect(config: &Config) -> Result<GithubClient> {
    connect_with_token(config, std::env::var(config::TOKEN_ENV).ok())
}

/// No client exists, and so no request can be sent, until the token is known.
fn connect_with_token(config: &Config, token: Option<String>) -> Result<GithubClient> {
    let token = config::token_from(token)?;
    let http = Client::new(&config.api_url, token, config.timeout())
        .context("Cannot create the http client")?;

    Ok(GithubClient::new(http))
}

/// Fetches, filters and composes the release notes, then writes them to the
/// release pull request unless `dry_run` is set.
pub async fn run(github: &GithubClient, config: &Config) -> Result<ReleaseNote> {
    let repo = github.repo(&config.owner, &config.repo);

    let target_milestone = match config.milestone_source {
        MilestoneSource::OpenMilestones => Some(
            milestone::resolve_target_milestone(&repo, &config.future_milestone).await?,
        ),
        MilestoneSource::ReleasePr => None,
    };

    log::info!("Fetching all PRs for {}/{} ...", config.owner, config.repo);

    let pull_requests = repo
        .pull_requests()
        .list(
            config.fetch_strategy,
            &FilterCriteria::all().milestone(target_milestone),
        )
        .await
        .context("Error fetching pull requests")?;

    if pull_requests.is_empty() {
        return Err(Error::NoPullRequests.into());
    }

    log::info!("Found total of {} pull requests", pull_requests.len());

    let release_pr = find_release_pr(&pull_requests, &config.labels.release)?;

    log::info!("Found release PR: {}", release_pr.title);

    let milestone = match target_milestone {
        Some(number) => number,
        None => release_pr
            .milestone_number()
            .ok_or(Error::MissingMilestone {
                number: release_pr.number,
            })?,
    };

    let enhancements = filter(
        &pull_requests,
        &FilterCriteria::new(&config.labels.feature, StateFilter::Closed).milestone(Some(milestone)),
    );
    let bug_fixes = filter(
        &pull_requests,
        &FilterCriteria::new(&config.labels.bug_fix, StateFilter::Closed).milestone(Some(milestone)),
    );

    let note = compose(&enhancements, &bug_fixes, &config.excluded_assignee)?;

    if config.dry_run {
        log::info!("Dry run, PR #{} left untouched", release_pr.number);
        println!("Generated PR content:\n{}", note.body);
        return Ok(note);
    }

    repo.pull_requests()
        .update(release_pr.number)
        .body(&note.body)
        .execute()
        .await?;

    println!("PR content updated to:\n{}", note.body);

    Ok(note)
}
