use super::Error;
use crate::github::{handler::repository_handler::RepositoryHandler, Milestone};
use anyhow::{Context, Result};

/// More open milestones than this and the target cannot be told apart.
pub const MAX_OPEN_MILESTONES: usize = 2;

/// Picks the first milestone whose title is not `sentinel`.
pub fn select_milestone<'a>(milestones: &'a [Milestone], sentinel: &str) -> Result<&'a Milestone, Error> {
    if milestones.len() > MAX_OPEN_MILESTONES {
        log::error!(
            "More than {} milestones found, unable to determine the milestone required.",
            MAX_OPEN_MILESTONES
        );
        return Err(Error::AmbiguousMilestone {
            count: milestones.len(),
        });
    }

    milestones
        .iter()
        .find(|ms| ms.title != sentinel)
        .ok_or(Error::NoSuitableMilestone)
}

pub async fn resolve_target_milestone(repo: &RepositoryHandler<'_>, sentinel: &str) -> Result<u64> {
    let milestones = repo
        .milestones()
        .list_open()
        .await
        .context("Error fetching milestones")?;

    let milestone = select_milestone(&milestones, sentinel).map_err(|err| {
        if matches!(err, Error::NoSuitableMilestone) {
            log::error!(
                "No suitable milestone found in repository '{}/{}'.",
                repo.owner(),
                repo.name()
            );
        }
        err
    })?;

    log::info!("Gathering PRs with milestone {}...", milestone.title);

    Ok(milestone.number)
}
