use crate::github::{FilterCriteria, PullRequest};

/// Keeps, in order, the pull requests matching every predicate of `criteria`.
pub fn filter<'a>(prs: &'a [PullRequest], criteria: &FilterCriteria) -> Vec<&'a PullRequest> {
    let matched: Vec<&PullRequest> = prs.iter().filter(|pr| matches(pr, criteria)).collect();

    log::info!(
        "Found {} PRs with {} label and state as {}{}",
        matched.len(),
        criteria.label_filter().unwrap_or("no filter on"),
        criteria.state,
        criteria
            .milestone
            .map(|m| format!(" in milestone {}", m))
            .unwrap_or_default()
    );

    matched
}

pub fn matches(pr: &PullRequest, criteria: &FilterCriteria) -> bool {
    criteria.state.matches(pr.state)
        && criteria.label_filter().map_or(true, |label| pr.has_label(label))
        && criteria
            .milestone
            .map_or(true, |number| pr.milestone_number() == Some(number))
}
