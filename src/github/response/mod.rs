mod milestone;
mod pull_request;

pub use milestone::Milestone;
pub use pull_request::{IssueItem, Label, MilestoneRef, PullRequest, PullRequestMarker, State, User};
