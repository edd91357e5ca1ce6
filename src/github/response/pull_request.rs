use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Open,
    Closed,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Open => "open",
            State::Closed => "closed",
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MilestoneRef {
    pub number: u64,
    pub title: String,
}

/// A pull request as listed by either `/pulls` or `/issues`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: State,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub assignees: Vec<User>,
    #[serde(default)]
    pub milestone: Option<MilestoneRef>,
    #[serde(default)]
    pub html_url: String,
}

impl PullRequest {
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.name == label)
    }

    pub fn milestone_number(&self) -> Option<u64> {
        self.milestone.as_ref().map(|m| m.number)
    }

    pub fn assignee_logins(&self) -> impl Iterator<Item = &str> {
        self.assignees.iter().map(|a| a.login.as_str())
    }
}

/// Marker object GitHub attaches to issue items that are pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestMarker {
    #[serde(default)]
    pub url: Option<String>,
}

/// Item of the `/issues` listing, which mixes issues and pull requests.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueItem {
    #[serde(flatten)]
    pub fields: PullRequest,
    #[serde(default)]
    pub pull_request: Option<PullRequestMarker>,
}

impl IssueItem {
    pub fn into_pull_request(self) -> Option<PullRequest> {
        self.pull_request.map(|_| self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_deserialize_a_pull_request_from_the_pulls_listing() {
        let value = json!({
            "number": 104,
            "title": "Release 1.20.0",
            "state": "open",
            "html_url": "https://github.com/o/r/pull/104",
            "labels": [{"id": 1, "name": "release"}],
            "assignees": [{"login": "alice"}],
            "milestone": {"number": 5, "title": "1.20.0", "state": "open"},
            "body": null
        });

        let pr: PullRequest = serde_json::from_value(value).unwrap();

        assert_eq!(pr.number, 104);
        assert_eq!(pr.state, State::Open);
        assert!(pr.has_label("release"));
        assert!(!pr.has_label("bug"));
        assert_eq!(pr.milestone_number(), Some(5));
        assert_eq!(pr.assignee_logins().collect::<Vec<_>>(), vec!["alice"]);
    }

    #[test]
    fn should_keep_only_issue_items_with_a_pull_request_marker() {
        let pr = json!({
            "number": 1,
            "title": "Add dark mode",
            "state": "closed",
            "labels": [],
            "assignees": [],
            "milestone": null,
            "pull_request": {"url": "https://api.github.com/repos/o/r/pulls/1"}
        });
        let issue = json!({
            "number": 2,
            "title": "Crash on startup",
            "state": "open",
            "labels": [],
            "assignees": []
        });

        let pr: IssueItem = serde_json::from_value(pr).unwrap();
        let issue: IssueItem = serde_json::from_value(issue).unwrap();

        assert_eq!(pr.into_pull_request().map(|p| p.number), Some(1));
        assert!(issue.into_pull_request().is_none());
    }
}
