use super::response::State;
use serde::Deserialize;
use std::fmt::Display;

/// State filter accepted by the listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateFilter {
    Open,
    Closed,
    #[default]
    All,
}

impl StateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateFilter::Open => "open",
            StateFilter::Closed => "closed",
            StateFilter::All => "all",
        }
    }

    pub fn matches(&self, state: State) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Open => state == State::Open,
            StateFilter::Closed => state == State::Closed,
        }
    }
}

impl Display for StateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label, state and milestone predicates applied to pull requests.
///
/// An empty label means "any label"; a missing milestone means "any
/// milestone, or none".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub label: String,
    pub state: StateFilter,
    pub milestone: Option<u64>,
}

impl FilterCriteria {
    pub fn new(label: impl Into<String>, state: StateFilter) -> Self {
        FilterCriteria {
            label: label.into(),
            state,
            milestone: None,
        }
    }

    pub fn all() -> Self {
        FilterCriteria::default()
    }

    pub fn milestone(mut self, milestone: Option<u64>) -> Self {
        self.milestone = milestone;
        self
    }

    pub fn label_filter(&self) -> Option<&str> {
        if self.label.is_empty() {
            None
        } else {
            Some(&self.label)
        }
    }
}
