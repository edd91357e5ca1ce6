pub mod builder;
pub mod criteria;
pub mod fetcher;
pub mod github_client;
pub mod handler;
pub mod request;
pub mod response;

pub use builder::BuilderExecutor;
pub use criteria::{FilterCriteria, StateFilter};
pub use fetcher::{FetchStrategy, PullRequestFetcher};
pub use github_client::GithubClient;
pub use response::{Milestone, PullRequest, State};
