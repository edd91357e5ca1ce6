use crate::{github::FetchStrategy, http::client::DEFAULT_TIMEOUT, notes::Error};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, path::Path, time::Duration};

const DEFAULT_CONFIG_FILE_NAME: &str = "release-pr-writer.yaml";
const CONFIG_PATH_ENV: &str = "RELEASE_PR_WRITER_CONFIG";
pub(crate) const TOKEN_ENV: &str = "GITHUB_TOKEN";

const DEFAULT_OWNER: &str = "flow-launcher";
const DEFAULT_REPO: &str = "flow.launcher";
const DEFAULT_API_URL: &str = "https://api.github.com";

pub const RELEASE_LABEL: &str = "release";
pub const FEATURE_LABEL: &str = "enhancement";
pub const BUG_FIX_LABEL: &str = "bug";
/// Maintainer left out of the author list.
pub const EXCLUDED_ASSIGNEE: &str = "jjw24";
/// Milestone title that never designates the upcoming release.
pub const FUTURE_MILESTONE: &str = "Future";

/// Where the release milestone comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneSource {
    /// Read it from the open pull request labelled as the release.
    #[default]
    ReleasePr,
    /// Pick the first open milestone that is not the "Future" bucket.
    OpenMilestones,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_owner")]
    pub owner: String,
    #[serde(default = "Config::default_repo")]
    pub repo: String,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub fetch_strategy: FetchStrategy,
    #[serde(default)]
    pub milestone_source: MilestoneSource,
    #[serde(default)]
    pub labels: LabelsConfig,
    #[serde(default = "Config::default_excluded_assignee")]
    pub excluded_assignee: String,
    #[serde(default = "Config::default_future_milestone")]
    pub future_milestone: String,
    #[serde(default = "Config::default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default = "Config::default_log_level")]
    pub log_level: log::LevelFilter,
}

impl Config {
    /// Loads the config file named by `RELEASE_PR_WRITER_CONFIG`, or
    /// `release-pr-writer.yaml`. A missing default file means all defaults.
    pub async fn load() -> Result<Config> {
        match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Config::load_from(path).await,
            Err(_) if !Path::new(DEFAULT_CONFIG_FILE_NAME).exists() => Ok(Config::default()),
            Err(_) => Config::load_from(DEFAULT_CONFIG_FILE_NAME).await,
        }
    }

    pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read config file {}", path.display()))?;

        let config = serde_yaml::from_str::<Config>(&config_string)?;

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn default_owner() -> String {
        DEFAULT_OWNER.to_owned()
    }

    fn default_repo() -> String {
        DEFAULT_REPO.to_owned()
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }

    fn default_excluded_assignee() -> String {
        EXCLUDED_ASSIGNEE.to_owned()
    }

    fn default_future_milestone() -> String {
        FUTURE_MILESTONE.to_owned()
    }

    fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT.as_secs()
    }

    fn default_log_level() -> log::LevelFilter {
        log::LevelFilter::Info
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            owner: Config::default_owner(),
            repo: Config::default_repo(),
            api_url: Config::default_api_url(),
            fetch_strategy: FetchStrategy::default(),
            milestone_source: MilestoneSource::default(),
            labels: LabelsConfig::default(),
            excluded_assignee: Config::default_excluded_assignee(),
            future_milestone: Config::default_future_milestone(),
            timeout_secs: Config::default_timeout_secs(),
            dry_run: false,
            log_level: Config::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelsConfig {
    #[serde(default = "LabelsConfig::default_release")]
    pub release: String,
    #[serde(default = "LabelsConfig::default_feature")]
    pub feature: String,
    #[serde(default = "LabelsConfig::default_bug_fix")]
    pub bug_fix: String,
}

impl LabelsConfig {
    fn default_release() -> String {
        RELEASE_LABEL.to_owned()
    }

    fn default_feature() -> String {
        FEATURE_LABEL.to_owned()
    }

    fn default_bug_fix() -> String {
        BUG_FIX_LABEL.to_owned()
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        LabelsConfig {
            release: LabelsConfig::default_release(),
            feature: LabelsConfig::default_feature(),
            bug_fix: LabelsConfig::default_bug_fix(),
        }
    }
}

/// A missing or blank token is an error.
pub(crate) fn token_from(value: Option<String>) -> Result<String, Error> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(Error::MissingToken {
            variable: TOKEN_ENV,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn should_default_every_key() {
        let config: Config = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config.owner, "flow-launcher");
        assert_eq!(config.repo, "flow.launcher");
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.fetch_strategy, FetchStrategy::Issues);
        assert_eq!(config.milestone_source, MilestoneSource::ReleasePr);
        assert_eq!(config.labels.release, "release");
        assert_eq!(config.labels.feature, "enhancement");
        assert_eq!(config.labels.bug_fix, "bug");
        assert_eq!(config.excluded_assignee, "jjw24");
        assert_eq!(config.future_milestone, "Future");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.dry_run);
        assert_eq!(config.log_level, log::LevelFilter::Info);
    }

    #[tokio::test]
    async fn should_load_overrides_from_a_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("config")?;
        let path = dir.path().join("release-pr-writer.yaml");
        fs::write(
            &path,
            r#"
owner: octo
repo: widgets
fetch_strategy: pulls
milestone_source: open_milestones
labels:
  feature: feature
excluded_assignee: bot
dry_run: true
log_level: debug
"#,
        )?;

        let config = Config::load_from(&path).await?;

        assert_eq!(config.owner, "octo");
        assert_eq!(config.repo, "widgets");
        assert_eq!(config.fetch_strategy, FetchStrategy::Pulls);
        assert_eq!(config.milestone_source, MilestoneSource::OpenMilestones);
        assert_eq!(config.labels.feature, "feature");
        assert_eq!(config.labels.bug_fix, "bug");
        assert_eq!(config.excluded_assignee, "bot");
        assert!(config.dry_run);
        assert_eq!(config.log_level, log::LevelFilter::Debug);

        dir.close()?;

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_a_missing_explicit_file() {
        let result = Config::load_from("/nonexistent/release-pr-writer.yaml").await;

        assert!(result.is_err());
    }

    #[test]
    fn should_reject_a_missing_or_blank_token() {
        assert!(matches!(token_from(None), Err(Error::MissingToken { .. })));
        assert!(matches!(
            token_from(Some("  ".to_owned())),
            Err(Error::MissingToken { .. })
        ));
        assert_eq!(token_from(Some("abc".to_owned())).unwrap(), "abc");
    }
}
