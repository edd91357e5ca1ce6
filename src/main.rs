use anyhow::{Context, Result};
use release_pr_writer::{config::Config, logger, notes};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load().await.context("Cannot load config file")?;
    logger::init(config.log_level)?;

    let github = notes::connect(&config)?;

    log::info!("Starting");
    notes::run(&github, &config)
        .await
        .context("Cannot write the release notes")?;

    Ok(())
}
