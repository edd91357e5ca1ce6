use anyhow::Result;
use simple_logger::SimpleLogger;

/// `RUST_LOG` takes precedence over the configured level.
pub fn init(level: log::LevelFilter) -> Result<()> {
    SimpleLogger::new().with_level(level).env().init()?;

    Ok(())
}
