pub mod update_pull_request_builder;

use anyhow::Result;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output>;
}
