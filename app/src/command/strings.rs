//! Single-record commands: add, get and delete by value.

use stringlens_config::Config;
use tracing::info;

use super::{open_service, print_json};

/// Input for commands that address one string by value.
#[derive(Debug, Clone)]
pub struct ValueInput {
    pub config: Config,
    pub value: String,
}

/// Analyze and store a new string.
#[derive(Debug, Clone, Copy)]
pub struct AddStrategy;

impl super::CommandStrategy for AddStrategy {
    type Input = ValueInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let service = open_service(&input.config).await?;
        let record = service.create(&input.value).await?;
        print_json(&record)
    }
}

/// Look a string up by value.
#[derive(Debug, Clone, Copy)]
pub struct GetStrategy;

impl super::CommandStrategy for GetStrategy {
    type Input = ValueInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let service = open_service(&input.config).await?;
        let record = service.retrieve(&input.value).await?;
        print_json(&record)
    }
}

/// Remove a string by value. Prints nothing on success.
#[derive(Debug, Clone, Copy)]
pub struct DeleteStrategy;

impl super::CommandStrategy for DeleteStrategy {
    type Input = ValueInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let service = open_service(&input.config).await?;
        service.delete(&input.value).await?;
        info!("Deleted {:?}", input.value);
        Ok(())
    }
}
