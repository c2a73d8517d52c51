//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type, so
//! dispatch is resolved at compile time.

use serde::Serialize;
use stringlens_config::Config;
use stringlens_core::StringService;
use stringlens_storage::DatabaseStringRepo;
use tracing::info;

mod info;
mod init;
mod list;
mod query;
mod strings;
mod version;

pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use list::{ListInput, ListStrategy};
pub use query::{ParseStrategy, QueryInput, QueryStrategy};
pub use strings::{AddStrategy, DeleteStrategy, GetStrategy, ValueInput};
pub use version::VersionStrategy;

/// Open the configured database and wrap it in a service.
async fn open_service(config: &Config) -> anyhow::Result<StringService<DatabaseStringRepo>> {
    info!("Connecting to database");
    let repo = DatabaseStringRepo::connect(&config.database.url).await?;
    Ok(StringService::new(repo).with_max_value_length(config.analysis.max_value_length))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails. Service failures keep
    /// their [`stringlens_core::StringError`] so the caller can classify them.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
