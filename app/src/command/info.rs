use stringlens_config::Config;
use stringlens_core::QueryParser;
use tracing::info;

use super::open_service;

/// Strategy for displaying configuration information.
///
/// Outputs the database URL (password masked) and connection status,
/// analysis limits, logging level and the natural-language rules in
/// evaluation order.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        println!("=== stringlens Configuration ===\n");

        println!("Database:");
        println!("  URL: {}", mask_database_url(&config.database.url));

        info!("Testing database connection");
        match open_service(&config).await {
            Ok(service) => {
                println!("  Status: Connected");
                match service.store().list_all(None).await {
                    Ok(records) => println!("  Stored Strings: {}", records.len()),
                    Err(e) => println!("  Stored Strings: unavailable ({e})"),
                }
            }
            Err(e) => {
                println!("  Status: Connection failed");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Analysis:");
        println!("  Max Value Length: {}", config.analysis.max_value_length);
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        println!();

        println!("Query Rules:");
        for name in QueryParser::with_defaults().rule_names() {
            println!("  - {name}");
        }

        Ok(())
    }
}

fn mask_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    let Some((credentials, after_at)) = rest.split_once('@') else {
        return url.to_string();
    };

    let Some((username, _password)) = credentials.split_once(':') else {
        return url.to_string();
    };

    format!("{scheme}://{username}:***@{after_at}")
}
