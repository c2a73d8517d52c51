#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use stringlens_config::Config;
use stringlens_core::{StatusCategory, StringError};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    AddStrategy, CommandStrategy, DeleteStrategy, GetStrategy, InfoStrategy, InitStrategy,
    ListInput, ListStrategy, ParseStrategy, QueryInput, QueryStrategy, ValueInput,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "stringlens")]
#[command(about = "Analyze, store and query strings", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/stringlens/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze and store a string
    Add { value: String },
    /// Show a stored string and its properties
    Get { value: String },
    /// Delete a stored string
    Delete { value: String },
    /// List stored strings, optionally filtered
    List {
        #[arg(long)]
        is_palindrome: Option<String>,
        #[arg(long)]
        min_length: Option<String>,
        #[arg(long)]
        max_length: Option<String>,
        #[arg(long)]
        word_count: Option<String>,
        #[arg(long)]
        contains_character: Option<String>,
    },
    /// List stored strings matching a natural-language query
    Query { text: String },
    /// Show how a natural-language query is interpreted
    Parse { text: String },
    /// Show configuration and database status
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    path.map_or_else(Config::load, |p| Config::load_from(p))
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.command {
        Commands::Init | Commands::Version | Commands::Parse { .. } => None,
        _ => Some(load_config(cli.config.as_ref())?),
    };
    init_tracing(config.as_ref().map_or("info", |c| c.logging.level.as_str()))?;
    let config = config.unwrap_or_default();

    match cli.command {
        Commands::Add { value } => AddStrategy.execute(ValueInput { config, value }).await,
        Commands::Get { value } => GetStrategy.execute(ValueInput { config, value }).await,
        Commands::Delete { value } => DeleteStrategy.execute(ValueInput { config, value }).await,
        Commands::List {
            is_palindrome,
            min_length,
            max_length,
            word_count,
            contains_character,
        } => {
            ListStrategy
                .execute(ListInput {
                    config,
                    is_palindrome,
                    min_length,
                    max_length,
                    word_count,
                    contains_character,
                })
                .await
        }
        Commands::Query { text } => QueryStrategy.execute(QueryInput { config, text }).await,
        Commands::Parse { text } => ParseStrategy.execute(text).await,
        Commands::Info => InfoStrategy.execute(config).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let category = err
                .downcast_ref::<StringError>()
                .map_or(StatusCategory::Internal, StringError::category);
            eprintln!("error[{category}]: {err:#}");
            ExitCode::from(category.exit_code())
        }
    }
}
