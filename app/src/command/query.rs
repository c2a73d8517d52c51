//! Natural-language commands.

use stringlens_config::Config;
use stringlens_core::{InterpretedQuery, QueryParser};

use super::{open_service, print_json};

#[derive(Debug, Clone)]
pub struct QueryInput {
    pub config: Config,
    pub text: String,
}

/// List stored strings matching a natural-language query.
#[derive(Debug, Clone, Copy)]
pub struct QueryStrategy;

impl super::CommandStrategy for QueryStrategy {
    type Input = QueryInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let service = open_service(&input.config).await?;
        let response = service.filter_by_natural_language(&input.text).await?;
        print_json(&response)
    }
}

/// Show how a query would be interpreted, without touching the database.
#[derive(Debug, Clone, Copy)]
pub struct ParseStrategy;

impl super::CommandStrategy for ParseStrategy {
    type Input = String;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let parsed_filters = QueryParser::with_defaults().interpret(&input)?;
        print_json(&InterpretedQuery {
            original: input,
            parsed_filters,
        })
    }
}
