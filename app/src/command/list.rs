use stringlens_config::Config;
use stringlens_core::filter::{
    PARAM_CONTAINS_CHARACTER, PARAM_IS_PALINDROME, PARAM_MAX_LENGTH, PARAM_MIN_LENGTH,
    PARAM_WORD_COUNT,
};

use super::{open_service, print_json};

/// Raw structured-filter parameters, validated by the service.
#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub config: Config,
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl ListInput {
    fn params(&self) -> Vec<(&'static str, &str)> {
        [
            (PARAM_IS_PALINDROME, &self.is_palindrome),
            (PARAM_MIN_LENGTH, &self.min_length),
            (PARAM_MAX_LENGTH, &self.max_length),
            (PARAM_WORD_COUNT, &self.word_count),
            (PARAM_CONTAINS_CHARACTER, &self.contains_character),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

/// List stored strings, optionally filtered.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = ListInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let service = open_service(&input.config).await?;
        let response = service.list(input.params()).await?;
        print_json(&response)
    }
}
