use sea_orm::Set;
use stringlens_core::AnalyzedRecord;
use stringlens_entities::analyzed_strings;
use tracing::warn;

fn to_column(n: usize) -> anyhow::Result<i64> {
    Ok(i64::try_from(n)?)
}

/// Rebuild a record from its row.
///
/// Properties are re-derived from the stored value, so a row whose derived
/// columns drifted still yields a consistent record.
pub fn record_from_model(m: analyzed_strings::Model) -> AnalyzedRecord {
    let record = AnalyzedRecord::new(m.value, m.created_at);
    if record.id() != m.id {
        warn!("Row {} does not match the hash of its value", m.id);
    }
    record
}

pub fn active_model_from_record(
    record: &AnalyzedRecord,
) -> anyhow::Result<analyzed_strings::ActiveModel> {
    let props = record.properties();

    Ok(analyzed_strings::ActiveModel {
        id: Set(record.id().to_string()),
        value: Set(record.value().to_string()),
        length: Set(to_column(props.length)?),
        is_palindrome: Set(props.is_palindrome),
        unique_characters: Set(to_column(props.unique_characters)?),
        word_count: Set(to_column(props.word_count)?),
        character_frequency_map: Set(serde_json::to_value(&props.character_frequency_map)?),
        created_at: Set(record.created_at()),
    })
}
