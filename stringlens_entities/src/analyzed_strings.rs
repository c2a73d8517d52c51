use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "analyzed_strings")]
pub struct Model {
    /// SHA-256 hex digest of `value`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Unique through `id`; TEXT columns cannot carry a plain unique index on MySQL.
    #[sea_orm(column_type = "Text")]
    pub value: String,
    pub length: i64,
    pub is_palindrome: bool,
    pub unique_characters: i64,
    pub word_count: i64,
    pub character_frequency_map: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
