//! sea-orm backed persistence for analyzed strings.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Schema, SqlErr,
};
use stringlens_core::{AnalyzedRecord, FilterSet, PutOutcome, StringRecordRepo};
use stringlens_entities::analyzed_strings;
use tracing::{debug, info};

use crate::convert;

fn is_table_already_exists_error(err: &DbErr) -> bool {
    err.to_string().contains("table") && err.to_string().contains("already exists")
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Analyzed-string repository over any sea-orm backend.
///
/// Uniqueness of `value` is enforced by the primary key on its content
/// hash, so concurrent writers are serialized by the database.
pub struct DatabaseStringRepo {
    db: DatabaseConnection,
}

impl DatabaseStringRepo {
    /// Connect to `database_url` and create the table if needed.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to database for DatabaseStringRepo");
        let db = Database::connect(database_url).await?;
        Self::new(db).await
    }

    /// Connect with explicit pool options.
    pub async fn connect_with(options: ConnectOptions) -> anyhow::Result<Self> {
        info!("Connecting to database for DatabaseStringRepo");
        let db = Database::connect(options).await?;
        Self::new(db).await
    }

    /// Wrap an open connection, creating the table if needed.
    pub async fn new(db: DatabaseConnection) -> anyhow::Result<Self> {
        let backend = db.get_database_backend();
        let schema = Schema::new(backend);
        let stmt = schema.create_table_from_entity(analyzed_strings::Entity);
        match db
            .execute_unprepared(&backend.build(&stmt).to_string())
            .await
        {
            Ok(_) => {}
            Err(e) if is_table_already_exists_error(&e) => {
                info!("Table already exists, skipping creation");
            }
            Err(e) => return Err(e.into()),
        }

        info!("DatabaseStringRepo initialized");
        Ok(Self { db })
    }
}

#[async_trait]
impl StringRecordRepo for DatabaseStringRepo {
    async fn put(&self, record: &AnalyzedRecord) -> anyhow::Result<PutOutcome> {
        let model = convert::active_model_from_record(record)?;

        match analyzed_strings::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
        {
            Ok(_) => Ok(PutOutcome::Inserted),
            Err(e) if is_unique_violation(&e) => {
                debug!("Unique constraint rejected {}", record.id());
                Ok(PutOutcome::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get(&self, id: &str) -> anyhow::Result<Option<AnalyzedRecord>> {
        let result = analyzed_strings::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?;
        Ok(result.map(convert::record_from_model))
    }

    async fn get_by_unique_value(&self, value: &str) -> anyhow::Result<Option<AnalyzedRecord>> {
        let result = analyzed_strings::Entity::find()
            .filter(analyzed_strings::Column::Value.eq(value))
            .one(&self.db)
            .await?;
        Ok(result.map(convert::record_from_model))
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let result = analyzed_strings::Entity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn query_by_predicate(&self, filters: &FilterSet) -> anyhow::Result<Vec<AnalyzedRecord>> {
        let mut query = analyzed_strings::Entity::find();

        if let Some(expected) = filters.is_palindrome {
            query = query.filter(analyzed_strings::Column::IsPalindrome.eq(expected));
        }
        if let Some(min) = filters.min_length {
            query = query.filter(analyzed_strings::Column::Length.gte(min));
        }
        if let Some(max) = filters.max_length {
            query = query.filter(analyzed_strings::Column::Length.lte(max));
        }
        if let Some(count) = filters.word_count {
            query = query.filter(analyzed_strings::Column::WordCount.eq(count));
        }

        let rows = query
            .order_by_asc(analyzed_strings::Column::CreatedAt)
            .order_by_asc(analyzed_strings::Column::Id)
            .all(&self.db)
            .await?;

        // Character containment lives in the JSON column; evaluate it here.
        Ok(rows
            .into_iter()
            .map(convert::record_from_model)
            .filter(|record| filters.matches(record))
            .collect())
    }
}
