mod schema;

pub use schema::{AnalysisConfig, Config, DatabaseConfig, LoggingConfig};
