/// Database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Timestamps are UTC throughout.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
