use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the database: {0}")]
    Connection(sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Duplicate value violates a unique constraint: {0}")]
    UniqueViolation(String),

    #[error("Database query failed: {0}")]
    Query(sqlx::Error),
}

/// Classifies query-time failures. Unique-index conflicts get their own
/// variant so the HTTP layer can answer 409 instead of 500.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return DbError::UniqueViolation(db_err.message().to_string());
            }
        }
        DbError::Query(err)
    }
}
