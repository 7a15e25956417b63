use thiserror::Error;

/// Infrastructure-level store failure.
///
/// Domain outcomes (product missing, insufficient stock) are not errors at
/// this layer; they surface as `Option` results on the trait. Everything
/// here maps to a 500 at the HTTP boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
