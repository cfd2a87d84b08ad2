use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by the persistence layer.
///
/// There is no recoverable subset here: a store error means the database
/// itself misbehaved, and the request that hit it can only fail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
