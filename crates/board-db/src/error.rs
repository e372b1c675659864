use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("discussion {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
