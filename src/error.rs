use thiserror::Error;

/// Errors surfaced by the project store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
