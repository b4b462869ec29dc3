use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Error from database: {0}")]
    Database(String),
    #[error("Your request is incorrect: {0}")]
    InvalidRequest(String),
    #[error("A env was not found: {0}")]
    EnvNotFound(String),
}

#[cfg(feature = "ssr")]
impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        Error::Database(format!("sqlx error: {:?}", e))
    }
}

#[cfg(feature = "ssr")]
impl From<std::env::VarError> for Error {
    fn from(value: std::env::VarError) -> Self {
        Error::EnvNotFound(value.to_string())
    }
}
