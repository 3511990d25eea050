use thiserror::Error;

/// Result type for network analysis operations
pub type Result<T> = std::result::Result<T, PpiError>;

/// Errors that can occur while retrieving or analyzing interaction data
#[derive(Error, Debug)]
pub enum PpiError {
    #[error("interaction database request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("no interactions found for protein {protein} in {database}")]
    NoInteractions { protein: String, database: String },

    #[error("{database} response does not contain the expected symbol columns")]
    SchemaMismatch { database: String },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PpiError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn schema_mismatch(database: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            database: database.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
