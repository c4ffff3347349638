use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Model(ModelError::Validation(_)))
    }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }

    /// Bare validation message, without the error-kind prefixes, for showing to users.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            Self::Model(ModelError::Validation(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }
}
