use crate::auth::AuthMode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no {0} given")]
    MissingField(&'static str),
    #[error("{field} has invalid value '{value}', expected one of: {allowed}")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        allowed: String,
    },
    #[error("auth mode {mode} requires {field}, but it was not given")]
    MissingAuthField {
        mode: AuthMode,
        field: &'static str,
    },
    #[error("bootstrapServers entry {index} is empty")]
    EmptyBootstrapServer { index: usize },
}

impl ValidationError {
    /// Config key the error is about.
    pub fn field(&self) -> &'static str {
        match *self {
            ValidationError::MissingField(field) => field,
            ValidationError::InvalidEnumValue { field, .. } => field,
            ValidationError::MissingAuthField { field, .. } => field,
            ValidationError::EmptyBootstrapServer { .. } => "bootstrapServers",
        }
    }
}
