use std::fmt;

use crate::entity::DataType;

/// Errors that can occur while resolving a filter request
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    EntityNotFound(String),
    FieldNotFound { entity: String, field: String },
    UnknownOperator { field: String, operator: String },
    TypeMismatch { field: String, expected: DataType, found: String },
    InvalidValue { field: String, message: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::EntityNotFound(name) => write!(f, "Entity '{}' not found", name),
            ResolveError::FieldNotFound { entity, field } => {
                write!(f, "Field '{}' not found on entity '{}'", field, entity)
            }
            ResolveError::UnknownOperator { field, operator } => {
                write!(f, "Unknown operator '{}' for field '{}'", operator, field)
            }
            ResolveError::TypeMismatch { field, expected, found } => {
                write!(f, "Field '{}' expects {} but got {}", field, expected, found)
            }
            ResolveError::InvalidValue { field, message } => {
                write!(f, "Invalid value for field '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
