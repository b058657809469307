//! Domain error types for the Reference Data module.

use reference_data_sdk::{EntityKind, ReferenceDataError};
use thiserror::Error;

/// A single seed validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Table the offending row belongs to.
    pub table: &'static str,
    /// Key of the offending row.
    pub key: String,
    pub message: String,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(table: &'static str, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            table,
            key: key.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.table, self.key, self.message)
    }
}

/// Domain-level errors for the Reference Data module.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{entity} '{code}' not found")]
    NotFound { entity: EntityKind, code: String },

    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Seed bundle rejected with {} issues", .0.len())]
    InvalidSeed(Vec<ValidationIssue>),

    #[error("Cycle in {entity} hierarchy at '{code}'")]
    HierarchyCycle { entity: EntityKind, code: String },

    #[error("{entity} hierarchy deeper than {max} levels at '{code}'")]
    HierarchyTooDeep {
        entity: EntityKind,
        code: String,
        max: u8,
    },

    #[error("Alias chain for timezone '{id}' does not terminate within {max} hops")]
    AliasChainTooLong { id: String, max: u8 },

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    #[must_use]
    pub fn not_found(entity: EntityKind, code: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            code: code.into(),
        }
    }

    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }

    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Returns the collected findings if this is an `InvalidSeed` error.
    #[must_use]
    pub fn validation_issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            Self::InvalidSeed(issues) => Some(issues),
            _ => None,
        }
    }
}

impl From<DomainError> for ReferenceDataError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { entity, code } => {
                ReferenceDataError::not_found(format!("{entity} '{code}'"))
            }
            DomainError::Validation { field, message } => {
                ReferenceDataError::validation(format!("{field}: {message}"))
            }
            DomainError::InvalidSeed(issues) => {
                let details: Vec<String> = issues.iter().map(ToString::to_string).collect();
                ReferenceDataError::validation(format!(
                    "seed bundle rejected with {} issues: {}",
                    issues.len(),
                    details.join("; ")
                ))
            }
            e @ (DomainError::HierarchyCycle { .. }
            | DomainError::HierarchyTooDeep { .. }
            | DomainError::AliasChainTooLong { .. }) => {
                ReferenceDataError::validation(e.to_string())
            }
            DomainError::Constraint(msg) => ReferenceDataError::conflict(msg),
            DomainError::Database(msg) => ReferenceDataError::internal(msg),
        }
    }
}
