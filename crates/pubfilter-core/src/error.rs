//! Error types for pubfilter core

use thiserror::Error;

/// Validation and parsing errors for filter conditions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    /// The condition's field has no entry in the field catalogue
    #[error("Filter condition:{name} has unidentified field: {field}")]
    UnknownField { name: String, field: String },

    /// The operator is not allowed for the condition's field
    #[error("Filter condition:{name} has unidentified operator: {operator}")]
    UnsupportedOperator { name: String, operator: String },

    /// Another condition already has the same field, operator and value set
    #[error("Filter condition:{existing} has identical settings")]
    DuplicateCondition { existing: String },

    /// Raw field name is not one of the known article fields
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Raw operator name is not one of the known operators
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
}

pub type Result<T> = std::result::Result<T, ConditionError>;
