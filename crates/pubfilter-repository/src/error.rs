//! Error types for the repository layer

use crate::config::ConfigError;
use pubfilter_core::ConditionError;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Condition rejected by validation
    #[error(transparent)]
    Validation(#[from] ConditionError),

    /// No stored condition with this id
    #[error("Filter condition not found: {id}")]
    NotFound { id: String },

    /// A stored record already uses this id
    #[error("Filter condition id already exists: {id}")]
    AlreadyExists { id: String },

    /// Condition name is empty
    #[error("Filter condition name is required")]
    MissingName,

    /// Another condition already uses this name (case-insensitive)
    #[error("Filter condition name already in use: {name}")]
    DuplicateName { name: String },

    /// Invalid engine configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}
