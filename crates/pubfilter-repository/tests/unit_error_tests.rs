//! Unit tests for RepositoryError types and error handling

use pubfilter_core::ConditionError;
use pubfilter_repository::{ConfigError, RepositoryError};

#[test]
fn test_error_not_found_display() {
    let error = RepositoryError::NotFound {
        id: "c1".to_string(),
    };

    assert_eq!(error.to_string(), "Filter condition not found: c1");
}

#[test]
fn test_error_duplicate_name_display() {
    let error = RepositoryError::DuplicateName {
        name: "Sport".to_string(),
    };

    assert_eq!(error.to_string(), "Filter condition name already in use: Sport");
}

#[test]
fn test_error_missing_name_display() {
    assert_eq!(
        RepositoryError::MissingName.to_string(),
        "Filter condition name is required"
    );
}

#[test]
fn test_error_validation_is_transparent() {
    let error: RepositoryError = ConditionError::DuplicateCondition {
        existing: "nz".to_string(),
    }
    .into();

    assert_eq!(error.to_string(), "Filter condition:nz has identical settings");
    assert!(matches!(error, RepositoryError::Validation(_)));
}

#[test]
fn test_error_config_conversion() {
    let error: RepositoryError = ConfigError::DuplicateField {
        field: "genre".to_string(),
    }
    .into();

    assert_eq!(
        error.to_string(),
        "Configuration error: Catalogue lists genre more than once"
    );
}

#[test]
fn test_error_io_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let repo_error: RepositoryError = io_error.into();

    assert!(repo_error.to_string().contains("I/O error"));
}

#[test]
fn test_error_yaml_conversion() {
    let yaml_error = serde_yaml::from_str::<Vec<String>>("{ not: a list").unwrap_err();
    let repo_error: RepositoryError = yaml_error.into();

    assert!(repo_error.to_string().starts_with("Failed to parse YAML"));
}

#[test]
fn test_error_other_display() {
    let error = RepositoryError::Other("unknown error".to_string());

    assert_eq!(error.to_string(), "Repository error: unknown error");
}
