//! Engine configuration
//!
//! Loaded from YAML. Everything is optional; an empty document yields the
//! built-in catalogue and the stock vocabulary mapping.
//!
//! ```yaml
//! catalogue:
//!   - field: headline
//!     operators: [like, notlike]
//!   - field: genre
//!     operators: [in, nin]
//!     value_field: value
//! vocabularies:
//!   genre: genre
//! ```

use crate::error::RepositoryResult;
use pubfilter_core::{ConditionField, FieldCatalogue, FieldParameter};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

/// Configuration of the condition engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Replaces the built-in field catalogue when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalogue: Option<Vec<FieldParameter>>,

    /// Field -> vocabulary id used to fill the field's legal values
    #[serde(default = "default_vocabularies")]
    pub vocabularies: HashMap<ConditionField, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalogue: None,
            vocabularies: default_vocabularies(),
        }
    }
}

fn default_vocabularies() -> HashMap<ConditionField, String> {
    [
        (ConditionField::AnpaCategory, "categories"),
        (ConditionField::Genre, "genre"),
        (ConditionField::Urgency, "newsvalue"),
        (ConditionField::Priority, "priority"),
        (ConditionField::Type, "type"),
        (ConditionField::Subject, "subjectcodes"),
    ]
    .into_iter()
    .map(|(field, id)| (field, id.to_string()))
    .collect()
}

impl EngineConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> RepositoryResult<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!("Loaded engine config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(entries) = &self.catalogue else {
            return Ok(());
        };

        let mut seen = HashSet::new();
        for entry in entries {
            if entry.operators.is_empty() {
                return Err(ConfigError::EmptyOperators {
                    field: entry.field.to_string(),
                });
            }
            if !seen.insert(entry.field) {
                return Err(ConfigError::DuplicateField {
                    field: entry.field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Configured catalogue, or the built-in one
    pub fn catalogue(&self) -> FieldCatalogue {
        match &self.catalogue {
            Some(entries) => FieldCatalogue::new(entries.clone()),
            None => FieldCatalogue::builtin(),
        }
    }

    pub fn vocabulary_id(&self, field: ConditionField) -> Option<&str> {
        self.vocabularies.get(&field).map(String::as_str)
    }
}

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Catalogue entry for {field} has no operators")]
    EmptyOperators { field: String },

    #[error("Catalogue lists {field} more than once")]
    DuplicateField { field: String },
}
