//! Field parameters listing
//!
//! Combines the configured catalogue with the current vocabulary items, so
//! clients can offer the legal values for vocabulary-backed fields.

use crate::config::EngineConfig;
use crate::error::RepositoryResult;
use crate::traits::{CatalogueProvider, VocabularyProvider};
use async_trait::async_trait;
use pubfilter_core::FieldCatalogue;
use std::sync::Arc;
use tracing::warn;

pub struct ParametersService {
    config: EngineConfig,
    vocabularies: Arc<dyn VocabularyProvider>,
}

impl ParametersService {
    pub fn new(config: EngineConfig, vocabularies: Arc<dyn VocabularyProvider>) -> Self {
        Self { config, vocabularies }
    }

    /// Catalogue entries in listing order, with vocabulary values filled in
    ///
    /// A missing vocabulary leaves the entry's `values` unset.
    pub async fn list_fields(&self) -> RepositoryResult<FieldCatalogue> {
        let mut entries = self.config.catalogue().entries().to_vec();

        for entry in &mut entries {
            let Some(vocabulary_id) = self.config.vocabulary_id(entry.field) else {
                continue;
            };

            match self.vocabularies.items(vocabulary_id).await? {
                Some(items) => entry.values = Some(items),
                None => warn!(
                    "Vocabulary {} for field {} not found",
                    vocabulary_id, entry.field
                ),
            }
        }

        Ok(FieldCatalogue::new(entries))
    }
}

#[async_trait]
impl CatalogueProvider for ParametersService {
    async fn catalogue(&self) -> RepositoryResult<FieldCatalogue> {
        self.list_fields().await
    }
}
