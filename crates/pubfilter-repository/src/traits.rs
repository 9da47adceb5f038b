//! Storage seams of the condition engine
//!
//! - [`ConditionRepository`]: persistence of filter condition records
//! - [`VocabularyProvider`]: controlled vocabularies backing field values
//! - [`CatalogueProvider`]: source of the field catalogue snapshot used
//!   by validation
//!
//! All implementations must be `Send + Sync` for use across async tasks.

use async_trait::async_trait;
use pubfilter_core::{Condition, ConditionField, ConditionOperator, FieldCatalogue};

use crate::RepositoryResult;

/// Persistence of filter condition records
///
/// Implementations store records as given; validation is the caller's job
/// (see [`ConditionService`](crate::ConditionService)). Nothing here enforces
/// uniqueness, so check-then-insert is only atomic within one service.
#[async_trait]
pub trait ConditionRepository: Send + Sync {
    /// Load one condition by id
    async fn get(&self, id: &str) -> RepositoryResult<Option<Condition>>;

    /// All stored conditions, in insertion order
    async fn list(&self) -> RepositoryResult<Vec<Condition>>;

    /// Stored conditions on the same field with the same operator
    ///
    /// These are the only candidates for a duplicate.
    async fn find_by_field_operator(
        &self,
        field: ConditionField,
        operator: ConditionOperator,
    ) -> RepositoryResult<Vec<Condition>> {
        let all = self.list().await?;
        Ok(all
            .into_iter()
            .filter(|c| c.field == field && c.operator == operator)
            .collect())
    }

    /// Case-insensitive lookup by name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Condition>> {
        let needle = name.to_lowercase();
        let all = self.list().await?;
        Ok(all.into_iter().find(|c| c.name.to_lowercase() == needle))
    }

    /// Store a new record, assigning an id when it has none
    async fn insert(&self, condition: Condition) -> RepositoryResult<Condition>;

    /// Overwrite the record with the same id
    async fn replace(&self, condition: &Condition) -> RepositoryResult<()>;

    /// Remove a record
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}

/// Controlled vocabularies (categories, genres, urgencies, ...)
#[async_trait]
pub trait VocabularyProvider: Send + Sync {
    /// Items of a vocabulary, or `None` if it does not exist
    async fn items(&self, vocabulary_id: &str) -> RepositoryResult<Option<Vec<serde_json::Value>>>;
}

/// Source of the field catalogue
#[async_trait]
pub trait CatalogueProvider: Send + Sync {
    async fn catalogue(&self) -> RepositoryResult<FieldCatalogue>;
}

#[async_trait]
impl CatalogueProvider for FieldCatalogue {
    async fn catalogue(&self) -> RepositoryResult<FieldCatalogue> {
        Ok(self.clone())
    }
}
