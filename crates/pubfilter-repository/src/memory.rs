//! In-memory storage
//!
//! Suitable for tests and embedding; data is lost when the process exits.

use crate::error::{RepositoryError, RepositoryResult};
use crate::traits::{ConditionRepository, VocabularyProvider};
use async_trait::async_trait;
use pubfilter_core::Condition;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory condition store
///
/// Records are kept in insertion order; ids are random UUIDs unless the
/// inserted record already carries one.
pub struct MemoryConditionRepository {
    conditions: RwLock<Vec<Condition>>,
}

impl MemoryConditionRepository {
    pub fn new() -> Self {
        Self {
            conditions: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.conditions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.conditions.read().await.is_empty()
    }
}

impl Default for MemoryConditionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConditionRepository for MemoryConditionRepository {
    async fn get(&self, id: &str) -> RepositoryResult<Option<Condition>> {
        let conditions = self.conditions.read().await;
        Ok(conditions
            .iter()
            .find(|c| c.id.as_deref() == Some(id))
            .cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<Condition>> {
        Ok(self.conditions.read().await.clone())
    }

    async fn insert(&self, mut condition: Condition) -> RepositoryResult<Condition> {
        let mut conditions = self.conditions.write().await;

        let id = match condition.id.take() {
            Some(id) => {
                if conditions.iter().any(|c| c.id.as_deref() == Some(id.as_str())) {
                    return Err(RepositoryError::AlreadyExists { id });
                }
                id
            }
            None => uuid::Uuid::new_v4().to_string(),
        };

        condition.id = Some(id);
        conditions.push(condition.clone());
        Ok(condition)
    }

    async fn replace(&self, condition: &Condition) -> RepositoryResult<()> {
        let id = condition
            .id
            .as_deref()
            .ok_or_else(|| RepositoryError::Other("Cannot replace a condition without id".to_string()))?;

        let mut conditions = self.conditions.write().await;
        let slot = conditions
            .iter_mut()
            .find(|c| c.id.as_deref() == Some(id))
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })?;

        *slot = condition.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let mut conditions = self.conditions.write().await;
        let before = conditions.len();
        conditions.retain(|c| c.id.as_deref() != Some(id));

        if conditions.len() == before {
            return Err(RepositoryError::NotFound { id: id.to_string() });
        }
        Ok(())
    }
}

/// In-memory vocabularies keyed by vocabulary id
#[derive(Default)]
pub struct MemoryVocabularies {
    vocabularies: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryVocabularies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the items of a vocabulary
    pub async fn set(&self, vocabulary_id: impl Into<String>, items: Vec<Value>) {
        self.vocabularies
            .write()
            .await
            .insert(vocabulary_id.into(), items);
    }
}

#[async_trait]
impl VocabularyProvider for MemoryVocabularies {
    async fn items(&self, vocabulary_id: &str) -> RepositoryResult<Option<Vec<Value>>> {
        Ok(self.vocabularies.read().await.get(vocabulary_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubfilter_core::{ConditionField, ConditionOperator};
    use serde_json::json;

    fn headline(name: &str) -> Condition {
        Condition::new(name, ConditionField::Headline, ConditionOperator::Like, "budget")
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let repo = MemoryConditionRepository::new();
        let saved = repo.insert(headline("a")).await.unwrap();

        let id = saved.id.clone().unwrap();
        assert!(!id.is_empty());
        assert_eq!(repo.get(&id).await.unwrap(), Some(saved));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_existing_id() {
        let repo = MemoryConditionRepository::new();
        repo.insert(headline("a").with_id("c1")).await.unwrap();

        let result = repo.insert(headline("b").with_id("c1")).await;
        assert!(matches!(result, Err(RepositoryError::AlreadyExists { id }) if id == "c1"));
    }

    #[tokio::test]
    async fn test_replace_and_delete() {
        let repo = MemoryConditionRepository::new();
        let mut saved = repo.insert(headline("a")).await.unwrap();
        let id = saved.id.clone().unwrap();

        saved.value = "tax".to_string();
        repo.replace(&saved).await.unwrap();
        assert_eq!(repo.get(&id).await.unwrap().unwrap().value, "tax");

        repo.delete(&id).await.unwrap();
        assert!(repo.is_empty().await);
        assert!(matches!(
            repo.delete(&id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_default_lookups() {
        let repo = MemoryConditionRepository::new();
        repo.insert(headline("Budget")).await.unwrap();
        repo.insert(Condition::new("g", ConditionField::Genre, ConditionOperator::In, "Sport"))
            .await
            .unwrap();

        let found = repo.find_by_name("BUDGET").await.unwrap();
        assert_eq!(found.map(|c| c.name), Some("Budget".to_string()));

        let same = repo
            .find_by_field_operator(ConditionField::Headline, ConditionOperator::Like)
            .await
            .unwrap();
        assert_eq!(same.len(), 1);
    }

    #[tokio::test]
    async fn test_vocabularies() {
        let vocabularies = MemoryVocabularies::new();
        vocabularies.set("genre", vec![json!({"name": "Sport", "value": "Sport"})]).await;

        assert_eq!(vocabularies.items("genre").await.unwrap().unwrap().len(), 1);
        assert_eq!(vocabularies.items("missing").await.unwrap(), None);
    }
}
