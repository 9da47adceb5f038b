//! Condition lifecycle
//!
//! [`ConditionService`] is the only write path for filter conditions. Every
//! create and update is validated against the current catalogue snapshot and
//! the stored conditions before it reaches the repository:
//!
//! - `create`: name check, then field/operator/duplicate validation
//! - `update`: the patch is merged onto the stored record and the merged
//!   record is validated as a whole, then the name is checked
//!
//! Reads and deletes are not validated. Checks and the write that follows
//! run under one service-wide lock, so concurrent writes through the same
//! service cannot both pass the duplicate and name checks. Writers that
//! bypass the service (or another process) are not covered.

use crate::error::{RepositoryError, RepositoryResult};
use crate::traits::{CatalogueProvider, ConditionRepository};
use pubfilter_core::{validate, Condition, ConditionPatch};
use pubfilter_runtime::matches;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub struct ConditionService {
    repository: Arc<dyn ConditionRepository>,
    catalogue: Arc<dyn CatalogueProvider>,
    write_lock: Mutex<()>,
}

impl ConditionService {
    pub fn new(repository: Arc<dyn ConditionRepository>, catalogue: Arc<dyn CatalogueProvider>) -> Self {
        Self {
            repository,
            catalogue,
            write_lock: Mutex::new(()),
        }
    }

    /// Swap the catalogue used by later validations
    pub fn set_catalogue(&mut self, catalogue: Arc<dyn CatalogueProvider>) {
        self.catalogue = catalogue;
    }

    pub async fn create(&self, condition: Condition) -> RepositoryResult<Condition> {
        let _guard = self.write_lock.lock().await;
        let checked = match self.check_name(&condition).await {
            Ok(()) => self.check_condition(&condition).await,
            Err(e) => Err(e),
        };
        if let Err(e) = checked {
            warn!("Rejected filter condition {}: {}", condition.name, e);
            return Err(e);
        }

        let saved = self.repository.insert(condition).await?;
        info!(
            "Created filter condition {} ({})",
            saved.name,
            saved.id.as_deref().unwrap_or_default()
        );
        Ok(saved)
    }

    pub async fn update(&self, id: &str, patch: &ConditionPatch) -> RepositoryResult<Condition> {
        let _guard = self.write_lock.lock().await;
        let original = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })?;
        let merged = original.merged(patch);

        let checked = match self.check_condition(&merged).await {
            Ok(()) => self.check_name(&merged).await,
            Err(e) => Err(e),
        };
        if let Err(e) = checked {
            warn!("Rejected update of filter condition {}: {}", id, e);
            return Err(e);
        }

        self.repository.replace(&merged).await?;
        info!("Updated filter condition {} ({})", merged.name, id);
        Ok(merged)
    }

    pub async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.repository.delete(id).await?;
        info!("Deleted filter condition {}", id);
        Ok(())
    }

    pub async fn get(&self, id: &str) -> RepositoryResult<Option<Condition>> {
        self.repository.get(id).await
    }

    pub async fn list(&self) -> RepositoryResult<Vec<Condition>> {
        self.repository.list().await
    }

    /// Names of the stored conditions the document satisfies
    pub async fn find_matching(&self, document: &Value) -> RepositoryResult<Vec<String>> {
        let conditions = self.repository.list().await?;
        let names: Vec<String> = conditions
            .into_iter()
            .filter(|c| matches(c, document))
            .map(|c| c.name)
            .collect();

        debug!("Document matched {} filter conditions", names.len());
        Ok(names)
    }

    async fn check_name(&self, condition: &Condition) -> RepositoryResult<()> {
        if condition.name.trim().is_empty() {
            return Err(RepositoryError::MissingName);
        }

        match self.repository.find_by_name(&condition.name).await? {
            Some(other) if condition.id.is_none() || other.id != condition.id => {
                Err(RepositoryError::DuplicateName {
                    name: condition.name.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    async fn check_condition(&self, condition: &Condition) -> RepositoryResult<()> {
        let catalogue = self.catalogue.catalogue().await?;
        let existing = self
            .repository
            .find_by_field_operator(condition.field, condition.operator)
            .await?;

        validate(condition, &catalogue, &existing)?;
        Ok(())
    }
}
