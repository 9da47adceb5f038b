//! Persistence boundary for publish filter conditions
//!
//! This crate wires the pure condition engine (`pubfilter-core`,
//! `pubfilter-runtime`) to storage:
//!
//! - [`ConditionRepository`] / [`MemoryConditionRepository`]: condition records
//! - [`VocabularyProvider`] / [`MemoryVocabularies`]: controlled vocabularies
//! - [`ParametersService`]: field catalogue with vocabulary values
//! - [`ConditionService`]: validated create/update/delete and routing
//! - [`EngineConfig`]: YAML configuration
//!
//! # Quick Start
//!
//! ```no_run
//! use pubfilter_core::{Condition, ConditionField, ConditionOperator, FieldCatalogue};
//! use pubfilter_repository::{ConditionService, MemoryConditionRepository};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = ConditionService::new(
//!         Arc::new(MemoryConditionRepository::new()),
//!         Arc::new(FieldCatalogue::builtin()),
//!     );
//!
//!     service
//!         .create(Condition::new("sport", ConditionField::Genre, ConditionOperator::In, "Sport"))
//!         .await?;
//!
//!     let doc = serde_json::json!({"genre": [{"name": "Sport"}]});
//!     assert_eq!(service.find_matching(&doc).await?, vec!["sport"]);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod parameters;
pub mod service;
pub mod traits;

// Re-export main types
pub use config::{ConfigError, EngineConfig};
pub use error::{RepositoryError, RepositoryResult};
pub use memory::{MemoryConditionRepository, MemoryVocabularies};
pub use parameters::ParametersService;
pub use service::ConditionService;
pub use traits::{CatalogueProvider, ConditionRepository, VocabularyProvider};
