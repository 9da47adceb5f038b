//! pubfilter core - condition model for publish filters
//!
//! This crate provides the types shared by every realization of a filter
//! condition:
//! - Condition records, fields and operators
//! - The field catalogue (allowed operators per field)
//! - Value normalization (lists and patterns)
//! - Validation and its error taxonomy

pub mod catalogue;
pub mod condition;
pub mod error;
pub mod validation;
pub mod value;

// Re-export commonly used types
pub use catalogue::{FieldCatalogue, FieldParameter};
pub use condition::{Condition, ConditionField, ConditionOperator, ConditionPatch, FieldShape};
pub use error::{ConditionError, Result};
pub use validation::validate;
pub use value::{normalize, normalize_list, NormalizedValue, Pattern, PatternKind, ValueItem};
