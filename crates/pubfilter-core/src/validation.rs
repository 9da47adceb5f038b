//! Condition validation
//!
//! Run before a condition is created or updated. A condition is rejected when:
//!
//! - its field has no entry in the [`FieldCatalogue`]
//! - its operator is not registered for that field
//! - another stored condition has the same field and operator and a value with
//!   the same characters, ignoring case, order and surrounding whitespace
//!
//! On update the caller merges the patch first and validates the merged record;
//! the record itself (same `id`) is skipped by the duplicate check.

use crate::catalogue::FieldCatalogue;
use crate::condition::Condition;
use crate::error::{ConditionError, Result};

/// Validate a condition against the catalogue and the stored conditions
pub fn validate(condition: &Condition, catalogue: &FieldCatalogue, existing: &[Condition]) -> Result<()> {
    check_parameters(condition, catalogue)?;
    check_duplicates(condition, existing)?;
    log::debug!("Filter condition {} is valid", condition.name);
    Ok(())
}

/// Check field and operator against the catalogue
pub fn check_parameters(condition: &Condition, catalogue: &FieldCatalogue) -> Result<()> {
    let parameter = catalogue.get(condition.field).ok_or_else(|| ConditionError::UnknownField {
        name: condition.name.clone(),
        field: condition.field.to_string(),
    })?;

    if !parameter.allows(condition.operator) {
        return Err(ConditionError::UnsupportedOperator {
            name: condition.name.clone(),
            operator: condition.operator.to_string(),
        });
    }

    Ok(())
}

/// Check that no other condition expresses the same rule
pub fn check_duplicates(condition: &Condition, existing: &[Condition]) -> Result<()> {
    for other in existing {
        if condition.id.is_some() && condition.id == other.id {
            continue;
        }
        if condition.is_equivalent(other) {
            return Err(ConditionError::DuplicateCondition {
                existing: other.name.clone(),
            });
        }
    }
    Ok(())
}
