//! Filter condition records

use super::field::ConditionField;
use super::operator::ConditionOperator;
use crate::error::ConditionError;
use serde::{Deserialize, Serialize};

/// A named filter rule: `field operator value`
///
/// `value` is kept as the raw string the user entered; it may hold a single
/// scalar or a comma-separated list. It is normalized per use, see
/// [`crate::value::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Storage identity, absent until the record is persisted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub field: ConditionField,
    pub operator: ConditionOperator,
    pub value: String,
}

/// Partial update to a stored condition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<ConditionField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<ConditionOperator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Condition {
    /// Create an unsaved condition
    pub fn new(
        name: impl Into<String>,
        field: ConditionField,
        operator: ConditionOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            field,
            operator,
            value: value.into(),
        }
    }

    /// Build a condition from raw field/operator names
    pub fn parse(name: &str, field: &str, operator: &str, value: &str) -> Result<Self, ConditionError> {
        Ok(Self::new(name, field.parse()?, operator.parse()?, value))
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Apply a patch, producing the merged record that update validation sees
    pub fn merged(&self, patch: &ConditionPatch) -> Condition {
        Condition {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            field: patch.field.unwrap_or(self.field),
            operator: patch.operator.unwrap_or(self.operator),
            value: patch.value.clone().unwrap_or_else(|| self.value.clone()),
        }
    }

    /// Order-insensitive, case-insensitive fingerprint of the value
    ///
    /// The trimmed value is upper-cased and its characters sorted, so two values
    /// with the same multiset of characters compare equal.
    pub fn value_fingerprint(&self) -> String {
        let mut chars: Vec<char> = self.value.trim().to_uppercase().chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }

    /// Returns true if both conditions express the same rule
    pub fn is_equivalent(&self, other: &Condition) -> bool {
        self.field == other.field
            && self.operator == other.operator
            && self.value_fingerprint() == other.value_fingerprint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_keeps_unpatched_fields() {
        let original = Condition::new("nz", ConditionField::Headline, ConditionOperator::Like, "zealand")
            .with_id("c1");
        let patch = ConditionPatch {
            operator: Some(ConditionOperator::StartsWith),
            ..Default::default()
        };

        let merged = original.merged(&patch);
        assert_eq!(merged.id.as_deref(), Some("c1"));
        assert_eq!(merged.name, "nz");
        assert_eq!(merged.field, ConditionField::Headline);
        assert_eq!(merged.operator, ConditionOperator::StartsWith);
        assert_eq!(merged.value, "zealand");
    }

    #[test]
    fn test_value_fingerprint_ignores_case_order_and_padding() {
        let a = Condition::new("a", ConditionField::Source, ConditionOperator::In, "New Zealand");
        let b = Condition::new("b", ConditionField::Source, ConditionOperator::In, "new zealand ");
        let c = Condition::new("c", ConditionField::Source, ConditionOperator::In, "NewZealand");

        assert_eq!(a.value_fingerprint(), b.value_fingerprint());
        assert!(a.is_equivalent(&b));
        assert!(!a.is_equivalent(&c));
    }

    #[test]
    fn test_equivalence_requires_same_operator() {
        let a = Condition::new("a", ConditionField::Source, ConditionOperator::In, "AAP");
        let b = Condition::new("b", ConditionField::Source, ConditionOperator::NotIn, "AAP");
        assert!(!a.is_equivalent(&b));
    }

    #[test]
    fn test_parse_raw_names() {
        let condition = Condition::parse("sport", "genre", "in", "Sport").unwrap();
        assert_eq!(condition.field, ConditionField::Genre);
        assert_eq!(condition.operator, ConditionOperator::In);

        let err = Condition::parse("bad", "genre", "matches", "x").unwrap_err();
        assert_eq!(err, ConditionError::InvalidOperator("matches".to_string()));
    }

    #[test]
    fn test_condition_serde_shape() {
        let condition: Condition = serde_json::from_str(
            r#"{"_id": "c9", "name": "cat", "field": "anpa-category", "operator": "nin", "value": "04,06"}"#,
        )
        .unwrap();

        assert_eq!(condition.id.as_deref(), Some("c9"));
        assert_eq!(condition.field, ConditionField::AnpaCategory);
        assert_eq!(condition.operator, ConditionOperator::NotIn);

        let unsaved = Condition::new("x", ConditionField::Type, ConditionOperator::In, "text");
        let json = serde_json::to_value(&unsaved).unwrap();
        assert!(json.get("_id").is_none());
    }
}
