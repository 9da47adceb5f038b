//! Field catalogue
//!
//! The catalogue lists, per article field, which operators a condition may use
//! and (for vocabulary-backed fields) the legal values shown to users. It is
//! an immutable snapshot: validation takes it by reference and callers swap
//! in a new snapshot rather than mutating one in place.

use crate::condition::{ConditionField, ConditionOperator};
use serde::{Deserialize, Serialize};

/// One catalogue entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldParameter {
    pub field: ConditionField,
    pub operators: Vec<ConditionOperator>,
    /// Enumerated legal values (vocabulary items), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<serde_json::Value>>,
    /// Key of a vocabulary item that holds its comparable value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_field: Option<String>,
}

impl FieldParameter {
    pub fn new(field: ConditionField, operators: impl Into<Vec<ConditionOperator>>) -> Self {
        Self {
            field,
            operators: operators.into(),
            values: None,
            value_field: None,
        }
    }

    pub fn with_value_field(mut self, value_field: impl Into<String>) -> Self {
        self.value_field = Some(value_field.into());
        self
    }

    pub fn with_values(mut self, values: Vec<serde_json::Value>) -> Self {
        self.values = Some(values);
        self
    }

    pub fn allows(&self, operator: ConditionOperator) -> bool {
        self.operators.contains(&operator)
    }
}

/// Ordered, read-only mapping from field to its parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCatalogue {
    entries: Vec<FieldParameter>,
}

const MEMBERSHIP: [ConditionOperator; 2] = [ConditionOperator::In, ConditionOperator::NotIn];

impl FieldCatalogue {
    pub fn new(entries: Vec<FieldParameter>) -> Self {
        Self { entries }
    }

    /// The stock catalogue for news articles, without vocabulary values
    pub fn builtin() -> Self {
        use ConditionField::*;

        Self::new(vec![
            FieldParameter::new(AnpaCategory, MEMBERSHIP).with_value_field("qcode"),
            FieldParameter::new(Urgency, MEMBERSHIP).with_value_field("value"),
            FieldParameter::new(Genre, MEMBERSHIP).with_value_field("value"),
            FieldParameter::new(Subject, MEMBERSHIP).with_value_field("qcode"),
            FieldParameter::new(Priority, MEMBERSHIP).with_value_field("qcode"),
            FieldParameter::new(Keywords, ConditionOperator::ALL),
            FieldParameter::new(Slugline, ConditionOperator::ALL),
            FieldParameter::new(Type, MEMBERSHIP).with_value_field("value"),
            FieldParameter::new(Source, ConditionOperator::ALL),
            FieldParameter::new(Headline, ConditionOperator::ALL),
            FieldParameter::new(BodyHtml, ConditionOperator::ALL),
        ])
    }

    pub fn get(&self, field: ConditionField) -> Option<&FieldParameter> {
        self.entries.iter().find(|entry| entry.field == field)
    }

    pub fn entries(&self) -> &[FieldParameter] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldParameter> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
