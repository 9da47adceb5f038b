//! Document-store query fragments
//!
//! A condition becomes `{ <projected field>: { <operator>: <value> } }` in the
//! store's query language:
//!
//! | condition operator | store operator | value |
//! |---|---|---|
//! | `in` | `$in` | normalized list |
//! | `nin` | `$nin` | normalized list |
//! | `like`, `startswith`, `endswith` | `$regex` | case-insensitive pattern |
//! | `notlike` | `$not` | case-insensitive contains pattern |

use pubfilter_core::{normalize, Condition, ConditionOperator, NormalizedValue, Pattern, ValueItem};
use serde_json::{json, Map, Value};

/// Store-side operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperator {
    In,
    NotIn,
    Regex,
    Not,
}

impl StoreOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOperator::In => "$in",
            StoreOperator::NotIn => "$nin",
            StoreOperator::Regex => "$regex",
            StoreOperator::Not => "$not",
        }
    }
}

impl From<ConditionOperator> for StoreOperator {
    fn from(operator: ConditionOperator) -> Self {
        match operator {
            ConditionOperator::In => StoreOperator::In,
            ConditionOperator::NotIn => StoreOperator::NotIn,
            ConditionOperator::Like | ConditionOperator::StartsWith | ConditionOperator::EndsWith => {
                StoreOperator::Regex
            }
            ConditionOperator::NotLike => StoreOperator::Not,
        }
    }
}

/// One translated condition for the document store
#[derive(Debug, Clone, PartialEq)]
pub struct StoreQuery {
    pub field: String,
    pub operator: StoreOperator,
    pub value: NormalizedValue,
}

impl StoreQuery {
    /// Render the fragment as the store client expects it
    pub fn to_json(&self) -> Value {
        let predicate = match (&self.value, self.operator) {
            (NormalizedValue::List(items), operator) => list_predicate(operator, items),
            (NormalizedValue::Pattern(pattern), StoreOperator::Not) => {
                json!({ "$not": regex_json(pattern) })
            }
            (NormalizedValue::Pattern(pattern), _) => regex_json(pattern),
        };

        let mut fragment = Map::new();
        fragment.insert(self.field.clone(), predicate);
        Value::Object(fragment)
    }
}

fn list_predicate(operator: StoreOperator, items: &[ValueItem]) -> Value {
    let mut predicate = Map::new();
    predicate.insert(operator.as_str().to_string(), json!(items));
    Value::Object(predicate)
}

fn regex_json(pattern: &Pattern) -> Value {
    json!({ "$regex": pattern.source(), "$options": pattern.options() })
}

/// Translate a condition into a store query fragment
pub fn to_store_query(condition: &Condition) -> StoreQuery {
    let query = StoreQuery {
        field: condition.field.projected_path(),
        operator: condition.operator.into(),
        value: normalize(condition.operator, &condition.value),
    };
    tracing::debug!("Store query for condition {}: {}", condition.name, query.to_json());
    query
}
