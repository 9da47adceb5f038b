//! Composite filter expressions
//!
//! Conditions combine into `all` / `any` / `not` groups. Each group is
//! realized the same three ways as a single condition:
//!
//! | group | evaluation | store | search |
//! |---|---|---|---|
//! | `all` | every item matches | `$and` | `bool.must` |
//! | `any` | at least one item matches | `$or` | `bool.should` |
//! | `not` | no item matches | `$nor` | `bool.must_not` |
//!
//! Negated leaf conditions (`nin`, `notlike`) are wrapped in `bool.must_not`
//! on the search side, since their clause is the positive form.

use crate::evaluator::matches;
use crate::query::{to_search_query, to_store_query};
use pubfilter_core::Condition;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A condition or a logical group of expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterExpression {
    Condition(Condition),
    All(Vec<FilterExpression>),
    Any(Vec<FilterExpression>),
    Not(Vec<FilterExpression>),
}

impl FilterExpression {
    pub fn all(items: Vec<FilterExpression>) -> Self {
        FilterExpression::All(items)
    }

    pub fn any(items: Vec<FilterExpression>) -> Self {
        FilterExpression::Any(items)
    }

    pub fn not(items: Vec<FilterExpression>) -> Self {
        FilterExpression::Not(items)
    }

    /// Evaluate against an article document
    pub fn matches(&self, document: &Value) -> bool {
        match self {
            FilterExpression::Condition(condition) => matches(condition, document),
            FilterExpression::All(items) => items.iter().all(|item| item.matches(document)),
            FilterExpression::Any(items) => items.iter().any(|item| item.matches(document)),
            FilterExpression::Not(items) => !items.iter().any(|item| item.matches(document)),
        }
    }

    /// Combined document-store query
    pub fn to_store_query(&self) -> Value {
        match self {
            FilterExpression::Condition(condition) => to_store_query(condition).to_json(),
            FilterExpression::All(items) if items.is_empty() => json!({}),
            FilterExpression::Not(items) if items.is_empty() => json!({}),
            // Nothing satisfies an empty disjunction
            FilterExpression::Any(items) if items.is_empty() => json!({ "$nor": [{}] }),
            FilterExpression::All(items) => json!({ "$and": store_queries(items) }),
            FilterExpression::Any(items) => json!({ "$or": store_queries(items) }),
            FilterExpression::Not(items) => json!({ "$nor": store_queries(items) }),
        }
    }

    /// Combined search query
    pub fn to_search_query(&self) -> Value {
        match self {
            FilterExpression::Condition(condition) => {
                let query = to_search_query(condition);
                if query.is_negated() {
                    json!({ "bool": { "must_not": [query.to_json()] } })
                } else {
                    query.to_json()
                }
            }
            FilterExpression::All(items) if items.is_empty() => json!({ "match_all": {} }),
            FilterExpression::Not(items) if items.is_empty() => json!({ "match_all": {} }),
            FilterExpression::Any(items) if items.is_empty() => json!({ "match_none": {} }),
            FilterExpression::All(items) => json!({ "bool": { "must": search_queries(items) } }),
            FilterExpression::Any(items) => json!({
                "bool": { "should": search_queries(items), "minimum_should_match": 1 }
            }),
            FilterExpression::Not(items) => json!({ "bool": { "must_not": search_queries(items) } }),
        }
    }

    /// All leaf conditions, depth first
    pub fn conditions(&self) -> Vec<&Condition> {
        let mut result = Vec::new();
        self.collect_conditions(&mut result);
        result
    }

    fn collect_conditions<'a>(&'a self, result: &mut Vec<&'a Condition>) {
        match self {
            FilterExpression::Condition(condition) => result.push(condition),
            FilterExpression::All(items) | FilterExpression::Any(items) | FilterExpression::Not(items) => {
                for item in items {
                    item.collect_conditions(result);
                }
            }
        }
    }
}

impl From<Condition> for FilterExpression {
    fn from(condition: Condition) -> Self {
        FilterExpression::Condition(condition)
    }
}

fn store_queries(items: &[FilterExpression]) -> Vec<Value> {
    items.iter().map(FilterExpression::to_store_query).collect()
}

fn search_queries(items: &[FilterExpression]) -> Vec<Value> {
    items.iter().map(FilterExpression::to_search_query).collect()
}
