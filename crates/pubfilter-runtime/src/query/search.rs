//! Search-backend query fragments
//!
//! `in` / `nin` become a `terms` clause on the projected field. The pattern
//! operators become a `query_string` clause whose field key is the backend's
//! free-text key, `query`:
//!
//! ```text
//! like / notlike   {"query_string": {"query": "headline:*budget*"}}
//! startswith       {"query_string": {"query": "headline:budget*"}}
//! endswith         {"query_string": {"query": "headline:*budget"}}
//! ```
//!
//! Negated conditions (`nin`, `notlike`) render the positive clause; whoever
//! composes the final query must place them under `must_not`
//! (see [`SearchQuery::is_negated`]).

use pubfilter_core::{normalize_list, Condition, ConditionOperator, ValueItem};
use serde_json::{json, Map, Value};

/// Free-text field key of the search backend
pub const QUERY_STRING_FIELD: &str = "query";

/// Clause kind of a translated condition
#[derive(Debug, Clone, PartialEq)]
pub enum SearchClause {
    Terms { field: String, values: Vec<ValueItem> },
    QueryString { query: String },
}

/// One translated condition for the search backend
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub clause: SearchClause,
    negated: bool,
}

impl SearchQuery {
    /// Clause label (`terms` or `query_string`)
    pub fn label(&self) -> &'static str {
        match self.clause {
            SearchClause::Terms { .. } => "terms",
            SearchClause::QueryString { .. } => "query_string",
        }
    }

    /// Effective field key: the projected field, or `query` for free text
    pub fn field(&self) -> &str {
        match &self.clause {
            SearchClause::Terms { field, .. } => field.as_str(),
            SearchClause::QueryString { .. } => QUERY_STRING_FIELD,
        }
    }

    /// True when the condition must be applied as an exclusion
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// `{ <field>: <value> }`
    pub fn body(&self) -> Value {
        let value = match &self.clause {
            SearchClause::Terms { values, .. } => json!(values),
            SearchClause::QueryString { query } => Value::String(query.clone()),
        };

        let mut body = Map::new();
        body.insert(self.field().to_string(), value);
        Value::Object(body)
    }

    /// `{ <label>: { <field>: <value> } }`
    pub fn to_json(&self) -> Value {
        let mut clause = Map::new();
        clause.insert(self.label().to_string(), self.body());
        Value::Object(clause)
    }
}

/// Translate a condition into a search query fragment
pub fn to_search_query(condition: &Condition) -> SearchQuery {
    let field = condition.field.projected_path();
    let value = escape_query_string(&condition.value);

    let clause = match condition.operator {
        ConditionOperator::In | ConditionOperator::NotIn => SearchClause::Terms {
            field,
            values: normalize_list(&condition.value),
        },
        ConditionOperator::Like | ConditionOperator::NotLike => SearchClause::QueryString {
            query: format!("{}:*{}*", field, value),
        },
        ConditionOperator::StartsWith => SearchClause::QueryString {
            query: format!("{}:{}*", field, value),
        },
        ConditionOperator::EndsWith => SearchClause::QueryString {
            query: format!("{}:*{}", field, value),
        },
    };

    let query = SearchQuery {
        clause,
        negated: condition.operator.is_negated(),
    };
    tracing::debug!("Search query for condition {}: {}", condition.name, query.to_json());
    query
}

/// Backslash-escape query-string syntax so the value is matched literally
pub fn escape_query_string(value: &str) -> String {
    const RESERVED: &str = r#"+-=&|><!(){}[]^"~*?:\/"#;

    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if RESERVED.contains(c) || c.is_whitespace() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubfilter_core::ConditionField;

    #[test]
    fn test_escape_query_string() {
        assert_eq!(escape_query_string("review"), "review");
        assert_eq!(escape_query_string("PM-"), r"PM\-");
        assert_eq!(escape_query_string("New Zealand"), r"New\ Zealand");
        assert_eq!(escape_query_string("a:b*"), r"a\:b\*");
    }

    #[test]
    fn test_like_and_notlike_share_clause() {
        let like = Condition::new("l", ConditionField::Slugline, ConditionOperator::Like, "budget");
        let notlike = Condition::new("n", ConditionField::Slugline, ConditionOperator::NotLike, "budget");

        let like = to_search_query(&like);
        let notlike = to_search_query(&notlike);
        assert_eq!(like.clause, notlike.clause);
        assert!(!like.is_negated());
        assert!(notlike.is_negated());
        assert_eq!(like.body(), json!({"query": "slugline:*budget*"}));
    }

    #[test]
    fn test_terms_use_projected_field() {
        let condition = Condition::new("s", ConditionField::Subject, ConditionOperator::In, "15000000");
        let query = to_search_query(&condition);
        assert_eq!(query.label(), "terms");
        assert_eq!(query.to_json(), json!({"terms": {"subject.qcode": ["15000000"]}}));
    }
}
