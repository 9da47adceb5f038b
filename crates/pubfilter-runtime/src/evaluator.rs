//! Direct evaluation of a condition against an article
//!
//! Documents are JSON objects. A field that is missing from the document
//! satisfies only the negated operators (`nin`, `notlike`).
//!
//! Object-valued fields (`anpa-category`, `genre`, `subject`) are projected
//! through their sub-key first: a single object yields the sub-key value, a
//! list of objects yields the list of sub-key values.

use pubfilter_core::{normalize, Condition, ConditionOperator, FieldShape, NormalizedValue};
use serde_json::Value;

static NULL: Value = Value::Null;

/// A document value after sub-key projection
#[derive(Debug, PartialEq)]
pub(crate) enum Projected<'a> {
    Scalar(&'a Value),
    Collection(Vec<&'a Value>),
}

/// Evaluate a condition against an article document
pub fn matches(condition: &Condition, document: &Value) -> bool {
    let Some(raw) = document.get(condition.field.as_str()) else {
        let result = condition.operator.is_negated();
        tracing::debug!(
            "Field {} missing from document, {} condition {} -> {}",
            condition.field,
            condition.operator,
            condition.name,
            result
        );
        return result;
    };

    let projected = project(condition.field.shape(), raw);
    let value = normalize(condition.operator, &condition.value);
    let result = run_filter(condition.operator, &projected, &value);

    tracing::debug!(
        "Evaluated condition {} ({} {} {:?}) -> {}",
        condition.name,
        condition.field,
        condition.operator,
        condition.value,
        result
    );
    result
}

pub(crate) fn project(shape: FieldShape, raw: &Value) -> Projected<'_> {
    match (shape, raw) {
        (FieldShape::Scalar, Value::Array(items)) => Projected::Collection(items.iter().collect()),
        (FieldShape::Scalar, _) => Projected::Scalar(raw),
        (FieldShape::ObjectProjected { sub_key }, Value::Object(map)) => {
            Projected::Scalar(map.get(sub_key).unwrap_or(&NULL))
        }
        (FieldShape::ObjectProjected { sub_key }, Value::Array(items)) => Projected::Collection(
            items
                .iter()
                .filter_map(|item| item.as_object().and_then(|map| map.get(sub_key)))
                .collect(),
        ),
        // A bare value on an object field is compared as-is
        (FieldShape::ObjectProjected { .. }, _) => Projected::Scalar(raw),
    }
}

fn run_filter(operator: ConditionOperator, projected: &Projected<'_>, value: &NormalizedValue) -> bool {
    match operator {
        ConditionOperator::In => match projected {
            Projected::Collection(items) => items.iter().any(|item| value.contains(item)),
            Projected::Scalar(item) => value.contains(item),
        },
        ConditionOperator::NotIn => match projected {
            Projected::Collection(items) => items.iter().all(|item| !value.contains(item)),
            Projected::Scalar(item) => !value.contains(item),
        },
        ConditionOperator::Like | ConditionOperator::StartsWith | ConditionOperator::EndsWith => {
            pattern_matches(projected, value)
        }
        ConditionOperator::NotLike => !pattern_matches(projected, value),
    }
}

fn pattern_matches(projected: &Projected<'_>, value: &NormalizedValue) -> bool {
    let Some(pattern) = value.as_pattern() else {
        return false;
    };

    let is_match = |item: &Value| match text_of(item) {
        Some(text) => pattern.is_match(&text),
        None => false,
    };

    match projected {
        Projected::Scalar(item) => is_match(*item),
        Projected::Collection(items) => items.iter().any(|item| is_match(*item)),
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
