//! Unit tests for condition validation and value normalization
//!
//! Exercises the public API of pubfilter-core the way a persistence layer does.

use pubfilter_core::*;

fn stored(id: &str, name: &str, field: ConditionField, operator: ConditionOperator, value: &str) -> Condition {
    Condition::new(name, field, operator, value).with_id(id)
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_revalidating_unchanged_condition_is_ok() -> anyhow::Result<()> {
    let catalogue = FieldCatalogue::builtin();
    let condition = stored("1", "nz", ConditionField::Headline, ConditionOperator::Like, "New Zealand");
    let existing = vec![condition.clone()];

    validate(&condition, &catalogue, &existing)?;
    validate(&condition, &catalogue, &existing)?;
    Ok(())
}

#[test]
fn test_duplicate_after_trim_and_case_fold() {
    let catalogue = FieldCatalogue::builtin();
    let existing = vec![stored("1", "nz", ConditionField::Headline, ConditionOperator::Like, "New Zealand")];

    let padded = Condition::new("nz-2", ConditionField::Headline, ConditionOperator::Like, "new zealand ");
    let err = validate(&padded, &catalogue, &existing).unwrap_err();
    assert_eq!(
        err,
        ConditionError::DuplicateCondition {
            existing: "nz".to_string()
        }
    );

    let joined = Condition::new("nz-3", ConditionField::Headline, ConditionOperator::Like, "NewZealand");
    assert!(validate(&joined, &catalogue, &existing).is_ok());
}

#[test]
fn test_duplicate_check_is_order_insensitive() {
    let catalogue = FieldCatalogue::builtin();
    let existing = vec![stored("1", "cats", ConditionField::AnpaCategory, ConditionOperator::In, "a,b")];

    let reordered = Condition::new("cats-2", ConditionField::AnpaCategory, ConditionOperator::In, "b,a");
    assert!(validate(&reordered, &catalogue, &existing).is_err());
}

#[test]
fn test_same_value_on_other_field_is_not_duplicate() {
    let catalogue = FieldCatalogue::builtin();
    let existing = vec![stored("1", "a", ConditionField::Headline, ConditionOperator::Like, "budget")];

    let other_field = Condition::new("b", ConditionField::Slugline, ConditionOperator::Like, "budget");
    assert!(validate(&other_field, &catalogue, &existing).is_ok());
}

#[test]
fn test_merged_update_is_validated_as_a_whole() {
    let catalogue = FieldCatalogue::builtin();
    let original = stored("1", "genre", ConditionField::Genre, ConditionOperator::In, "Sport");

    // Changing only the operator to one genre does not support must fail
    let patch = ConditionPatch {
        operator: Some(ConditionOperator::StartsWith),
        ..Default::default()
    };
    let merged = original.merged(&patch);
    let err = validate(&merged, &catalogue, &[original.clone()]).unwrap_err();
    assert!(matches!(err, ConditionError::UnsupportedOperator { .. }));

    // Moving the field to one that allows it passes
    let patch = ConditionPatch {
        field: Some(ConditionField::Headline),
        operator: Some(ConditionOperator::StartsWith),
        ..Default::default()
    };
    let merged = original.merged(&patch);
    assert!(validate(&merged, &catalogue, &[original]).is_ok());
}

#[test]
fn test_swapped_catalogue_snapshot() {
    let narrow = FieldCatalogue::new(vec![FieldParameter::new(
        ConditionField::Headline,
        vec![ConditionOperator::In],
    )]);
    let condition = Condition::new("h", ConditionField::Headline, ConditionOperator::Like, "x");

    assert!(validate(&condition, &FieldCatalogue::builtin(), &[]).is_ok());
    assert!(validate(&condition, &narrow, &[]).is_err());
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn test_normalize_numeric_list() {
    let value = normalize(ConditionOperator::In, "1,2,3");
    assert_eq!(
        value.as_list().unwrap(),
        &[ValueItem::Int(1), ValueItem::Int(2), ValueItem::Int(3)]
    );
}

#[test]
fn test_normalize_mixed_list() {
    let value = normalize(ConditionOperator::NotIn, "a,b,3");
    assert_eq!(
        value.as_list().unwrap(),
        &[
            ValueItem::Str("a".to_string()),
            ValueItem::Str("b".to_string()),
            ValueItem::Str("3".to_string())
        ]
    );
}

#[test]
fn test_normalize_empty_value() {
    let value = normalize(ConditionOperator::In, "");
    assert_eq!(value.as_list().unwrap(), &[ValueItem::Str(String::new())]);
}

#[test]
fn test_normalize_pattern_operators() {
    for (operator, kind) in [
        (ConditionOperator::Like, PatternKind::Contains),
        (ConditionOperator::NotLike, PatternKind::Contains),
        (ConditionOperator::StartsWith, PatternKind::Prefix),
        (ConditionOperator::EndsWith, PatternKind::Suffix),
    ] {
        let value = normalize(operator, "x");
        assert_eq!(value.as_pattern().unwrap().kind(), kind);
        assert!(value.as_list().is_none());
    }
}
