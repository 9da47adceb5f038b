//! Value normalization
//!
//! A condition's raw `value` string is turned into a typed form per use:
//!
//! - `like` / `notlike` → case-insensitive contains pattern (`.*v.*`)
//! - `startswith` → case-insensitive prefix pattern (`^v`)
//! - `endswith` → case-insensitive suffix pattern (`.*v$`)
//! - `in` / `nin` → list of integers or strings
//!
//! User input is escaped before it is placed in a pattern, so characters such
//! as `.`, `(` or `+` match literally.
//!
//! ## List values
//!
//! Without a comma the raw value becomes a one-element string list, unchanged
//! (an empty value yields `[""]`). With a comma the value is split and each part
//! trimmed. If the first part is all digits the numeric branch is taken: every
//! part that is all digits is parsed, every other part (empty ones included) is
//! dropped. Otherwise all trimmed parts are kept as strings, empty ones
//! included.

use crate::condition::ConditionOperator;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::fmt;

/// One member of a normalized list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ValueItem {
    Int(i64),
    Str(String),
}

impl ValueItem {
    /// Type-strict equality against a document value
    ///
    /// Integers only equal JSON numbers and strings only equal JSON strings,
    /// so `"3"` never matches `3`.
    pub fn matches_json(&self, value: &serde_json::Value) -> bool {
        match (self, value) {
            (ValueItem::Int(expected), serde_json::Value::Number(n)) => match n.as_i64() {
                Some(actual) => actual == *expected,
                None => n.as_f64() == Some(*expected as f64),
            },
            (ValueItem::Str(expected), serde_json::Value::String(actual)) => actual == expected,
            _ => false,
        }
    }
}

impl fmt::Display for ValueItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueItem::Int(i) => write!(f, "{}", i),
            ValueItem::Str(s) => f.write_str(s),
        }
    }
}

/// Anchoring of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Contains,
    Prefix,
    Suffix,
}

/// Case-insensitive pattern built from an escaped user value
#[derive(Debug, Clone)]
pub struct Pattern {
    kind: PatternKind,
    source: String,
    // None only if compilation failed; never matches
    regex: Option<Regex>,
}

// Floor for the compiled program size; long values raise it proportionally
const MIN_SIZE_LIMIT: usize = 10 * (1 << 20);

impl Pattern {
    pub fn new(kind: PatternKind, raw: &str) -> Self {
        let escaped = regex::escape(raw);
        let source = match kind {
            PatternKind::Contains => format!(".*{}.*", escaped),
            PatternKind::Prefix => format!("^{}", escaped),
            PatternKind::Suffix => format!(".*{}$", escaped),
        };

        // `$` in the store's regex dialect also matches before a final newline
        let compiled = match kind {
            PatternKind::Suffix => format!(".*{}\n?$", escaped),
            PatternKind::Contains | PatternKind::Prefix => source.clone(),
        };
        let size_limit = escaped.len().saturating_mul(256).max(MIN_SIZE_LIMIT);

        let regex = match RegexBuilder::new(&compiled)
            .case_insensitive(true)
            .size_limit(size_limit)
            .dfa_size_limit(size_limit)
            .build()
        {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::warn!("Pattern for value {:?} could not be compiled: {}", raw, e);
                None
            }
        };

        Self { kind, source, regex }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Regular expression source, without the case-insensitive flag
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flags a store backend needs alongside [`Pattern::source`]
    pub fn options(&self) -> &'static str {
        "i"
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().map_or(false, |regex| regex.is_match(text))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.source == other.source
    }
}

/// Typed form of a raw condition value
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    List(Vec<ValueItem>),
    Pattern(Pattern),
}

impl NormalizedValue {
    /// Membership test; patterns contain nothing
    pub fn contains(&self, value: &serde_json::Value) -> bool {
        match self {
            NormalizedValue::List(items) => items.iter().any(|item| item.matches_json(value)),
            NormalizedValue::Pattern(_) => false,
        }
    }

    pub fn as_list(&self) -> Option<&[ValueItem]> {
        match self {
            NormalizedValue::List(items) => Some(items),
            NormalizedValue::Pattern(_) => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            NormalizedValue::Pattern(pattern) => Some(pattern),
            NormalizedValue::List(_) => None,
        }
    }
}

/// Normalize a raw value for the given operator
pub fn normalize(operator: ConditionOperator, raw: &str) -> NormalizedValue {
    match operator {
        ConditionOperator::Like | ConditionOperator::NotLike => {
            NormalizedValue::Pattern(Pattern::new(PatternKind::Contains, raw))
        }
        ConditionOperator::StartsWith => NormalizedValue::Pattern(Pattern::new(PatternKind::Prefix, raw)),
        ConditionOperator::EndsWith => NormalizedValue::Pattern(Pattern::new(PatternKind::Suffix, raw)),
        ConditionOperator::In | ConditionOperator::NotIn => NormalizedValue::List(normalize_list(raw)),
    }
}

/// List branch of [`normalize`], shared by the membership translators
pub fn normalize_list(raw: &str) -> Vec<ValueItem> {
    if !raw.contains(',') {
        return vec![ValueItem::Str(raw.to_string())];
    }

    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let numeric = parts.first().map_or(false, |first| is_digits(first));

    if numeric {
        parts
            .into_iter()
            .filter(|part| is_digits(part))
            .filter_map(|part| part.parse::<i64>().ok())
            .map(ValueItem::Int)
            .collect()
    } else {
        parts.into_iter().map(|part| ValueItem::Str(part.to_string())).collect()
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
