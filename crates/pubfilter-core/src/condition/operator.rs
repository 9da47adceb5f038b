//! Filter condition operators

use crate::error::ConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operators a filter condition can apply to an article field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionOperator {
    /// Membership (in)
    #[serde(rename = "in")]
    In,
    /// Non-membership (nin)
    #[serde(rename = "nin")]
    NotIn,
    /// Case-insensitive contains (like)
    #[serde(rename = "like")]
    Like,
    /// Negated contains (notlike)
    #[serde(rename = "notlike")]
    NotLike,
    /// Case-insensitive prefix (startswith)
    #[serde(rename = "startswith")]
    StartsWith,
    /// Case-insensitive suffix (endswith)
    #[serde(rename = "endswith")]
    EndsWith,
}

impl ConditionOperator {
    /// Every operator, in catalogue listing order
    pub const ALL: [ConditionOperator; 6] = [
        ConditionOperator::In,
        ConditionOperator::NotIn,
        ConditionOperator::Like,
        ConditionOperator::NotLike,
        ConditionOperator::StartsWith,
        ConditionOperator::EndsWith,
    ];

    /// Wire name of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionOperator::In => "in",
            ConditionOperator::NotIn => "nin",
            ConditionOperator::Like => "like",
            ConditionOperator::NotLike => "notlike",
            ConditionOperator::StartsWith => "startswith",
            ConditionOperator::EndsWith => "endswith",
        }
    }

    /// Returns true for the list operators (`in`, `nin`)
    pub fn is_membership(&self) -> bool {
        matches!(self, ConditionOperator::In | ConditionOperator::NotIn)
    }

    /// Returns true for the pattern operators
    pub fn is_pattern(&self) -> bool {
        !self.is_membership()
    }

    /// Returns true for operators that are satisfied by a missing field
    pub fn is_negated(&self) -> bool {
        matches!(self, ConditionOperator::NotIn | ConditionOperator::NotLike)
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionOperator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionOperator::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ConditionError::InvalidOperator(s.to_string()))
    }
}
