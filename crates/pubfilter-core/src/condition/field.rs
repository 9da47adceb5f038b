//! Article fields a filter condition can target

use crate::error::ConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An article field addressable by a filter condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionField {
    #[serde(rename = "anpa-category")]
    AnpaCategory,
    #[serde(rename = "urgency")]
    Urgency,
    #[serde(rename = "keywords")]
    Keywords,
    #[serde(rename = "priority")]
    Priority,
    #[serde(rename = "slugline")]
    Slugline,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "source")]
    Source,
    #[serde(rename = "headline")]
    Headline,
    #[serde(rename = "body_html")]
    BodyHtml,
    #[serde(rename = "genre")]
    Genre,
    #[serde(rename = "subject")]
    Subject,
}

/// How a field's document value becomes comparable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Compared directly
    Scalar,
    /// An object (or list of objects) compared through `sub_key`
    ObjectProjected { sub_key: &'static str },
}

impl ConditionField {
    pub const ALL: [ConditionField; 11] = [
        ConditionField::AnpaCategory,
        ConditionField::Urgency,
        ConditionField::Keywords,
        ConditionField::Priority,
        ConditionField::Slugline,
        ConditionField::Type,
        ConditionField::Source,
        ConditionField::Headline,
        ConditionField::BodyHtml,
        ConditionField::Genre,
        ConditionField::Subject,
    ];

    /// Key of the field in an article document
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionField::AnpaCategory => "anpa-category",
            ConditionField::Urgency => "urgency",
            ConditionField::Keywords => "keywords",
            ConditionField::Priority => "priority",
            ConditionField::Slugline => "slugline",
            ConditionField::Type => "type",
            ConditionField::Source => "source",
            ConditionField::Headline => "headline",
            ConditionField::BodyHtml => "body_html",
            ConditionField::Genre => "genre",
            ConditionField::Subject => "subject",
        }
    }

    pub fn shape(&self) -> FieldShape {
        match self {
            ConditionField::AnpaCategory => FieldShape::ObjectProjected { sub_key: "value" },
            ConditionField::Genre => FieldShape::ObjectProjected { sub_key: "name" },
            ConditionField::Subject => FieldShape::ObjectProjected { sub_key: "qcode" },
            ConditionField::Urgency
            | ConditionField::Keywords
            | ConditionField::Priority
            | ConditionField::Slugline
            | ConditionField::Type
            | ConditionField::Source
            | ConditionField::Headline
            | ConditionField::BodyHtml => FieldShape::Scalar,
        }
    }

    /// Dotted path used by store and search backends
    ///
    /// Object-projected fields address their sub-key (`genre.name`), all
    /// others pass through unchanged.
    pub fn projected_path(&self) -> String {
        match self.shape() {
            FieldShape::Scalar => self.as_str().to_string(),
            FieldShape::ObjectProjected { sub_key } => format!("{}.{}", self.as_str(), sub_key),
        }
    }
}

impl fmt::Display for ConditionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionField {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ConditionError::InvalidField(s.to_string()))
    }
}
