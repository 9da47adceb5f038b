//! Filter condition model
//!
//! A condition names one article field, one operator and a raw string value:
//!
//! ```text
//! { "name": "sport-only", "field": "genre", "operator": "in", "value": "Sport,Finance" }
//! ```
//!
//! ## Fields
//! `anpa-category`, `urgency`, `keywords`, `priority`, `slugline`, `type`,
//! `source`, `headline`, `body_html`, `genre`, `subject`.
//!
//! `anpa-category`, `genre` and `subject` hold objects on the article and are
//! compared through a sub-key (`value`, `name`, `qcode`).
//!
//! ## Operators
//! - `in` / `nin` (membership in a comma-separated list)
//! - `like` / `notlike` (case-insensitive contains)
//! - `startswith` / `endswith` (case-insensitive prefix/suffix)

mod field;
mod operator;
mod types;

pub use field::{ConditionField, FieldShape};
pub use operator::ConditionOperator;
pub use types::{Condition, ConditionPatch};
