//! pubfilter runtime - realizations of filter conditions
//!
//! A [`Condition`](pubfilter_core::Condition) can be used three ways:
//! - [`matches`]: evaluate it directly against an article document
//! - [`to_store_query`]: build a document-store query fragment
//! - [`to_search_query`]: build a search-backend query fragment
//!
//! All three are pure functions of the condition (and the document, for
//! evaluation), so they can be called concurrently without coordination.
//! [`FilterExpression`] combines conditions into all/any/not groups.

pub mod evaluator;
pub mod filter;
pub mod query;

// Re-export main types
pub use evaluator::matches;
pub use filter::FilterExpression;
pub use query::{
    escape_query_string, to_search_query, to_store_query, SearchClause, SearchQuery, StoreOperator,
    StoreQuery, QUERY_STRING_FIELD,
};
