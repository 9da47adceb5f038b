//! Query translation
//!
//! Translates filter conditions into query fragments for the two backends
//! that store articles:
//! - [`store`]: the document store (`$in`, `$nin`, `$regex`, `$not`)
//! - [`search`]: the full-text search index (`terms`, `query_string`)

pub mod search;
pub mod store;

pub use search::{escape_query_string, to_search_query, SearchClause, SearchQuery, QUERY_STRING_FIELD};
pub use store::{to_store_query, StoreOperator, StoreQuery};
