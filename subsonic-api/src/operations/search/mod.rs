//! Search operations

mod search3;

pub use search3::{SearchOperation, SearchRequest, SearchResponse};
