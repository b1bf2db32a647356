//! Filter DSL
//!
//! Filters restrict the matching document set without contributing to the
//! score. They are used as the search post-filter, inside filtered and
//! function-score queries, in filter aggregations and facet filters.
//!
//! # Example
//!
//! ```json
//! {
//!   "and": {
//!     "filters": [
//!       { "range": { "postDate": { "from": "2010-03-01", "to": "2010-04-01",
//!                                  "include_lower": true, "include_upper": true } } },
//!       { "prefix": { "name.second": "ba" } }
//!     ],
//!     "_cache": true
//!   }
//! }
//! ```

pub mod ast;
pub mod nodes;

pub use ast::{BoxedFilter, CacheOptions, Filter};
pub use nodes::*;
