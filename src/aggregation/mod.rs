//! Aggregation family
//!
//! Metric aggregations compute values over the matching documents, bucket
//! aggregations group them and may carry named sub-aggregations.
//!
//! # Example
//!
//! ```json
//! {
//!   "terms": { "field": "genre", "order": { "avg_play_count": "desc" } },
//!   "aggregations": {
//!     "avg_play_count": { "avg": { "field": "play_count" } }
//!   }
//! }
//! ```

pub mod ast;
pub mod bucket;
pub mod metrics;

pub use ast::{Aggregation, BoxedAggregation, BucketOrder, NamedAggregations, ValuesSource};
pub use bucket::*;
pub use metrics::*;
pub(crate) use bucket::{range_entry_setters, render_entries};
