//! Typed builders for the Elasticsearch 1.x/2.x search request DSL and a
//! decoder for aggregation responses.
//!
//! Nodes are plain values assembled with consuming setters and rendered to
//! `serde_json::Value` with `source()`:
//!
//! ```
//! use elastic_dsl::filter::TermFilter;
//! use elastic_dsl::query::MatchAllQuery;
//! use elastic_dsl::search::{Highlight, SearchSource};
//!
//! let source = SearchSource::new()
//!     .query(MatchAllQuery::new())
//!     .post_filter(TermFilter::new("tag", "important"))
//!     .highlight(Highlight::new().field("content"));
//! assert_eq!(
//!     source.source(),
//!     serde_json::json!({
//!         "query": {"match_all": {}},
//!         "post_filter": {"term": {"tag": "important"}},
//!         "highlight": {"fields": {"content": {}}}
//!     })
//! );
//! ```

pub mod aggregation;
pub mod config;
pub mod error;
pub mod facet;
pub mod filter;
pub mod models;
pub mod query;
pub mod response;
pub mod search;
pub mod sort;
pub mod suggest;

pub use config::{SearchDefaults, SearchProfile};
pub use error::{DslError, Result};
pub use models::{
    FetchSourceContext, GeoPoint, InnerHit, PartialField, RangeBound, ScriptField, SortInfo,
};
pub use response::Aggregations;
pub use search::SearchSource;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
