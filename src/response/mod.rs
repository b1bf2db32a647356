//! Aggregation response decoder
//!
//! Independent of the builders: it takes the `aggregations` object of a
//! search response and exposes typed results by name. Every result derefs
//! to [`Aggregations`], so sub-aggregations are reached through the result
//! itself:
//!
//! ```
//! use elastic_dsl::response::Aggregations;
//!
//! let aggs: Aggregations = r#"{"genres": {"buckets": [
//!     {"key": "rock", "doc_count": 3, "plays": {"value": 42}}
//! ]}}"#.parse().unwrap();
//! let genres = aggs.terms("genres").unwrap();
//! assert_eq!(genres.buckets[0].sum("plays").unwrap().value, Some(42.0));
//! ```

pub mod aggregations;
pub mod buckets;
pub mod hits;
pub mod metrics;
pub mod pipeline;

pub use aggregations::Aggregations;
pub use buckets::{
    BucketFilters, BucketHistogramItem, BucketHistogramItems, BucketKeyItem, BucketKeyItems,
    BucketKeyedRangeItems, BucketRangeItem, BucketRangeItems, BucketSignificantTerm,
    BucketSignificantTerms, FiltersBuckets, SingleBucket,
};
pub use hits::{InnerHitResult, SearchHit, SearchHits};
pub use metrics::{
    ExtendedStatsMetric, GeoBounds, GeoBoundsMetric, MatrixStatsField, MatrixStatsMetric,
    PercentilesMetric, StatsMetric, TopHitsMetric, ValueMetric,
};
pub use pipeline::{
    PipelineBucketMetricValue, PipelineDerivative, PipelinePercentilesMetric,
    PipelineSimpleValue, PipelineStatsMetric,
};
