//! Metric aggregations

mod cardinality;
mod geo_bounds;
mod percentiles;
mod simple;
mod top_hits;

pub use cardinality::CardinalityAggregation;
pub use geo_bounds::GeoBoundsAggregation;
pub use percentiles::{PercentileRanksAggregation, PercentilesAggregation};
pub use simple::{
    AvgAggregation, ExtendedStatsAggregation, MaxAggregation, MinAggregation, StatsAggregation,
    SumAggregation, ValueCountAggregation,
};
pub use top_hits::TopHitsAggregation;
