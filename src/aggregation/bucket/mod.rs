//! Bucket aggregations

mod filter;
mod geohash_grid;
mod histogram;
mod range;
mod single;
mod terms;

pub use filter::{FilterAggregation, FiltersAggregation};
pub use geohash_grid::GeoHashGridAggregation;
pub use histogram::{DateHistogramAggregation, HistogramAggregation};
pub use range::{
    DateRangeAggregation, GeoDistanceAggregation, IpRangeAggregation, RangeAggregation, RangeEntry,
};
pub(crate) use range::{range_entry_setters, render_entries};
pub use single::{
    ChildrenAggregation, GlobalAggregation, MissingAggregation, NestedAggregation,
    ReverseNestedAggregation,
};
pub use terms::{SignificantTermsAggregation, TermsAggregation};
