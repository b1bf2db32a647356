//! Concrete filter node implementations

mod and_filter;
mod bool_filter;
mod exists_filter;
mod geo_distance_filter;
mod has_child_filter;
mod ids_filter;
mod nested_filter;
mod not_filter;
mod prefix_filter;
mod query_filter;
mod range_filter;
mod regexp_filter;
mod script_filter;
mod term_filter;
mod type_filter;

pub use and_filter::{AndFilter, OrFilter};
pub use bool_filter::BoolFilter;
pub use exists_filter::{ExistsFilter, MissingFilter};
pub use geo_distance_filter::{GeoBoundingBoxFilter, GeoDistanceFilter, GeoPolygonFilter};
pub use has_child_filter::{HasChildFilter, HasParentFilter};
pub use ids_filter::IdsFilter;
pub use nested_filter::NestedFilter;
pub use not_filter::NotFilter;
pub use prefix_filter::PrefixFilter;
pub use query_filter::QueryFilter;
pub use range_filter::RangeFilter;
pub use regexp_filter::RegexpFilter;
pub use script_filter::ScriptFilter;
pub use term_filter::{TermFilter, TermsFilter, TermsLookupFilter};
pub use type_filter::{LimitFilter, MatchAllFilter, TypeFilter};
