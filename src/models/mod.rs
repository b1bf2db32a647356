//! Primitive building blocks shared by several node families

pub mod fetch_source;
pub mod geo_point;
pub mod inner_hit;
pub(crate) mod json;
pub mod partial_field;
pub mod range_bound;
pub mod script_field;
pub mod sort_info;

pub use fetch_source::FetchSourceContext;
pub use geo_point::GeoPoint;
pub use inner_hit::InnerHit;
pub use partial_field::PartialField;
pub use range_bound::RangeBound;
pub use script_field::ScriptField;
pub use sort_info::SortInfo;
