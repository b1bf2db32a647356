//! Concrete facet implementations

mod filter_facet;
mod geo_distance_facet;
mod histogram_facet;
mod range_facet;
mod statistical_facet;
mod terms_facet;

pub use filter_facet::{FilterFacet, QueryFacet};
pub use geo_distance_facet::GeoDistanceFacet;
pub use histogram_facet::{DateHistogramFacet, HistogramFacet, HistogramScriptFacet};
pub use range_facet::RangeFacet;
pub use statistical_facet::{StatisticalFacet, StatisticalScriptFacet};
pub use terms_facet::{TermsFacet, TermsStatsFacet};
