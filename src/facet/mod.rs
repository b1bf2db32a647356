//! Legacy facet family
//!
//! Facets predate aggregations and are still accepted by 1.x clusters. Their
//! wire format differs from aggregations, so the two families are kept
//! apart.

pub mod ast;
pub mod nodes;

pub use ast::{BoxedFacet, Facet, FacetOptions};
pub use nodes::*;
