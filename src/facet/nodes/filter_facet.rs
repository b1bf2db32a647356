//! Single-count facets defined by a filter or a query

use serde_json::Value;

use crate::facet::ast::{facet_options_setters, Facet, FacetOptions};
use crate::filter::{BoxedFilter, Filter};
use crate::query::{BoxedQuery, Query};

/// Number of hits matching a filter
#[derive(Clone, Debug)]
pub struct FilterFacet {
    filter: BoxedFilter,
    options: FacetOptions,
}

impl FilterFacet {
    pub fn new(filter: impl Filter + 'static) -> Self {
        Self {
            filter: Box::new(filter),
            options: FacetOptions::default(),
        }
    }
}

facet_options_setters!(FilterFacet);

impl Facet for FilterFacet {
    fn source(&self) -> Value {
        self.options.render("filter", self.filter.source())
    }
}

/// Number of hits matching a query
#[derive(Clone, Debug)]
pub struct QueryFacet {
    query: BoxedQuery,
    options: FacetOptions,
}

impl QueryFacet {
    pub fn new(query: impl Query + 'static) -> Self {
        Self {
            query: Box::new(query),
            options: FacetOptions::default(),
        }
    }
}

facet_options_setters!(QueryFacet);

impl Facet for QueryFacet {
    fn source(&self) -> Value {
        self.options.render("query", self.query.source())
    }
}
