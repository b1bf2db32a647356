//! Filter-defined buckets

use serde_json::Value;

use crate::aggregation::ast::{bucket_setters, render_value, Aggregation, NamedAggregations};
use crate::filter::{BoxedFilter, Filter};
use crate::models::json::{single, Object};

/// Single bucket of the documents matching a filter
#[derive(Clone, Debug)]
pub struct FilterAggregation {
    filter: BoxedFilter,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl FilterAggregation {
    pub fn new(filter: impl Filter + 'static) -> Self {
        Self {
            filter: Box::new(filter),
            sub_aggregations: NamedAggregations::new(),
            meta: Object::new(),
        }
    }
}

bucket_setters!(FilterAggregation);

impl Aggregation for FilterAggregation {
    fn source(&self) -> Value {
        render_value(
            "filter",
            self.filter.source(),
            &self.sub_aggregations,
            &self.meta,
        )
    }
}

/// One bucket per filter, in insertion order
#[derive(Clone, Debug, Default)]
pub struct FiltersAggregation {
    filters: Vec<BoxedFilter>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl FiltersAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bucket filter
    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
}

bucket_setters!(FiltersAggregation);

impl Aggregation for FiltersAggregation {
    fn source(&self) -> Value {
        let filters = Value::Array(self.filters.iter().map(|f| f.source()).collect());
        render_value(
            "filters",
            single("filters", filters),
            &self.sub_aggregations,
            &self.meta,
        )
    }
}
