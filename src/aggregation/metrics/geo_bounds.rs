use serde_json::Value;

use crate::aggregation::ast::{
    bucket_setters, render, values_source_setters, Aggregation, NamedAggregations, ValuesSource,
};
use crate::models::json::{put, Object};

/// Bounding box around every geo point of a field
#[derive(Clone, Debug, Default)]
pub struct GeoBoundsAggregation {
    values: ValuesSource,
    wrap_longitude: Option<bool>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl GeoBoundsAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow the box to overlap the international date line
    pub fn wrap_longitude(mut self, wrap: bool) -> Self {
        self.wrap_longitude = Some(wrap);
        self
    }
}

values_source_setters!(GeoBoundsAggregation);
bucket_setters!(GeoBoundsAggregation);

impl Aggregation for GeoBoundsAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        self.values.apply(&mut body);
        put(&mut body, "wrap_longitude", &self.wrap_longitude);
        render("geo_bounds", body, &self.sub_aggregations, &self.meta)
    }
}
