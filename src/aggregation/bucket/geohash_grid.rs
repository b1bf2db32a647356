use serde_json::Value;

use crate::aggregation::ast::{bucket_setters, render, Aggregation, NamedAggregations};
use crate::models::json::{put, Object};

/// Buckets by geohash cell of a geo point field
#[derive(Clone, Debug, Default)]
pub struct GeoHashGridAggregation {
    field: Option<String>,
    precision: Option<i64>,
    size: Option<i64>,
    shard_size: Option<i64>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl GeoHashGridAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Geohash length, 1 to 12
    pub fn precision(mut self, precision: i64) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn shard_size(mut self, shard_size: i64) -> Self {
        self.shard_size = Some(shard_size);
        self
    }
}

bucket_setters!(GeoHashGridAggregation);

impl Aggregation for GeoHashGridAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put(&mut body, "field", &self.field);
        put(&mut body, "precision", &self.precision);
        put(&mut body, "size", &self.size);
        put(&mut body, "shard_size", &self.shard_size);
        render("geohash_grid", body, &self.sub_aggregations, &self.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geohash_grid_aggregation() {
        let agg = GeoHashGridAggregation::new()
            .field("location")
            .precision(5)
            .size(10);
        assert_eq!(
            agg.source(),
            json!({"geohash_grid": {"field": "location", "precision": 5, "size": 10}})
        );
    }
}
