use serde_json::Value;

use crate::aggregation::ast::{
    bucket_setters, render, values_source_setters, Aggregation, NamedAggregations, ValuesSource,
};
use crate::models::json::{put, Object};

/// Approximate count of distinct values
#[derive(Clone, Debug, Default)]
pub struct CardinalityAggregation {
    values: ValuesSource,
    precision_threshold: Option<i64>,
    rehash: Option<bool>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl CardinalityAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts below this threshold are expected to be close to exact
    pub fn precision_threshold(mut self, threshold: i64) -> Self {
        self.precision_threshold = Some(threshold);
        self
    }

    pub fn rehash(mut self, rehash: bool) -> Self {
        self.rehash = Some(rehash);
        self
    }
}

values_source_setters!(CardinalityAggregation);
bucket_setters!(CardinalityAggregation);

impl Aggregation for CardinalityAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        self.values.apply(&mut body);
        put(&mut body, "precision_threshold", &self.precision_threshold);
        put(&mut body, "rehash", &self.rehash);
        render("cardinality", body, &self.sub_aggregations, &self.meta)
    }
}
