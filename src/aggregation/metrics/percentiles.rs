//! Percentile metrics

use serde_json::Value;

use crate::aggregation::ast::{
    bucket_setters, render, values_source_setters, Aggregation, NamedAggregations, ValuesSource,
};
use crate::models::json::{float, put, put_float, Object};

fn floats(values: &[f64]) -> Value {
    Value::Array(values.iter().map(|v| float(*v)).collect())
}

/// Values at the requested percents
#[derive(Clone, Debug, Default)]
pub struct PercentilesAggregation {
    values: ValuesSource,
    percents: Vec<f64>,
    compression: Option<f64>,
    estimator: Option<String>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl PercentilesAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append target percents
    pub fn percentiles(mut self, percents: impl IntoIterator<Item = f64>) -> Self {
        self.percents.extend(percents);
        self
    }

    pub fn compression(mut self, compression: f64) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn estimator(mut self, estimator: impl Into<String>) -> Self {
        self.estimator = Some(estimator.into());
        self
    }
}

values_source_setters!(PercentilesAggregation);
bucket_setters!(PercentilesAggregation);

impl Aggregation for PercentilesAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        self.values.apply(&mut body);
        if !self.percents.is_empty() {
            body.insert("percents".to_string(), floats(&self.percents));
        }
        put_float(&mut body, "compression", self.compression);
        put(&mut body, "estimator", &self.estimator);
        render("percentiles", body, &self.sub_aggregations, &self.meta)
    }
}

/// Percentile rank of each of the given values
#[derive(Clone, Debug, Default)]
pub struct PercentileRanksAggregation {
    values: ValuesSource,
    targets: Vec<f64>,
    compression: Option<f64>,
    estimator: Option<String>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl PercentileRanksAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append values whose ranks are computed
    pub fn values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.targets.extend(values);
        self
    }

    pub fn compression(mut self, compression: f64) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn estimator(mut self, estimator: impl Into<String>) -> Self {
        self.estimator = Some(estimator.into());
        self
    }
}

values_source_setters!(PercentileRanksAggregation);
bucket_setters!(PercentileRanksAggregation);

impl Aggregation for PercentileRanksAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        self.values.apply(&mut body);
        if !self.targets.is_empty() {
            body.insert("values".to_string(), floats(&self.targets));
        }
        put_float(&mut body, "compression", self.compression);
        put(&mut body, "estimator", &self.estimator);
        render("percentile_ranks", body, &self.sub_aggregations, &self.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_percentiles_aggregation() {
        let agg = PercentilesAggregation::new()
            .field("load_time")
            .percentiles([0.2, 0.5, 0.9])
            .compression(200.0);
        assert_eq!(
            agg.source(),
            json!({"percentiles": {
                "field": "load_time",
                "percents": [0.2, 0.5, 0.9],
                "compression": 200
            }})
        );
    }

    #[test]
    fn test_percentile_ranks_aggregation() {
        let agg = PercentileRanksAggregation::new()
            .field("load_time")
            .values([15.0, 30.0])
            .format("0.0");
        assert_eq!(
            agg.source(),
            json!({"percentile_ranks": {
                "field": "load_time",
                "format": "0.0",
                "values": [15, 30]
            }})
        );
    }
}
