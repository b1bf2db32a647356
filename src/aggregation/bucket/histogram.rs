//! Fixed-interval bucketing over numbers and dates

use serde_json::Value;

use crate::aggregation::ast::{
    bucket_setters, order_setters, render, values_source_setters, Aggregation, BucketOrder,
    NamedAggregations, ValuesSource,
};
use crate::models::json::{float, put, put_float, Object};

/// Optional `{min, max}` pair forcing buckets to exist beyond the data
#[derive(Clone, Debug, Default, PartialEq)]
struct ExtendedBounds {
    min: Option<Value>,
    max: Option<Value>,
}

impl ExtendedBounds {
    fn apply(&self, map: &mut Object) {
        if self.min.is_none() && self.max.is_none() {
            return;
        }
        let mut bounds = Object::new();
        put(&mut bounds, "min", &self.min);
        put(&mut bounds, "max", &self.max);
        map.insert("extended_bounds".to_string(), Value::Object(bounds));
    }
}

/// Numeric histogram; `interval` is always emitted
#[derive(Clone, Debug, Default)]
pub struct HistogramAggregation {
    values: ValuesSource,
    interval: f64,
    order: Option<BucketOrder>,
    min_doc_count: Option<i64>,
    extended_bounds: ExtendedBounds,
    keyed: Option<bool>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl HistogramAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    pub fn min_doc_count(mut self, min_doc_count: i64) -> Self {
        self.min_doc_count = Some(min_doc_count);
        self
    }

    pub fn extended_bounds_min(mut self, min: impl Into<Value>) -> Self {
        self.extended_bounds.min = Some(min.into());
        self
    }

    pub fn extended_bounds_max(mut self, max: impl Into<Value>) -> Self {
        self.extended_bounds.max = Some(max.into());
        self
    }

    pub fn keyed(mut self, keyed: bool) -> Self {
        self.keyed = Some(keyed);
        self
    }
}

values_source_setters!(HistogramAggregation);
order_setters!(HistogramAggregation);
bucket_setters!(HistogramAggregation);

impl Aggregation for HistogramAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        self.values.apply(&mut body);
        body.insert("interval".to_string(), float(self.interval));
        if let Some(order) = &self.order {
            body.insert("order".to_string(), order.source());
        }
        put(&mut body, "min_doc_count", &self.min_doc_count);
        self.extended_bounds.apply(&mut body);
        put(&mut body, "keyed", &self.keyed);
        render("histogram", body, &self.sub_aggregations, &self.meta)
    }
}

/// Date histogram with calendar or fixed intervals such as `1M` or `90m`
#[derive(Clone, Debug, Default)]
pub struct DateHistogramAggregation {
    values: ValuesSource,
    interval: String,
    order: Option<BucketOrder>,
    min_doc_count: Option<i64>,
    extended_bounds: ExtendedBounds,
    time_zone: Option<String>,
    pre_zone: Option<String>,
    post_zone: Option<String>,
    pre_zone_adjust_large_interval: Option<bool>,
    pre_offset: Option<String>,
    post_offset: Option<String>,
    factor: Option<f64>,
    keyed: Option<bool>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl DateHistogramAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = interval.into();
        self
    }

    pub fn min_doc_count(mut self, min_doc_count: i64) -> Self {
        self.min_doc_count = Some(min_doc_count);
        self
    }

    pub fn extended_bounds_min(mut self, min: impl Into<Value>) -> Self {
        self.extended_bounds.min = Some(min.into());
        self
    }

    pub fn extended_bounds_max(mut self, max: impl Into<Value>) -> Self {
        self.extended_bounds.max = Some(max.into());
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    pub fn pre_zone(mut self, zone: impl Into<String>) -> Self {
        self.pre_zone = Some(zone.into());
        self
    }

    pub fn post_zone(mut self, zone: impl Into<String>) -> Self {
        self.post_zone = Some(zone.into());
        self
    }

    pub fn pre_zone_adjust_large_interval(mut self, adjust: bool) -> Self {
        self.pre_zone_adjust_large_interval = Some(adjust);
        self
    }

    pub fn pre_offset(mut self, offset: impl Into<String>) -> Self {
        self.pre_offset = Some(offset.into());
        self
    }

    pub fn post_offset(mut self, offset: impl Into<String>) -> Self {
        self.post_offset = Some(offset.into());
        self
    }

    pub fn factor(mut self, factor: f64) -> Self {
        self.factor = Some(factor);
        self
    }

    pub fn keyed(mut self, keyed: bool) -> Self {
        self.keyed = Some(keyed);
        self
    }
}

values_source_setters!(DateHistogramAggregation);
order_setters!(DateHistogramAggregation);
bucket_setters!(DateHistogramAggregation);

impl Aggregation for DateHistogramAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        self.values.apply(&mut body);
        body.insert("interval".to_string(), Value::from(self.interval.clone()));
        if let Some(order) = &self.order {
            body.insert("order".to_string(), order.source());
        }
        put(&mut body, "min_doc_count", &self.min_doc_count);
        self.extended_bounds.apply(&mut body);
        put(&mut body, "time_zone", &self.time_zone);
        put(&mut body, "pre_zone", &self.pre_zone);
        put(&mut body, "post_zone", &self.post_zone);
        put(
            &mut body,
            "pre_zone_adjust_large_interval",
            &self.pre_zone_adjust_large_interval,
        );
        put(&mut body, "pre_offset", &self.pre_offset);
        put(&mut body, "post_offset", &self.post_offset);
        put_float(&mut body, "factor", self.factor);
        put(&mut body, "keyed", &self.keyed);
        render("date_histogram", body, &self.sub_aggregations, &self.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_histogram_aggregation() {
        let agg = HistogramAggregation::new()
            .field("price")
            .interval(50.0)
            .min_doc_count(0)
            .extended_bounds_min(0)
            .order_by_key(true);
        assert_eq!(
            agg.source(),
            json!({"histogram": {
                "field": "price",
                "interval": 50,
                "order": {"_key": "asc"},
                "min_doc_count": 0,
                "extended_bounds": {"min": 0}
            }})
        );
    }

    #[test]
    fn test_histogram_always_emits_interval() {
        assert_eq!(
            HistogramAggregation::new().field("price").source(),
            json!({"histogram": {"field": "price", "interval": 0}})
        );
    }

    #[test]
    fn test_date_histogram_aggregation() {
        let agg = DateHistogramAggregation::new()
            .field("date")
            .interval("1M")
            .format("yyyy-MM-dd")
            .time_zone("+01:00")
            .extended_bounds_min("2014-01-01")
            .extended_bounds_max("2014-12-31");
        assert_eq!(
            agg.source(),
            json!({"date_histogram": {
                "field": "date",
                "format": "yyyy-MM-dd",
                "interval": "1M",
                "extended_bounds": {"min": "2014-01-01", "max": "2014-12-31"},
                "time_zone": "+01:00"
            }})
        );
    }
}
