//! Single-field metric aggregations
//!
//! These differ only in their type key: each reads a field or script and
//! renders the values source as its body.

use serde_json::Value;

use crate::aggregation::ast::{
    bucket_setters, render, values_source_setters, Aggregation, NamedAggregations, ValuesSource,
};
use crate::models::json::Object;

macro_rules! simple_metric {
    ($(#[$doc:meta])* $name:ident, $kind:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            values: ValuesSource,
            sub_aggregations: NamedAggregations,
            meta: Object,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        values_source_setters!($name);
        bucket_setters!($name);

        impl Aggregation for $name {
            fn source(&self) -> Value {
                let mut body = Object::new();
                self.values.apply(&mut body);
                render($kind, body, &self.sub_aggregations, &self.meta)
            }
        }
    };
}

simple_metric!(
    /// Smallest value of a field
    MinAggregation,
    "min"
);
simple_metric!(
    /// Largest value of a field
    MaxAggregation,
    "max"
);
simple_metric!(
    /// Sum of a field
    SumAggregation,
    "sum"
);
simple_metric!(
    /// Average of a field
    AvgAggregation,
    "avg"
);
simple_metric!(
    /// Count, min, max, avg and sum in one pass
    StatsAggregation,
    "stats"
);
simple_metric!(
    /// Stats plus sum of squares, variance and standard deviation
    ExtendedStatsAggregation,
    "extended_stats"
);
simple_metric!(
    /// Number of values extracted
    ValueCountAggregation,
    "value_count"
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_min_aggregation() {
        let agg = MinAggregation::new().field("price");
        assert_eq!(agg.source(), json!({"min": {"field": "price"}}));
    }

    #[test]
    fn test_avg_aggregation_with_script() {
        let agg = AvgAggregation::new()
            .field("grade")
            .script("_value * correction")
            .param("correction", 1.2)
            .format("0.00");
        assert_eq!(
            agg.source(),
            json!({"avg": {
                "field": "grade",
                "script": "_value * correction",
                "format": "0.00",
                "params": {"correction": 1.2}
            }})
        );
    }

    #[test]
    fn test_stats_family_type_keys() {
        assert_eq!(
            StatsAggregation::new().field("grade").source(),
            json!({"stats": {"field": "grade"}})
        );
        assert_eq!(
            ExtendedStatsAggregation::new().field("grade").source(),
            json!({"extended_stats": {"field": "grade"}})
        );
        assert_eq!(
            ValueCountAggregation::new().field("grade").source(),
            json!({"value_count": {"field": "grade"}})
        );
        assert_eq!(
            SumAggregation::new().script_file("my_script").lang("groovy").source(),
            json!({"sum": {"script_file": "my_script", "lang": "groovy"}})
        );
        assert_eq!(
            MaxAggregation::new().field("price").meta("unit", "usd").source(),
            json!({"max": {"field": "price"}, "meta": {"unit": "usd"}})
        );
    }
}
