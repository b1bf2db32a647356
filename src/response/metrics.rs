//! Decoded metric aggregation results

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::models::GeoPoint;
use crate::response::aggregations::{sub_aggregations, Aggregations};
use crate::response::hits::SearchHits;

/// Result of min, max, sum, avg, value_count and cardinality
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueMetric {
    pub value: Option<f64>,
    pub value_as_string: Option<String>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Result of a stats aggregation
///
/// `min`, `max`, `avg` and `sum` stay `None` when no document matched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsMetric {
    pub count: i64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
    pub sum: Option<f64>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedStatsMetric {
    pub count: i64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
    pub sum: Option<f64>,
    pub sum_of_squares: Option<f64>,
    pub variance: Option<f64>,
    pub std_deviation: Option<f64>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Result of percentiles and percentile_ranks, keyed like `"99.0"`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentilesMetric {
    pub values: BTreeMap<String, f64>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

impl PercentilesMetric {
    /// Value for a requested percent, e.g. `percentile(99.0)`
    pub fn percentile(&self, percent: f64) -> Option<f64> {
        self.values.get(&format!("{percent:?}")).copied()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopHitsMetric {
    pub hits: Option<SearchHits>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub top_left: GeoPoint,
    pub bottom_right: GeoPoint,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoBoundsMetric {
    pub bounds: Option<GeoBounds>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Running statistics of one field of a matrix_stats aggregation
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixStatsField {
    pub name: String,
    pub count: i64,
    pub mean: Option<f64>,
    pub variance: Option<f64>,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub covariance: BTreeMap<String, f64>,
    pub correlation: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixStatsMetric {
    pub doc_count: i64,
    pub fields: Vec<MatrixStatsField>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

impl MatrixStatsMetric {
    /// Statistics of the field called `name`
    pub fn field(&self, name: &str) -> Option<&MatrixStatsField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

sub_aggregations!(
    ValueMetric,
    StatsMetric,
    ExtendedStatsMetric,
    PercentilesMetric,
    TopHitsMetric,
    GeoBoundsMetric,
    MatrixStatsMetric,
);
