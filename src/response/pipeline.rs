//! Decoded results of pipeline aggregations
//!
//! Pipeline aggregations compute over the output of sibling or parent
//! aggregations, so most of them report a single value. `max_bucket` and
//! `min_bucket` also name the bucket keys the value came from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::response::aggregations::{sub_aggregations, Aggregations};

/// Result of avg_bucket, sum_bucket, moving_avg, cumulative_sum,
/// bucket_script and serial_diff
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSimpleValue {
    pub value: Option<f64>,
    pub value_as_string: Option<String>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Result of max_bucket and min_bucket
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineBucketMetricValue {
    pub keys: Vec<Value>,
    pub value: Option<f64>,
    pub value_as_string: Option<String>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Result of a derivative, with the value normalized to the requested unit
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineDerivative {
    pub value: Option<f64>,
    pub value_as_string: Option<String>,
    pub normalized_value: Option<f64>,
    pub normalized_value_as_string: Option<String>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Result of stats_bucket
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineStatsMetric {
    pub count: i64,
    pub count_as_string: Option<String>,
    pub min: Option<f64>,
    pub min_as_string: Option<String>,
    pub max: Option<f64>,
    pub max_as_string: Option<String>,
    pub avg: Option<f64>,
    pub avg_as_string: Option<String>,
    pub sum: Option<f64>,
    pub sum_as_string: Option<String>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Result of percentiles_bucket, keyed like `"99.0"`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelinePercentilesMetric {
    pub values: BTreeMap<String, f64>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

impl PipelinePercentilesMetric {
    pub fn percentile(&self, percent: f64) -> Option<f64> {
        self.values.get(&format!("{percent:?}")).copied()
    }
}

sub_aggregations!(
    PipelineSimpleValue,
    PipelineBucketMetricValue,
    PipelineDerivative,
    PipelineStatsMetric,
    PipelinePercentilesMetric,
);
