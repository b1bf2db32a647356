//! Decoded bucket aggregation results

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use crate::response::aggregations::{sub_aggregations, Aggregations};

/// Result of global, filter, missing, nested, reverse_nested and children
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleBucket {
    pub doc_count: i64,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// One bucket of a range-like result
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketRangeItem {
    pub key: Option<String>,
    pub doc_count: i64,
    pub from: Option<f64>,
    pub from_as_string: Option<String>,
    pub to: Option<f64>,
    pub to_as_string: Option<String>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Result of range, date_range, ip_range and geo_distance
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketRangeItems {
    pub doc_count_error_upper_bound: i64,
    pub sum_other_doc_count: i64,
    pub buckets: Vec<BucketRangeItem>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Range result whose buckets come back keyed by name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketKeyedRangeItems {
    pub doc_count_error_upper_bound: i64,
    pub sum_other_doc_count: i64,
    pub buckets: BTreeMap<String, BucketRangeItem>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// One bucket of a terms, geohash_grid or filters result
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketKeyItem {
    pub key: Value,
    pub key_as_string: Option<String>,
    pub doc_count: i64,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

impl BucketKeyItem {
    /// The key as a JSON number, without a detour through `f64`
    ///
    /// Long keys such as ids above 2^53 keep every digit.
    pub fn key_number(&self) -> Option<&Number> {
        match &self.key {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The key when the engine returned it as a string
    pub fn key_str(&self) -> Option<&str> {
        self.key.as_str()
    }
}

/// Result of terms and geohash_grid
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketKeyItems {
    pub doc_count_error_upper_bound: i64,
    pub sum_other_doc_count: i64,
    pub buckets: Vec<BucketKeyItem>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketSignificantTerm {
    pub key: String,
    pub doc_count: i64,
    pub bg_count: i64,
    pub score: f64,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketSignificantTerms {
    pub doc_count: i64,
    pub buckets: Vec<BucketSignificantTerm>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Buckets of a filters result: a list for anonymous filters, a map for
/// named ones
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FiltersBuckets {
    List(Vec<BucketKeyItem>),
    Named(BTreeMap<String, BucketKeyItem>),
}

impl Default for FiltersBuckets {
    fn default() -> Self {
        FiltersBuckets::List(Vec::new())
    }
}

/// Result of a filters aggregation
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketFilters {
    pub buckets: FiltersBuckets,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

impl BucketFilters {
    /// Anonymous buckets in request order; empty for named filters
    pub fn buckets(&self) -> &[BucketKeyItem] {
        match &self.buckets {
            FiltersBuckets::List(buckets) => buckets,
            FiltersBuckets::Named(_) => &[],
        }
    }

    /// Named buckets; `None` for anonymous filters
    pub fn named_buckets(&self) -> Option<&BTreeMap<String, BucketKeyItem>> {
        match &self.buckets {
            FiltersBuckets::List(_) => None,
            FiltersBuckets::Named(buckets) => Some(buckets),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketHistogramItem {
    pub key: f64,
    pub key_as_string: Option<String>,
    pub doc_count: i64,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

/// Result of histogram and date_histogram
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketHistogramItems {
    pub buckets: Vec<BucketHistogramItem>,
    pub meta: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub aggregations: Aggregations,
}

sub_aggregations!(
    SingleBucket,
    BucketRangeItem,
    BucketRangeItems,
    BucketKeyedRangeItems,
    BucketKeyItem,
    BucketKeyItems,
    BucketSignificantTerm,
    BucketSignificantTerms,
    BucketFilters,
    BucketHistogramItem,
    BucketHistogramItems,
);
