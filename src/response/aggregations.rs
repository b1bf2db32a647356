//! Typed access to the `aggregations` section of a search response
//!
//! The section is kept as raw JSON keyed by aggregation name. Each accessor
//! decodes one fragment on demand into the requested result type and
//! returns `None` when the name is absent or the fragment has a different
//! shape. A JSON `null` fragment decodes to the default value.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::trace;

use crate::error::{DslError, Result};
use crate::response::buckets::{
    BucketFilters, BucketHistogramItems, BucketKeyItems, BucketKeyedRangeItems, BucketRangeItems,
    BucketSignificantTerms, SingleBucket,
};
use crate::response::metrics::{
    ExtendedStatsMetric, GeoBoundsMetric, MatrixStatsMetric, PercentilesMetric, StatsMetric,
    TopHitsMetric, ValueMetric,
};
use crate::response::pipeline::{
    PipelineBucketMetricValue, PipelineDerivative, PipelinePercentilesMetric,
    PipelineSimpleValue, PipelineStatsMetric,
};

/// Aggregation results by name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aggregations(Map<String, Value>);

impl Aggregations {
    /// Wrap an already parsed `aggregations` object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(DslError::InvalidResponse(format!(
                "aggregations must be an object, got {}",
                other
            ))),
        }
    }

    /// Names of all entries, in response order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw fragment stored under `name`
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Decode the fragment under `name` into any result type
    pub fn get<T>(&self, name: &str) -> Option<T>
    where
        T: DeserializeOwned + Default,
    {
        let raw = self.0.get(name)?;
        if raw.is_null() {
            return Some(T::default());
        }
        match T::deserialize(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                trace!(
                    "Aggregation {} does not decode as {}: {}",
                    name,
                    std::any::type_name::<T>(),
                    err
                );
                None
            }
        }
    }

    pub fn min(&self, name: &str) -> Option<ValueMetric> {
        self.get(name)
    }

    pub fn max(&self, name: &str) -> Option<ValueMetric> {
        self.get(name)
    }

    pub fn sum(&self, name: &str) -> Option<ValueMetric> {
        self.get(name)
    }

    pub fn avg(&self, name: &str) -> Option<ValueMetric> {
        self.get(name)
    }

    pub fn value_count(&self, name: &str) -> Option<ValueMetric> {
        self.get(name)
    }

    pub fn cardinality(&self, name: &str) -> Option<ValueMetric> {
        self.get(name)
    }

    pub fn stats(&self, name: &str) -> Option<StatsMetric> {
        self.get(name)
    }

    pub fn extended_stats(&self, name: &str) -> Option<ExtendedStatsMetric> {
        self.get(name)
    }

    pub fn percentiles(&self, name: &str) -> Option<PercentilesMetric> {
        self.get(name)
    }

    pub fn percentile_ranks(&self, name: &str) -> Option<PercentilesMetric> {
        self.get(name)
    }

    pub fn top_hits(&self, name: &str) -> Option<TopHitsMetric> {
        self.get(name)
    }

    pub fn geo_bounds(&self, name: &str) -> Option<GeoBoundsMetric> {
        self.get(name)
    }

    pub fn matrix_stats(&self, name: &str) -> Option<MatrixStatsMetric> {
        self.get(name)
    }

    pub fn global(&self, name: &str) -> Option<SingleBucket> {
        self.get(name)
    }

    pub fn filter(&self, name: &str) -> Option<SingleBucket> {
        self.get(name)
    }

    pub fn filters(&self, name: &str) -> Option<BucketFilters> {
        self.get(name)
    }

    pub fn missing(&self, name: &str) -> Option<SingleBucket> {
        self.get(name)
    }

    pub fn nested(&self, name: &str) -> Option<SingleBucket> {
        self.get(name)
    }

    pub fn reverse_nested(&self, name: &str) -> Option<SingleBucket> {
        self.get(name)
    }

    pub fn children(&self, name: &str) -> Option<SingleBucket> {
        self.get(name)
    }

    pub fn sampler(&self, name: &str) -> Option<SingleBucket> {
        self.get(name)
    }

    pub fn terms(&self, name: &str) -> Option<BucketKeyItems> {
        self.get(name)
    }

    pub fn significant_terms(&self, name: &str) -> Option<BucketSignificantTerms> {
        self.get(name)
    }

    pub fn range(&self, name: &str) -> Option<BucketRangeItems> {
        self.get(name)
    }

    /// Range results requested with `keyed: true`
    pub fn keyed_range(&self, name: &str) -> Option<BucketKeyedRangeItems> {
        self.get(name)
    }

    pub fn date_range(&self, name: &str) -> Option<BucketRangeItems> {
        self.get(name)
    }

    pub fn ip_range(&self, name: &str) -> Option<BucketRangeItems> {
        self.get(name)
    }

    pub fn histogram(&self, name: &str) -> Option<BucketHistogramItems> {
        self.get(name)
    }

    pub fn date_histogram(&self, name: &str) -> Option<BucketHistogramItems> {
        self.get(name)
    }

    pub fn geo_hash(&self, name: &str) -> Option<BucketKeyItems> {
        self.get(name)
    }

    pub fn geo_distance(&self, name: &str) -> Option<BucketRangeItems> {
        self.get(name)
    }

    pub fn avg_bucket(&self, name: &str) -> Option<PipelineSimpleValue> {
        self.get(name)
    }

    pub fn sum_bucket(&self, name: &str) -> Option<PipelineSimpleValue> {
        self.get(name)
    }

    pub fn stats_bucket(&self, name: &str) -> Option<PipelineStatsMetric> {
        self.get(name)
    }

    pub fn percentiles_bucket(&self, name: &str) -> Option<PipelinePercentilesMetric> {
        self.get(name)
    }

    /// Largest bucket value of a sibling aggregation and the keys it came from
    pub fn max_bucket(&self, name: &str) -> Option<PipelineBucketMetricValue> {
        self.get(name)
    }

    pub fn min_bucket(&self, name: &str) -> Option<PipelineBucketMetricValue> {
        self.get(name)
    }

    pub fn mov_avg(&self, name: &str) -> Option<PipelineSimpleValue> {
        self.get(name)
    }

    pub fn derivative(&self, name: &str) -> Option<PipelineDerivative> {
        self.get(name)
    }

    pub fn cumulative_sum(&self, name: &str) -> Option<PipelineSimpleValue> {
        self.get(name)
    }

    pub fn bucket_script(&self, name: &str) -> Option<PipelineSimpleValue> {
        self.get(name)
    }

    pub fn serial_diff(&self, name: &str) -> Option<PipelineSimpleValue> {
        self.get(name)
    }
}

/// Parse the JSON text of an `aggregations` object
impl FromStr for Aggregations {
    type Err = DslError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for Aggregations {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Lets every decoded result reach its sub-aggregations through the
/// accessors above
macro_rules! sub_aggregations {
    ($($ty:ty),* $(,)?) => {
        $(impl std::ops::Deref for $ty {
            type Target = $crate::response::Aggregations;

            fn deref(&self) -> &Self::Target {
                &self.aggregations
            }
        })*
    };
}

pub(crate) use sub_aggregations;
