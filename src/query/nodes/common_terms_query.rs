use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;
use crate::query::types::{MatchOperator, MinimumShouldMatch};

/// Query splitting terms into low- and high-frequency groups
///
/// A plain `minimum_should_match` and the per-group variants are exclusive:
/// when either group value is set the key renders as
/// `{"low_freq": .., "high_freq": ..}`.
#[derive(Clone, Debug)]
pub struct CommonTermsQuery {
    name: String,
    text: Value,
    cutoff_frequency: Option<f64>,
    high_freq_operator: Option<MatchOperator>,
    low_freq_operator: Option<MatchOperator>,
    analyzer: Option<String>,
    boost: Option<f64>,
    disable_coord: Option<bool>,
    minimum_should_match: Option<MinimumShouldMatch>,
    low_freq_minimum_should_match: Option<MinimumShouldMatch>,
    high_freq_minimum_should_match: Option<MinimumShouldMatch>,
    query_name: Option<String>,
}

impl CommonTermsQuery {
    pub fn new(name: impl Into<String>, text: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            cutoff_frequency: None,
            high_freq_operator: None,
            low_freq_operator: None,
            analyzer: None,
            boost: None,
            disable_coord: None,
            minimum_should_match: None,
            low_freq_minimum_should_match: None,
            high_freq_minimum_should_match: None,
            query_name: None,
        }
    }

    pub fn cutoff_frequency(mut self, cutoff: f64) -> Self {
        self.cutoff_frequency = Some(cutoff);
        self
    }

    pub fn high_freq_operator(mut self, operator: MatchOperator) -> Self {
        self.high_freq_operator = Some(operator);
        self
    }

    pub fn low_freq_operator(mut self, operator: MatchOperator) -> Self {
        self.low_freq_operator = Some(operator);
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn disable_coord(mut self, disable: bool) -> Self {
        self.disable_coord = Some(disable);
        self
    }

    pub fn minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(msm.into());
        self
    }

    pub fn low_freq_minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
        self.low_freq_minimum_should_match = Some(msm.into());
        self
    }

    pub fn high_freq_minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
        self.high_freq_minimum_should_match = Some(msm.into());
        self
    }

    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }
}

impl Query for CommonTermsQuery {
    fn source(&self) -> Value {
        let mut params = Object::new();
        params.insert("query".to_string(), self.text.clone());
        put_float(&mut params, "cutoff_frequency", self.cutoff_frequency);
        put(
            &mut params,
            "high_freq_operator",
            &self.high_freq_operator.map(|o| o.as_str()),
        );
        put(
            &mut params,
            "low_freq_operator",
            &self.low_freq_operator.map(|o| o.as_str()),
        );
        put(&mut params, "analyzer", &self.analyzer);
        put_float(&mut params, "boost", self.boost);
        put(&mut params, "disable_coord", &self.disable_coord);
        if self.low_freq_minimum_should_match.is_some()
            || self.high_freq_minimum_should_match.is_some()
        {
            let mut msm = Object::new();
            put(&mut msm, "low_freq", &self.low_freq_minimum_should_match);
            put(&mut msm, "high_freq", &self.high_freq_minimum_should_match);
            params.insert("minimum_should_match".to_string(), Value::Object(msm));
        } else {
            put(&mut params, "minimum_should_match", &self.minimum_should_match);
        }
        put(&mut params, "_name", &self.query_name);
        single("common", single(self.name.clone(), Value::Object(params)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_common_terms_query() {
        let query = CommonTermsQuery::new("body", "this is bonsai cool").cutoff_frequency(0.001);
        assert_eq!(
            query.source(),
            json!({"common": {"body": {
                "query": "this is bonsai cool",
                "cutoff_frequency": 0.001
            }}})
        );
    }

    #[test]
    fn test_common_terms_query_group_minimum_should_match() {
        let query = CommonTermsQuery::new("body", "nelly the elephant not as a cartoon")
            .cutoff_frequency(0.001)
            .low_freq_operator(MatchOperator::And)
            .low_freq_minimum_should_match(2)
            .high_freq_minimum_should_match(3);
        assert_eq!(
            query.source(),
            json!({"common": {"body": {
                "query": "nelly the elephant not as a cartoon",
                "cutoff_frequency": 0.001,
                "low_freq_operator": "and",
                "minimum_should_match": {"low_freq": 2, "high_freq": 3}
            }}})
        );
    }
}
