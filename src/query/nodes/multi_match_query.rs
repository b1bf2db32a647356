use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;
use crate::query::types::{MatchOperator, MinimumShouldMatch, MultiMatchType, ZeroTermsQuery};

/// Match query over several fields
///
/// Fields given with a boost render as `"field^boost"`.
#[derive(Clone, Debug)]
pub struct MultiMatchQuery {
    text: Value,
    fields: Vec<String>,
    match_type: Option<MultiMatchType>,
    operator: Option<MatchOperator>,
    analyzer: Option<String>,
    boost: Option<f64>,
    slop: Option<i64>,
    fuzziness: Option<Value>,
    prefix_length: Option<i64>,
    max_expansions: Option<i64>,
    minimum_should_match: Option<MinimumShouldMatch>,
    rewrite: Option<String>,
    fuzzy_rewrite: Option<String>,
    use_dis_max: Option<bool>,
    tie_breaker: Option<f64>,
    lenient: Option<bool>,
    cutoff_frequency: Option<f64>,
    zero_terms_query: Option<ZeroTermsQuery>,
    query_name: Option<String>,
}

impl MultiMatchQuery {
    pub fn new<I, S>(text: impl Into<Value>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            match_type: None,
            operator: None,
            analyzer: None,
            boost: None,
            slop: None,
            fuzziness: None,
            prefix_length: None,
            max_expansions: None,
            minimum_should_match: None,
            rewrite: None,
            fuzzy_rewrite: None,
            use_dis_max: None,
            tie_breaker: None,
            lenient: None,
            cutoff_frequency: None,
            zero_terms_query: None,
            query_name: None,
        }
    }

    /// Append a field
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Append a field with a per-field boost
    pub fn field_with_boost(mut self, field: impl Into<String>, boost: f64) -> Self {
        self.fields.push(format!("{}^{}", field.into(), boost));
        self
    }

    pub fn match_type(mut self, match_type: MultiMatchType) -> Self {
        self.match_type = Some(match_type);
        self
    }

    pub fn operator(mut self, operator: MatchOperator) -> Self {
        self.operator = Some(operator);
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

    pub fn slop(mut self, slop: i64) -> Self {
        self.slop = Some(slop);
        self
    }

    pub fn fuzziness(mut self, fuzziness: impl Into<Value>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    pub fn prefix_length(mut self, prefix_length: i64) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    pub fn max_expansions(mut self, max_expansions: i64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(msm.into());
        self
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn fuzzy_rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.fuzzy_rewrite = Some(rewrite.into());
        self
    }

    pub fn use_dis_max(mut self, use_dis_max: bool) -> Self {
        self.use_dis_max = Some(use_dis_max);
        self
    }

    pub fn tie_breaker(mut self, tie_breaker: f64) -> Self {
        self.tie_breaker = Some(tie_breaker);
        self
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
        self
    }

    pub fn cutoff_frequency(mut self, cutoff: f64) -> Self {
        self.cutoff_frequency = Some(cutoff);
        self
    }

    pub fn zero_terms_query(mut self, zero_terms_query: ZeroTermsQuery) -> Self {
        self.zero_terms_query = Some(zero_terms_query);
        self
    }

    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }
}

impl Query for MultiMatchQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("query".to_string(), self.text.clone());
        body.insert("fields".to_string(), Value::from(self.fields.clone()));
        put(&mut body, "type", &self.match_type.map(|t| t.as_str()));
        put(&mut body, "operator", &self.operator.map(|o| o.as_str()));
        put(&mut body, "analyzer", &self.analyzer);
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "slop", &self.slop);
        put(&mut body, "fuzziness", &self.fuzziness);
        put(&mut body, "prefix_length", &self.prefix_length);
        put(&mut body, "max_expansions", &self.max_expansions);
        put(&mut body, "minimum_should_match", &self.minimum_should_match);
        put(&mut body, "rewrite", &self.rewrite);
        put(&mut body, "fuzzy_rewrite", &self.fuzzy_rewrite);
        put(&mut body, "use_dis_max", &self.use_dis_max);
        put_float(&mut body, "tie_breaker", self.tie_breaker);
        put(&mut body, "lenient", &self.lenient);
        put_float(&mut body, "cutoff_frequency", self.cutoff_frequency);
        put(
            &mut body,
            "zero_terms_query",
            &self.zero_terms_query.map(|z| z.as_str()),
        );
        put(&mut body, "_name", &self.query_name);
        single("multi_match", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_multi_match_query() {
        let query = MultiMatchQuery::new("this is a test", ["subject", "message"]);
        assert_eq!(
            query.source(),
            json!({"multi_match": {
                "query": "this is a test",
                "fields": ["subject", "message"]
            }})
        );
    }

    #[test]
    fn test_multi_match_with_boosted_fields() {
        let query = MultiMatchQuery::new("quick brown fox", Vec::<String>::new())
            .field_with_boost("subject", 3.0)
            .field("message")
            .match_type(MultiMatchType::CrossFields)
            .tie_breaker(0.3)
            .operator(MatchOperator::And);
        assert_eq!(
            query.source(),
            json!({"multi_match": {
                "query": "quick brown fox",
                "fields": ["subject^3", "message"],
                "type": "cross_fields",
                "operator": "and",
                "tie_breaker": 0.3
            }})
        );
    }
}
