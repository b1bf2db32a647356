//! Match query - analyzed full-text search on a single field

use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;
use crate::query::types::{MatchOperator, MatchType, MinimumShouldMatch, ZeroTermsQuery};

/// Full-text match query
///
/// The `phrase` and `phrase_prefix` constructors preset the match type.
///
/// # Example
///
/// ```json
/// { "match": { "message": { "query": "this is a test", "operator": "and" } } }
/// ```
#[derive(Clone, Debug)]
pub struct MatchQuery {
    name: String,
    text: Value,
    match_type: Option<MatchType>,
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
    lenient: Option<bool>,
    fuzzy_transpositions: Option<bool>,
    zero_terms_query: Option<ZeroTermsQuery>,
    cutoff_frequency: Option<f64>,
    query_name: Option<String>,
}

impl MatchQuery {
    /// Create a boolean match query
    pub fn new(name: impl Into<String>, text: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
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
            lenient: None,
            fuzzy_transpositions: None,
            zero_terms_query: None,
            cutoff_frequency: None,
            query_name: None,
        }
    }

    /// Create a phrase match query
    pub fn phrase(name: impl Into<String>, text: impl Into<Value>) -> Self {
        Self::new(name, text).match_type(MatchType::Phrase)
    }

    /// Create a phrase-prefix match query
    pub fn phrase_prefix(name: impl Into<String>, text: impl Into<Value>) -> Self {
        Self::new(name, text).match_type(MatchType::PhrasePrefix)
    }

    pub fn match_type(mut self, match_type: MatchType) -> Self {
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

    /// Edit distance, a number or `"AUTO"`
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

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
        self
    }

    pub fn fuzzy_transpositions(mut self, transpositions: bool) -> Self {
        self.fuzzy_transpositions = Some(transpositions);
        self
    }

    pub fn zero_terms_query(mut self, zero_terms_query: ZeroTermsQuery) -> Self {
        self.zero_terms_query = Some(zero_terms_query);
        self
    }

    pub fn cutoff_frequency(mut self, cutoff: f64) -> Self {
        self.cutoff_frequency = Some(cutoff);
        self
    }

    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }
}

impl Query for MatchQuery {
    fn source(&self) -> Value {
        let mut params = Object::new();
        params.insert("query".to_string(), self.text.clone());
        put(&mut params, "type", &self.match_type.map(|t| t.as_str()));
        put(&mut params, "operator", &self.operator.map(|o| o.as_str()));
        put(&mut params, "analyzer", &self.analyzer);
        put_float(&mut params, "boost", self.boost);
        put(&mut params, "slop", &self.slop);
        put(&mut params, "fuzziness", &self.fuzziness);
        put(&mut params, "prefix_length", &self.prefix_length);
        put(&mut params, "max_expansions", &self.max_expansions);
        put(&mut params, "minimum_should_match", &self.minimum_should_match);
        put(&mut params, "rewrite", &self.rewrite);
        put(&mut params, "fuzzy_rewrite", &self.fuzzy_rewrite);
        put(&mut params, "lenient", &self.lenient);
        put(&mut params, "fuzzy_transpositions", &self.fuzzy_transpositions);
        put(
            &mut params,
            "zero_terms_query",
            &self.zero_terms_query.map(|z| z.as_str()),
        );
        put_float(&mut params, "cutoff_frequency", self.cutoff_frequency);
        put(&mut params, "_name", &self.query_name);
        single("match", single(self.name.clone(), Value::Object(params)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_query() {
        let query = MatchQuery::new("message", "this is a test");
        assert_eq!(
            query.source(),
            json!({"match": {"message": {"query": "this is a test"}}})
        );
    }

    #[test]
    fn test_match_phrase_query() {
        let query = MatchQuery::phrase("message", "this is a test")
            .analyzer("my_analyzer")
            .boost(3.0);
        assert_eq!(
            query.source(),
            json!({"match": {"message": {
                "query": "this is a test",
                "type": "phrase",
                "analyzer": "my_analyzer",
                "boost": 3
            }}})
        );
    }

    #[test]
    fn test_match_phrase_prefix_query() {
        let query = MatchQuery::phrase_prefix("message", "this is a test").max_expansions(10);
        assert_eq!(
            query.source(),
            json!({"match": {"message": {
                "query": "this is a test",
                "type": "phrase_prefix",
                "max_expansions": 10
            }}})
        );
    }

    #[test]
    fn test_match_query_fuzzy_options() {
        let query = MatchQuery::new("message", "quick brown")
            .operator(MatchOperator::And)
            .fuzziness("AUTO")
            .prefix_length(2)
            .zero_terms_query(ZeroTermsQuery::All)
            .cutoff_frequency(0.001);
        assert_eq!(
            query.source(),
            json!({"match": {"message": {
                "query": "quick brown",
                "operator": "and",
                "fuzziness": "AUTO",
                "prefix_length": 2,
                "zero_terms_query": "all",
                "cutoff_frequency": 0.001
            }}})
        );
    }
}
