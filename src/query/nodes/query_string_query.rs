//! Query-string queries: the Lucene syntax parser and its simple variant

use serde_json::Value;

use crate::models::json::{put, put_float, put_strings, single, Object};
use crate::query::ast::Query;
use crate::query::types::{MatchOperator, MinimumShouldMatch};

/// Query parsed with the Lucene query syntax
#[derive(Clone, Debug, Default)]
pub struct QueryStringQuery {
    query: String,
    default_field: Option<String>,
    fields: Vec<String>,
    default_operator: Option<MatchOperator>,
    analyzer: Option<String>,
    quote_analyzer: Option<String>,
    quote_field_suffix: Option<String>,
    auto_generate_phrase_queries: Option<bool>,
    allow_leading_wildcard: Option<bool>,
    lowercase_expanded_terms: Option<bool>,
    enable_position_increments: Option<bool>,
    analyze_wildcard: Option<bool>,
    fuzziness: Option<Value>,
    fuzzy_prefix_length: Option<i64>,
    fuzzy_max_expansions: Option<i64>,
    fuzzy_rewrite: Option<String>,
    phrase_slop: Option<i64>,
    boost: Option<f64>,
    use_dis_max: Option<bool>,
    tie_breaker: Option<f64>,
    rewrite: Option<String>,
    minimum_should_match: Option<MinimumShouldMatch>,
    lenient: Option<bool>,
    locale: Option<String>,
    time_zone: Option<String>,
    query_name: Option<String>,
}

impl QueryStringQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn default_field(mut self, field: impl Into<String>) -> Self {
        self.default_field = Some(field.into());
        self
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

    pub fn default_operator(mut self, operator: MatchOperator) -> Self {
        self.default_operator = Some(operator);
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn quote_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.quote_analyzer = Some(analyzer.into());
        self
    }

    pub fn quote_field_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.quote_field_suffix = Some(suffix.into());
        self
    }

    pub fn auto_generate_phrase_queries(mut self, enabled: bool) -> Self {
        self.auto_generate_phrase_queries = Some(enabled);
        self
    }

    pub fn allow_leading_wildcard(mut self, allow: bool) -> Self {
        self.allow_leading_wildcard = Some(allow);
        self
    }

    pub fn lowercase_expanded_terms(mut self, lowercase: bool) -> Self {
        self.lowercase_expanded_terms = Some(lowercase);
        self
    }

    pub fn enable_position_increments(mut self, enabled: bool) -> Self {
        self.enable_position_increments = Some(enabled);
        self
    }

    pub fn analyze_wildcard(mut self, analyze: bool) -> Self {
        self.analyze_wildcard = Some(analyze);
        self
    }

    pub fn fuzziness(mut self, fuzziness: impl Into<Value>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    pub fn fuzzy_prefix_length(mut self, length: i64) -> Self {
        self.fuzzy_prefix_length = Some(length);
        self
    }

    pub fn fuzzy_max_expansions(mut self, max: i64) -> Self {
        self.fuzzy_max_expansions = Some(max);
        self
    }

    pub fn fuzzy_rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.fuzzy_rewrite = Some(rewrite.into());
        self
    }

    pub fn phrase_slop(mut self, slop: i64) -> Self {
        self.phrase_slop = Some(slop);
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
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

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(msm.into());
        self
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }
}

impl Query for QueryStringQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("query".to_string(), Value::from(self.query.clone()));
        put(&mut body, "default_field", &self.default_field);
        put_strings(&mut body, "fields", &self.fields);
        put(
            &mut body,
            "default_operator",
            &self.default_operator.map(|o| o.as_str()),
        );
        put(&mut body, "analyzer", &self.analyzer);
        put(&mut body, "quote_analyzer", &self.quote_analyzer);
        put(&mut body, "quote_field_suffix", &self.quote_field_suffix);
        put(&mut body, "auto_generate_phrase_queries", &self.auto_generate_phrase_queries);
        put(&mut body, "allow_leading_wildcard", &self.allow_leading_wildcard);
        put(&mut body, "lowercase_expanded_terms", &self.lowercase_expanded_terms);
        put(&mut body, "enable_position_increments", &self.enable_position_increments);
        put(&mut body, "analyze_wildcard", &self.analyze_wildcard);
        put(&mut body, "fuzziness", &self.fuzziness);
        put(&mut body, "fuzzy_prefix_length", &self.fuzzy_prefix_length);
        put(&mut body, "fuzzy_max_expansions", &self.fuzzy_max_expansions);
        put(&mut body, "fuzzy_rewrite", &self.fuzzy_rewrite);
        put(&mut body, "phrase_slop", &self.phrase_slop);
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "use_dis_max", &self.use_dis_max);
        put_float(&mut body, "tie_breaker", self.tie_breaker);
        put(&mut body, "rewrite", &self.rewrite);
        put(&mut body, "minimum_should_match", &self.minimum_should_match);
        put(&mut body, "lenient", &self.lenient);
        put(&mut body, "locale", &self.locale);
        put(&mut body, "time_zone", &self.time_zone);
        put(&mut body, "_name", &self.query_name);
        single("query_string", Value::Object(body))
    }
}

/// Query parsed with the forgiving simple query syntax
#[derive(Clone, Debug, Default)]
pub struct SimpleQueryStringQuery {
    query: String,
    fields: Vec<String>,
    analyzer: Option<String>,
    default_operator: Option<MatchOperator>,
    flags: Option<String>,
    lowercase_expanded_terms: Option<bool>,
    analyze_wildcard: Option<bool>,
    locale: Option<String>,
    lenient: Option<bool>,
    minimum_should_match: Option<MinimumShouldMatch>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl SimpleQueryStringQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn field_with_boost(mut self, field: impl Into<String>, boost: f64) -> Self {
        self.fields.push(format!("{}^{}", field.into(), boost));
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn default_operator(mut self, operator: MatchOperator) -> Self {
        self.default_operator = Some(operator);
        self
    }

    /// Enabled syntax features, e.g. `OR|AND|PREFIX`
    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    pub fn lowercase_expanded_terms(mut self, lowercase: bool) -> Self {
        self.lowercase_expanded_terms = Some(lowercase);
        self
    }

    pub fn analyze_wildcard(mut self, analyze: bool) -> Self {
        self.analyze_wildcard = Some(analyze);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
        self
    }

    pub fn minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(msm.into());
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }
}

impl Query for SimpleQueryStringQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("query".to_string(), Value::from(self.query.clone()));
        put_strings(&mut body, "fields", &self.fields);
        put(&mut body, "analyzer", &self.analyzer);
        put(
            &mut body,
            "default_operator",
            &self.default_operator.map(|o| o.as_str()),
        );
        put(&mut body, "flags", &self.flags);
        put(&mut body, "lowercase_expanded_terms", &self.lowercase_expanded_terms);
        put(&mut body, "analyze_wildcard", &self.analyze_wildcard);
        put(&mut body, "locale", &self.locale);
        put(&mut body, "lenient", &self.lenient);
        put(&mut body, "minimum_should_match", &self.minimum_should_match);
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "_name", &self.query_name);
        single("simple_query_string", Value::Object(body))
    }
}
