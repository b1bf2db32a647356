//! Boolean query - combines multiple clauses with AND, OR, NOT semantics

use serde_json::Value;

use crate::filter::{BoxedFilter, Filter};
use crate::models::json::{one_or_many, put, put_float, single, Object};
use crate::query::ast::{BoxedQuery, Query};
use crate::query::types::MinimumShouldMatch;

/// Boolean query combining multiple clauses
///
/// The boolean query supports four types of clauses:
/// - `must`: All clauses must match (AND). Contributes to score.
/// - `should`: At least one clause should match (OR). Contributes to score.
/// - `must_not`: No clause must match (NOT). Does not contribute to score.
/// - `filter`: Filters that must match. Does not contribute to score.
///
/// A slot with a single clause renders as that clause's object, a slot with
/// several clauses renders as an array and an empty slot is left out.
///
/// # Example
///
/// ```json
/// {
///   "bool": {
///     "must": { "term": { "user": "kimchy" } },
///     "must_not": { "range": { "age": { "from": 10, "to": 20,
///                                       "include_lower": true, "include_upper": true } } },
///     "should": [
///       { "term": { "tag": "sometag" } },
///       { "term": { "tag": "sometagtag" } }
///     ]
///   }
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoolQuery {
    must: Vec<BoxedQuery>,
    must_not: Vec<BoxedQuery>,
    should: Vec<BoxedQuery>,
    filter: Vec<BoxedFilter>,
    boost: Option<f64>,
    disable_coord: Option<bool>,
    minimum_should_match: Option<MinimumShouldMatch>,
    adjust_pure_negative: Option<bool>,
    query_name: Option<String>,
}

impl BoolQuery {
    /// Create a new empty boolean query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause that must match
    pub fn must(mut self, query: impl Query + 'static) -> Self {
        self.must.push(Box::new(query));
        self
    }

    /// Add a clause that must not match
    pub fn must_not(mut self, query: impl Query + 'static) -> Self {
        self.must_not.push(Box::new(query));
        self
    }

    /// Add a clause that should match
    pub fn should(mut self, query: impl Query + 'static) -> Self {
        self.should.push(Box::new(query));
        self
    }

    /// Add a non-scoring filter clause
    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filter.push(Box::new(filter));
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

    /// Minimum number of should clauses that must match
    pub fn minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(msm.into());
        self
    }

    pub fn adjust_pure_negative(mut self, adjust: bool) -> Self {
        self.adjust_pure_negative = Some(adjust);
        self
    }

    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }

    /// Check if the query has no clauses
    pub fn is_empty(&self) -> bool {
        self.must.is_empty()
            && self.must_not.is_empty()
            && self.should.is_empty()
            && self.filter.is_empty()
    }

    /// Total number of clauses across all slots
    pub fn clause_count(&self) -> usize {
        self.must.len() + self.must_not.len() + self.should.len() + self.filter.len()
    }
}

impl Query for BoolQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        let slots = [
            ("must", render_all(&self.must)),
            ("must_not", render_all(&self.must_not)),
            ("should", render_all(&self.should)),
            ("filter", self.filter.iter().map(|f| f.source()).collect()),
        ];
        for (slot, clauses) in slots {
            if let Some(rendered) = one_or_many(clauses) {
                body.insert(slot.to_string(), rendered);
            }
        }
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "disable_coord", &self.disable_coord);
        put(&mut body, "minimum_should_match", &self.minimum_should_match);
        put(&mut body, "adjust_pure_negative", &self.adjust_pure_negative);
        put(&mut body, "_name", &self.query_name);
        single("bool", Value::Object(body))
    }
}

fn render_all(queries: &[BoxedQuery]) -> Vec<Value> {
    queries.iter().map(|q| q.source()).collect()
}
