use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::{BoxedQuery, Query};

/// Disjunction scored by its best-matching clause plus a tie-breaker
/// share of the others
#[derive(Clone, Debug, Default)]
pub struct DisMaxQuery {
    queries: Vec<BoxedQuery>,
    boost: Option<f64>,
    tie_breaker: Option<f64>,
    query_name: Option<String>,
}

impl DisMaxQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause
    pub fn query(mut self, query: impl Query + 'static) -> Self {
        self.queries.push(Box::new(query));
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn tie_breaker(mut self, tie_breaker: f64) -> Self {
        self.tie_breaker = Some(tie_breaker);
        self
    }

    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }
}

impl Query for DisMaxQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert(
            "queries".to_string(),
            Value::Array(self.queries.iter().map(|q| q.source()).collect()),
        );
        put_float(&mut body, "boost", self.boost);
        put_float(&mut body, "tie_breaker", self.tie_breaker);
        put(&mut body, "_name", &self.query_name);
        single("dis_max", Value::Object(body))
    }
}
