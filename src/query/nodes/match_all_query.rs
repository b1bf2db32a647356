//! Match-all query - every document, constant score

use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;

/// Query matching all documents
#[derive(Clone, Debug, Default)]
pub struct MatchAllQuery {
    boost: Option<f64>,
    norms_field: Option<String>,
}

impl MatchAllQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Field whose norms are used as the score
    pub fn norms_field(mut self, field: impl Into<String>) -> Self {
        self.norms_field = Some(field.into());
        self
    }
}

impl Query for MatchAllQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "norms_field", &self.norms_field);
        single("match_all", Value::Object(body))
    }
}
