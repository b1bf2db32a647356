//! Term query - exact match on a field

use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;

/// Query that matches documents containing an exact term in a field
///
/// Renders the short form `{"term": {field: value}}` unless a boost or a
/// query name is set.
#[derive(Clone, Debug)]
pub struct TermQuery {
    name: String,
    value: Value,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl TermQuery {
    /// Create a new term query
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            boost: None,
            query_name: None,
        }
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

impl Query for TermQuery {
    fn source(&self) -> Value {
        if self.boost.is_none() && self.query_name.is_none() {
            return single("term", single(self.name.clone(), self.value.clone()));
        }
        let mut params = Object::new();
        params.insert("value".to_string(), self.value.clone());
        put_float(&mut params, "boost", self.boost);
        put(&mut params, "_name", &self.query_name);
        single("term", single(self.name.clone(), Value::Object(params)))
    }
}
