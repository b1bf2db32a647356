//! Wildcard query - pattern matching with `*` and `?`

use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;

/// Query matching terms against a wildcard pattern
#[derive(Clone, Debug)]
pub struct WildcardQuery {
    name: String,
    wildcard: String,
    boost: Option<f64>,
    rewrite: Option<String>,
    query_name: Option<String>,
}

impl WildcardQuery {
    pub fn new(name: impl Into<String>, wildcard: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wildcard: wildcard.into(),
            boost: None,
            rewrite: None,
            query_name: None,
        }
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }
}

impl Query for WildcardQuery {
    fn source(&self) -> Value {
        let mut params = Object::new();
        params.insert("wildcard".to_string(), Value::from(self.wildcard.clone()));
        put_float(&mut params, "boost", self.boost);
        put(&mut params, "rewrite", &self.rewrite);
        put(&mut params, "_name", &self.query_name);
        single("wildcard", single(self.name.clone(), Value::Object(params)))
    }
}
