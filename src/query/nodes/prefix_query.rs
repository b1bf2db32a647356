//! Prefix query - terms starting with a prefix

use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;

/// Query matching terms that start with a prefix
///
/// Renders the short form `{"prefix": {field: prefix}}` unless an option is
/// set.
#[derive(Clone, Debug)]
pub struct PrefixQuery {
    name: String,
    prefix: String,
    boost: Option<f64>,
    rewrite: Option<String>,
    query_name: Option<String>,
}

impl PrefixQuery {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            boost: None,
            rewrite: None,
            query_name: None,
        }
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Multi-term rewrite method, e.g. `constant_score_auto`
    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }
}

impl Query for PrefixQuery {
    fn source(&self) -> Value {
        if self.boost.is_none() && self.rewrite.is_none() && self.query_name.is_none() {
            return single(
                "prefix",
                single(self.name.clone(), Value::from(self.prefix.clone())),
            );
        }
        let mut params = Object::new();
        params.insert("prefix".to_string(), Value::from(self.prefix.clone()));
        put_float(&mut params, "boost", self.boost);
        put(&mut params, "rewrite", &self.rewrite);
        put(&mut params, "_name", &self.query_name);
        single("prefix", single(self.name.clone(), Value::Object(params)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefix_query_short_form() {
        let query = PrefixQuery::new("user", "ki");
        assert_eq!(query.source(), json!({"prefix": {"user": "ki"}}));
    }

    #[test]
    fn test_prefix_query_with_options() {
        let query = PrefixQuery::new("user", "ki").boost(2.0).query_name("my_query_name");
        assert_eq!(
            query.source(),
            json!({"prefix": {"user": {"prefix": "ki", "boost": 2, "_name": "my_query_name"}}})
        );
    }
}
