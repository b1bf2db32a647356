//! Terms query - match any of several exact values

use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;
use crate::query::types::MinimumShouldMatch;

/// Query matching documents with any of the given terms
///
/// Values keep their insertion order in the rendered array.
#[derive(Clone, Debug)]
pub struct TermsQuery {
    name: String,
    values: Vec<Value>,
    minimum_should_match: Option<MinimumShouldMatch>,
    disable_coord: Option<bool>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl TermsQuery {
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            minimum_should_match: None,
            disable_coord: None,
            boost: None,
            query_name: None,
        }
    }

    pub fn minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(msm.into());
        self
    }

    pub fn disable_coord(mut self, disable: bool) -> Self {
        self.disable_coord = Some(disable);
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

impl Query for TermsQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert(self.name.clone(), Value::Array(self.values.clone()));
        put(&mut body, "minimum_should_match", &self.minimum_should_match);
        put(&mut body, "disable_coord", &self.disable_coord);
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "_name", &self.query_name);
        single("terms", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_terms_query() {
        let query = TermsQuery::new("user", ["ki", "ko"]);
        assert_eq!(query.source(), json!({"terms": {"user": ["ki", "ko"]}}));
    }

    #[test]
    fn test_terms_query_heterogeneous_values() {
        let query = TermsQuery::new("tags", vec![json!("a"), json!(2), json!(1.5)])
            .minimum_should_match(1)
            .query_name("tq");
        assert_eq!(
            query.source(),
            json!({"terms": {"tags": ["a", 2, 1.5], "minimum_should_match": 1, "_name": "tq"}})
        );
    }
}
