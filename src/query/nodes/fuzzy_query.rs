//! Fuzzy query - terms within an edit distance

use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;

/// Query matching terms similar to the given value
#[derive(Clone, Debug)]
pub struct FuzzyQuery {
    name: String,
    value: Value,
    boost: Option<f64>,
    fuzziness: Option<Value>,
    prefix_length: Option<i64>,
    max_expansions: Option<i64>,
    transpositions: Option<bool>,
    rewrite: Option<String>,
    query_name: Option<String>,
}

impl FuzzyQuery {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            boost: None,
            fuzziness: None,
            prefix_length: None,
            max_expansions: None,
            transpositions: None,
            rewrite: None,
            query_name: None,
        }
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Edit distance, a number, a range string or `"AUTO"`
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

    pub fn transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = Some(transpositions);
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

impl Query for FuzzyQuery {
    fn source(&self) -> Value {
        let mut params = Object::new();
        params.insert("value".to_string(), self.value.clone());
        put_float(&mut params, "boost", self.boost);
        put(&mut params, "fuzziness", &self.fuzziness);
        put(&mut params, "prefix_length", &self.prefix_length);
        put(&mut params, "max_expansions", &self.max_expansions);
        put(&mut params, "transpositions", &self.transpositions);
        put(&mut params, "rewrite", &self.rewrite);
        put(&mut params, "_name", &self.query_name);
        single("fuzzy", single(self.name.clone(), Value::Object(params)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fuzzy_query() {
        let query = FuzzyQuery::new("user", "ki")
            .boost(1.5)
            .fuzziness(2)
            .prefix_length(0)
            .max_expansions(100);
        assert_eq!(
            query.source(),
            json!({"fuzzy": {"user": {
                "value": "ki",
                "boost": 1.5,
                "fuzziness": 2,
                "prefix_length": 0,
                "max_expansions": 100
            }}})
        );
    }

    #[test]
    fn test_fuzzy_query_minimal() {
        let query = FuzzyQuery::new("user", "ki");
        assert_eq!(query.source(), json!({"fuzzy": {"user": {"value": "ki"}}}));
    }
}
