use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;

/// Query matching terms against a regular expression
#[derive(Clone, Debug)]
pub struct RegexpQuery {
    name: String,
    regexp: String,
    flags: Option<String>,
    max_determinized_states: Option<i64>,
    boost: Option<f64>,
    rewrite: Option<String>,
    query_name: Option<String>,
}

impl RegexpQuery {
    pub fn new(name: impl Into<String>, regexp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regexp: regexp.into(),
            flags: None,
            max_determinized_states: None,
            boost: None,
            rewrite: None,
            query_name: None,
        }
    }

    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    pub fn max_determinized_states(mut self, states: i64) -> Self {
        self.max_determinized_states = Some(states);
        self
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

impl Query for RegexpQuery {
    fn source(&self) -> Value {
        let mut params = Object::new();
        params.insert("value".to_string(), Value::from(self.regexp.clone()));
        put(&mut params, "flags", &self.flags);
        put(&mut params, "max_determinized_states", &self.max_determinized_states);
        put_float(&mut params, "boost", self.boost);
        put(&mut params, "rewrite", &self.rewrite);

        let mut body = Object::new();
        body.insert(self.name.clone(), Value::Object(params));
        put(&mut body, "_name", &self.query_name);
        single("regexp", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_regexp_query() {
        let query = RegexpQuery::new("name.first", "s.*y")
            .flags("INTERSECTION|COMPLEMENT|EMPTY")
            .boost(1.2)
            .query_name("my_query_name");
        assert_eq!(
            query.source(),
            json!({"regexp": {
                "name.first": {
                    "value": "s.*y",
                    "flags": "INTERSECTION|COMPLEMENT|EMPTY",
                    "boost": 1.2
                },
                "_name": "my_query_name"
            }})
        );
    }
}
