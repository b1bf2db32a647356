use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;

/// Query on document ids, optionally restricted to mapping types
///
/// One type renders as `type`, several as `types`; `values` is always
/// present.
#[derive(Clone, Debug, Default)]
pub struct IdsQuery {
    types: Vec<String>,
    values: Vec<String>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl IdsQuery {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Append ids
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(ids.into_iter().map(Into::into));
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

impl Query for IdsQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        match self.types.as_slice() {
            [] => {}
            [only] => {
                body.insert("type".to_string(), Value::from(only.clone()));
            }
            many => {
                body.insert("types".to_string(), Value::from(many.to_vec()));
            }
        }
        body.insert("values".to_string(), Value::from(self.values.clone()));
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "_name", &self.query_name);
        single("ids", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_query() {
        let query = IdsQuery::new(["my_type"])
            .ids(["1", "4", "100"])
            .boost(10.5)
            .query_name("my_query");
        assert_eq!(
            query.source(),
            json!({"ids": {
                "type": "my_type",
                "values": ["1", "4", "100"],
                "boost": 10.5,
                "_name": "my_query"
            }})
        );
    }

    #[test]
    fn test_ids_query_without_types() {
        let query = IdsQuery::new(Vec::<String>::new());
        assert_eq!(query.source(), json!({"ids": {"values": []}}));
    }
}
