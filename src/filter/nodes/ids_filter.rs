use serde_json::Value;

use crate::filter::ast::Filter;
use crate::models::json::{put, single, Object};

/// Filter on document ids, optionally restricted to mapping types
///
/// One type renders as `type`, several as `types`; `values` is always
/// present.
#[derive(Clone, Debug, Default)]
pub struct IdsFilter {
    types: Vec<String>,
    values: Vec<String>,
    name: Option<String>,
}

impl IdsFilter {
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

    pub fn filter_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Filter for IdsFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        match self.types.len() {
            0 => {}
            1 => {
                body.insert("type".to_string(), Value::from(self.types[0].clone()));
            }
            _ => {
                body.insert("types".to_string(), Value::from(self.types.clone()));
            }
        }
        body.insert("values".to_string(), Value::from(self.values.clone()));
        put(&mut body, "_name", &self.name);
        single("ids", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_filter_single_type() {
        let filter = IdsFilter::new(["my_type"]).ids(["1", "4"]).ids(["100"]);
        assert_eq!(
            filter.source(),
            json!({"ids": {"type": "my_type", "values": ["1", "4", "100"]}})
        );
    }

    #[test]
    fn test_ids_filter_many_types() {
        let filter = IdsFilter::new(["a", "b"]).filter_name("by_id");
        assert_eq!(
            filter.source(),
            json!({"ids": {"types": ["a", "b"], "values": [], "_name": "by_id"}})
        );
    }
}
