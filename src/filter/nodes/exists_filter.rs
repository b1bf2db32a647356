//! Exists and missing filters - field presence checks

use serde_json::Value;

use crate::models::json::{put, single, Object};
use crate::filter::ast::Filter;

/// Filter on documents where the field has a value
#[derive(Clone, Debug)]
pub struct ExistsFilter {
    field: String,
    name: Option<String>,
}

impl ExistsFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            name: None,
        }
    }

    pub fn filter_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Filter for ExistsFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("field".to_string(), Value::from(self.field.clone()));
        put(&mut body, "_name", &self.name);
        single("exists", Value::Object(body))
    }
}

/// Filter on documents where the field has no value
#[derive(Clone, Debug)]
pub struct MissingFilter {
    field: String,
    existence: Option<bool>,
    null_value: Option<bool>,
    name: Option<String>,
}

impl MissingFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            existence: None,
            null_value: None,
            name: None,
        }
    }

    /// Match documents where the field does not exist at all
    pub fn existence(mut self, existence: bool) -> Self {
        self.existence = Some(existence);
        self
    }

    /// Match documents where the field is explicitly `null`
    pub fn null_value(mut self, null_value: bool) -> Self {
        self.null_value = Some(null_value);
        self
    }

    pub fn filter_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Filter for MissingFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("field".to_string(), Value::from(self.field.clone()));
        put(&mut body, "existence", &self.existence);
        put(&mut body, "null_value", &self.null_value);
        put(&mut body, "_name", &self.name);
        single("missing", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exists_filter() {
        let filter = ExistsFilter::new("user").filter_name("_has_user");
        assert_eq!(
            filter.source(),
            json!({"exists": {"field": "user", "_name": "_has_user"}})
        );
    }

    #[test]
    fn test_missing_filter() {
        let filter = MissingFilter::new("user").existence(true).null_value(false);
        assert_eq!(
            filter.source(),
            json!({"missing": {"field": "user", "existence": true, "null_value": false}})
        );
    }
}
