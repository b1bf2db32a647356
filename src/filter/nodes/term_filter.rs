//! Term and terms filters - exact value matches

use serde_json::Value;

use crate::filter::ast::{cache_options_setters, CacheOptions, Filter};
use crate::models::json::{put, single, Object};

/// Filter on an exact term
#[derive(Clone, Debug)]
pub struct TermFilter {
    name: String,
    value: Value,
    options: CacheOptions,
}

impl TermFilter {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            options: CacheOptions::default(),
        }
    }
}

cache_options_setters!(TermFilter);

impl Filter for TermFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert(self.name.clone(), self.value.clone());
        self.options.apply(&mut body);
        single("term", Value::Object(body))
    }
}

/// Filter on any of several exact values
#[derive(Clone, Debug)]
pub struct TermsFilter {
    name: String,
    values: Vec<Value>,
    execution: Option<String>,
    options: CacheOptions,
}

impl TermsFilter {
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            execution: None,
            options: CacheOptions::default(),
        }
    }

    /// Execution mode, e.g. `plain`, `bool`, `and`, `or`
    pub fn execution(mut self, execution: impl Into<String>) -> Self {
        self.execution = Some(execution.into());
        self
    }
}

cache_options_setters!(TermsFilter);

impl Filter for TermsFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert(self.name.clone(), Value::Array(self.values.clone()));
        put(&mut body, "execution", &self.execution);
        self.options.apply(&mut body);
        single("terms", Value::Object(body))
    }
}

/// Terms filter whose values are fetched from a field of another document
#[derive(Clone, Debug)]
pub struct TermsLookupFilter {
    name: String,
    index: Option<String>,
    doc_type: Option<String>,
    id: Option<String>,
    path: Option<String>,
    routing: Option<String>,
    lookup_cache: Option<bool>,
    options: CacheOptions,
}

impl TermsLookupFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
            doc_type: None,
            id: None,
            path: None,
            routing: None,
            lookup_cache: None,
            options: CacheOptions::default(),
        }
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }

    /// Whether the looked-up terms are cached
    pub fn lookup_cache(mut self, cache: bool) -> Self {
        self.lookup_cache = Some(cache);
        self
    }
}

cache_options_setters!(TermsLookupFilter);

impl Filter for TermsLookupFilter {
    fn source(&self) -> Value {
        let mut lookup = Object::new();
        put(&mut lookup, "index", &self.index);
        put(&mut lookup, "type", &self.doc_type);
        put(&mut lookup, "id", &self.id);
        put(&mut lookup, "path", &self.path);
        put(&mut lookup, "routing", &self.routing);
        put(&mut lookup, "cache", &self.lookup_cache);

        let mut body = Object::new();
        body.insert(self.name.clone(), Value::Object(lookup));
        self.options.apply(&mut body);
        single("terms", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_term_filter() {
        let filter = TermFilter::new("name.last", "banon");
        assert_eq!(filter.source(), json!({"term": {"name.last": "banon"}}));
    }

    #[test]
    fn test_term_filter_named() {
        let filter = TermFilter::new("count", 5).filter_name("my_term").cache(true);
        assert_eq!(
            filter.source(),
            json!({"term": {"count": 5, "_cache": true, "_name": "my_term"}})
        );
    }

    #[test]
    fn test_terms_filter_keeps_value_order() {
        let filter = TermsFilter::new("user", [json!("kimchy"), json!(42), json!(true)])
            .execution("bool");
        assert_eq!(
            filter.source(),
            json!({"terms": {"user": ["kimchy", 42, true], "execution": "bool"}})
        );
    }

    #[test]
    fn test_terms_lookup_filter() {
        let filter = TermsLookupFilter::new("user")
            .index("users")
            .doc_type("user")
            .id("2")
            .path("followers")
            .filter_name("followed");
        assert_eq!(
            filter.source(),
            json!({"terms": {
                "user": {"index": "users", "type": "user", "id": "2", "path": "followers"},
                "_name": "followed"
            }})
        );
    }
}
