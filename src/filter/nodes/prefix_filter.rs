use serde_json::Value;

use crate::filter::ast::{cache_options_setters, CacheOptions, Filter};
use crate::models::json::{single, Object};

/// Filter on terms starting with a prefix
#[derive(Clone, Debug)]
pub struct PrefixFilter {
    name: String,
    prefix: String,
    options: CacheOptions,
}

impl PrefixFilter {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            options: CacheOptions::default(),
        }
    }
}

cache_options_setters!(PrefixFilter);

impl Filter for PrefixFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert(self.name.clone(), Value::from(self.prefix.clone()));
        self.options.apply(&mut body);
        single("prefix", Value::Object(body))
    }
}
