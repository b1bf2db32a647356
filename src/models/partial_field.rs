use serde_json::Value;

use crate::models::json::{put_strings, Object};

/// A named projection of `_source` returned under `partial_fields`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialField {
    name: String,
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl PartialField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append include patterns
    pub fn include<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Append exclude patterns
    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn source(&self) -> Value {
        let mut map = Object::new();
        put_strings(&mut map, "include", &self.includes);
        put_strings(&mut map, "exclude", &self.excludes);
        Value::Object(map)
    }
}
