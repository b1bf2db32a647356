use serde_json::Value;

use crate::models::json::{put_strings, Object};

/// Controls whether `_source` is returned and which parts of it
///
/// A disabled context renders as `false`; an enabled context without
/// patterns renders as `true`; otherwise the non-empty `includes` and
/// `excludes` lists are emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchSourceContext {
    fetch_source: bool,
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl FetchSourceContext {
    pub fn new(fetch_source: bool) -> Self {
        Self {
            fetch_source,
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    pub fn fetch_source(&self) -> bool {
        self.fetch_source
    }

    pub fn set_fetch_source(mut self, fetch_source: bool) -> Self {
        self.fetch_source = fetch_source;
        self
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
        if !self.fetch_source {
            return Value::Bool(false);
        }
        if self.includes.is_empty() && self.excludes.is_empty() {
            return Value::Bool(true);
        }
        let mut map = Object::new();
        put_strings(&mut map, "includes", &self.includes);
        put_strings(&mut map, "excludes", &self.excludes);
        Value::Object(map)
    }
}

impl Default for FetchSourceContext {
    fn default() -> Self {
        Self::new(true)
    }
}
