//! And/or filters - conjunction and disjunction of filters

use serde_json::Value;

use crate::filter::ast::{cache_options_setters, BoxedFilter, CacheOptions, Filter};
use crate::models::json::{single, Object};

/// Filter matching documents that match every child filter
#[derive(Clone, Debug, Default)]
pub struct AndFilter {
    filters: Vec<BoxedFilter>,
    options: CacheOptions,
}

impl AndFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child filter
    pub fn add(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
}

cache_options_setters!(AndFilter);

impl Filter for AndFilter {
    fn source(&self) -> Value {
        single("and", composite_body(&self.filters, &self.options))
    }
}

/// Filter matching documents that match at least one child filter
#[derive(Clone, Debug, Default)]
pub struct OrFilter {
    filters: Vec<BoxedFilter>,
    options: CacheOptions,
}

impl OrFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child filter
    pub fn add(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
}

cache_options_setters!(OrFilter);

impl Filter for OrFilter {
    fn source(&self) -> Value {
        single("or", composite_body(&self.filters, &self.options))
    }
}

fn composite_body(filters: &[BoxedFilter], options: &CacheOptions) -> Value {
    let mut body = Object::new();
    body.insert(
        "filters".to_string(),
        Value::Array(filters.iter().map(|f| f.source()).collect()),
    );
    options.apply(&mut body);
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{PrefixFilter, RangeFilter, TermFilter};
    use serde_json::json;

    #[test]
    fn test_and_filter_cached_and_named() {
        let filter = AndFilter::new()
            .add(RangeFilter::new("postDate").from("2010-03-01").to("2010-04-01"))
            .add(PrefixFilter::new("name.second", "ba"))
            .cache(true)
            .cache_key("MyAndFilter")
            .filter_name("MyFilterName");
        assert_eq!(
            filter.source(),
            json!({"and": {
                "_cache": true,
                "_cache_key": "MyAndFilter",
                "_name": "MyFilterName",
                "filters": [
                    {"range": {"postDate": {
                        "from": "2010-03-01",
                        "include_lower": true,
                        "include_upper": true,
                        "to": "2010-04-01"
                    }}},
                    {"prefix": {"name.second": "ba"}}
                ]
            }})
        );
    }

    #[test]
    fn test_or_filter_preserves_order() {
        let filter = OrFilter::new()
            .add(TermFilter::new("user", "b"))
            .add(TermFilter::new("user", "a"));
        assert_eq!(
            filter.source(),
            json!({"or": {"filters": [
                {"term": {"user": "b"}},
                {"term": {"user": "a"}}
            ]}})
        );
    }
}
