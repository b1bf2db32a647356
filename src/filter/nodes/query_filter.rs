use serde_json::Value;

use crate::filter::ast::Filter;
use crate::models::json::{put, single, Object};
use crate::query::{BoxedQuery, Query};

/// Wraps a query so it can be used where a filter is expected
///
/// Renders as `{"query": ..}` unless caching or a name is configured, in
/// which case it renders as `{"fquery": {"query": .., "_cache": .., "_name": ..}}`.
#[derive(Clone, Debug)]
pub struct QueryFilter {
    query: BoxedQuery,
    cache: Option<bool>,
    name: Option<String>,
}

impl QueryFilter {
    pub fn new(query: impl Query + 'static) -> Self {
        Self {
            query: Box::new(query),
            cache: None,
            name: None,
        }
    }

    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn filter_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Filter for QueryFilter {
    fn source(&self) -> Value {
        if self.cache.is_none() && self.name.is_none() {
            return single("query", self.query.source());
        }
        let mut body = Object::new();
        body.insert("query".to_string(), self.query.source());
        put(&mut body, "_cache", &self.cache);
        put(&mut body, "_name", &self.name);
        single("fquery", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryStringQuery;
    use serde_json::json;

    #[test]
    fn test_query_filter_plain() {
        let filter = QueryFilter::new(QueryStringQuery::new("this AND that OR thus"));
        assert_eq!(
            filter.source(),
            json!({"query": {"query_string": {"query": "this AND that OR thus"}}})
        );
    }

    #[test]
    fn test_query_filter_with_cache_uses_fquery() {
        let filter = QueryFilter::new(QueryStringQuery::new("this AND that OR thus"))
            .cache(true)
            .filter_name("MyName");
        assert_eq!(
            filter.source(),
            json!({"fquery": {
                "query": {"query_string": {"query": "this AND that OR thus"}},
                "_cache": true,
                "_name": "MyName"
            }})
        );
    }
}
