use serde_json::Value;

use crate::filter::ast::{cache_options_setters, CacheOptions, Filter};
use crate::models::json::{put, single, Object};
use crate::models::InnerHit;
use crate::query::{Query, QueryOrFilter};

/// Filter on nested objects under `path`
#[derive(Clone, Debug)]
pub struct NestedFilter {
    path: String,
    inner: Option<QueryOrFilter>,
    join: Option<bool>,
    inner_hit: Option<InnerHit>,
    options: CacheOptions,
}

impl NestedFilter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            inner: None,
            join: None,
            inner_hit: None,
            options: CacheOptions::default(),
        }
    }

    /// Match nested objects with a query, replacing any filter
    pub fn query(mut self, query: impl Query + 'static) -> Self {
        self.inner = Some(QueryOrFilter::Query(Box::new(query)));
        self
    }

    /// Match nested objects with a filter, replacing any query
    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.inner = Some(QueryOrFilter::Filter(Box::new(filter)));
        self
    }

    pub fn join(mut self, join: bool) -> Self {
        self.join = Some(join);
        self
    }

    pub fn inner_hit(mut self, inner_hit: InnerHit) -> Self {
        self.inner_hit = Some(inner_hit);
        self
    }
}

cache_options_setters!(NestedFilter);

impl Filter for NestedFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("path".to_string(), Value::from(self.path.clone()));
        if let Some(inner) = &self.inner {
            inner.apply(&mut body);
        }
        put(&mut body, "join", &self.join);
        self.options.apply(&mut body);
        if let Some(inner_hit) = &self.inner_hit {
            body.insert("inner_hits".to_string(), inner_hit.source());
        }
        single("nested", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{BoolQuery, RangeQuery, TermQuery};
    use serde_json::json;

    #[test]
    fn test_nested_filter_with_inner_hits() {
        let filter = NestedFilter::new("obj1")
            .query(
                BoolQuery::new()
                    .must(TermQuery::new("obj1.name", "blue"))
                    .must(RangeQuery::new("obj1.count").gt(5)),
            )
            .cache(true)
            .inner_hit(
                InnerHit::new()
                    .name("comments")
                    .query(TermQuery::new("user", "olivere")),
            );
        assert_eq!(
            filter.source(),
            json!({"nested": {
                "_cache": true,
                "inner_hits": {"name": "comments", "query": {"term": {"user": "olivere"}}},
                "path": "obj1",
                "query": {"bool": {"must": [
                    {"term": {"obj1.name": "blue"}},
                    {"range": {"obj1.count": {
                        "from": 5, "include_lower": false, "include_upper": true, "to": null
                    }}}
                ]}}
            }})
        );
    }

    #[test]
    fn test_nested_filter_with_filter_and_join() {
        let filter = NestedFilter::new("obj1")
            .filter(crate::filter::TermFilter::new("obj1.name", "blue"))
            .join(false)
            .filter_name("nf");
        assert_eq!(
            filter.source(),
            json!({"nested": {
                "path": "obj1",
                "filter": {"term": {"obj1.name": "blue"}},
                "join": false,
                "_name": "nf"
            }})
        );
    }
}
