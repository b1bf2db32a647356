use serde_json::Value;

use crate::filter::Filter;
use crate::models::json::{put, put_float, single, Object};
use crate::models::InnerHit;
use crate::query::ast::{Query, QueryOrFilter};

/// Query on nested objects under `path`, scoring the root document
#[derive(Clone, Debug)]
pub struct NestedQuery {
    path: String,
    inner: Option<QueryOrFilter>,
    score_mode: Option<String>,
    boost: Option<f64>,
    query_name: Option<String>,
    inner_hit: Option<InnerHit>,
}

impl NestedQuery {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            inner: None,
            score_mode: None,
            boost: None,
            query_name: None,
            inner_hit: None,
        }
    }

    pub fn query(mut self, query: impl Query + 'static) -> Self {
        self.inner = Some(QueryOrFilter::Query(Box::new(query)));
        self
    }

    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.inner = Some(QueryOrFilter::Filter(Box::new(filter)));
        self
    }

    /// avg, sum, max or none
    pub fn score_mode(mut self, mode: impl Into<String>) -> Self {
        self.score_mode = Some(mode.into());
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

    pub fn inner_hit(mut self, inner_hit: InnerHit) -> Self {
        self.inner_hit = Some(inner_hit);
        self
    }
}

impl Query for NestedQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("path".to_string(), Value::from(self.path.clone()));
        if let Some(inner) = &self.inner {
            inner.apply(&mut body);
        }
        put(&mut body, "score_mode", &self.score_mode);
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "_name", &self.query_name);
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
    fn test_nested_query() {
        let query = NestedQuery::new("obj1")
            .query(
                BoolQuery::new()
                    .must(TermQuery::new("obj1.name", "blue"))
                    .must(RangeQuery::new("obj1.count").gt(5)),
            )
            .score_mode("avg")
            .query_name("qname");
        assert_eq!(
            query.source(),
            json!({"nested": {
                "path": "obj1",
                "query": {"bool": {"must": [
                    {"term": {"obj1.name": "blue"}},
                    {"range": {"obj1.count": {
                        "from": 5, "to": null, "include_lower": false, "include_upper": true
                    }}}
                ]}},
                "score_mode": "avg",
                "_name": "qname"
            }})
        );
    }

    #[test]
    fn test_nested_query_with_inner_hits() {
        let query = NestedQuery::new("comments")
            .query(TermQuery::new("comments.user", "olivere"))
            .inner_hit(InnerHit::new().name("comments").size(3));
        assert_eq!(
            query.source(),
            json!({"nested": {
                "path": "comments",
                "query": {"term": {"comments.user": "olivere"}},
                "inner_hits": {"name": "comments", "size": 3}
            }})
        );
    }
}
