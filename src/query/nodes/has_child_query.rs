//! Parent/child queries

use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::models::InnerHit;
use crate::query::ast::{BoxedQuery, Query};

/// Query returning parents whose children match `query`
#[derive(Clone, Debug)]
pub struct HasChildQuery {
    child_type: String,
    query: BoxedQuery,
    score_type: Option<String>,
    min_children: Option<i64>,
    max_children: Option<i64>,
    short_circuit_cutoff: Option<i64>,
    boost: Option<f64>,
    query_name: Option<String>,
    inner_hit: Option<InnerHit>,
}

impl HasChildQuery {
    pub fn new(child_type: impl Into<String>, query: impl Query + 'static) -> Self {
        Self {
            child_type: child_type.into(),
            query: Box::new(query),
            score_type: None,
            min_children: None,
            max_children: None,
            short_circuit_cutoff: None,
            boost: None,
            query_name: None,
            inner_hit: None,
        }
    }

    /// none, max, sum or avg
    pub fn score_type(mut self, score_type: impl Into<String>) -> Self {
        self.score_type = Some(score_type.into());
        self
    }

    pub fn min_children(mut self, min: i64) -> Self {
        self.min_children = Some(min);
        self
    }

    pub fn max_children(mut self, max: i64) -> Self {
        self.max_children = Some(max);
        self
    }

    pub fn short_circuit_cutoff(mut self, cutoff: i64) -> Self {
        self.short_circuit_cutoff = Some(cutoff);
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

impl Query for HasChildQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("query".to_string(), self.query.source());
        body.insert("type".to_string(), Value::from(self.child_type.clone()));
        put(&mut body, "score_type", &self.score_type);
        put(&mut body, "min_children", &self.min_children);
        put(&mut body, "max_children", &self.max_children);
        put(&mut body, "short_circuit_cutoff", &self.short_circuit_cutoff);
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "_name", &self.query_name);
        if let Some(inner_hit) = &self.inner_hit {
            body.insert("inner_hits".to_string(), inner_hit.source());
        }
        single("has_child", Value::Object(body))
    }
}

/// Query returning children whose parent matches `query`
#[derive(Clone, Debug)]
pub struct HasParentQuery {
    parent_type: String,
    query: BoxedQuery,
    score_type: Option<String>,
    boost: Option<f64>,
    query_name: Option<String>,
    inner_hit: Option<InnerHit>,
}

impl HasParentQuery {
    pub fn new(parent_type: impl Into<String>, query: impl Query + 'static) -> Self {
        Self {
            parent_type: parent_type.into(),
            query: Box::new(query),
            score_type: None,
            boost: None,
            query_name: None,
            inner_hit: None,
        }
    }

    /// none or score
    pub fn score_type(mut self, score_type: impl Into<String>) -> Self {
        self.score_type = Some(score_type.into());
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

impl Query for HasParentQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("query".to_string(), self.query.source());
        body.insert(
            "parent_type".to_string(),
            Value::from(self.parent_type.clone()),
        );
        put(&mut body, "score_type", &self.score_type);
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "_name", &self.query_name);
        if let Some(inner_hit) = &self.inner_hit {
            body.insert("inner_hits".to_string(), inner_hit.source());
        }
        single("has_parent", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::TermQuery;
    use serde_json::json;

    #[test]
    fn test_has_child_query() {
        let query = HasChildQuery::new("blog_tag", TermQuery::new("tag", "something"))
            .score_type("sum")
            .min_children(2)
            .max_children(10)
            .short_circuit_cutoff(8192);
        assert_eq!(
            query.source(),
            json!({"has_child": {
                "query": {"term": {"tag": "something"}},
                "type": "blog_tag",
                "score_type": "sum",
                "min_children": 2,
                "max_children": 10,
                "short_circuit_cutoff": 8192
            }})
        );
    }

    #[test]
    fn test_has_child_query_with_inner_hits() {
        let query = HasChildQuery::new("blog_tag", TermQuery::new("tag", "something"))
            .inner_hit(InnerHit::new().name("comments"));
        assert_eq!(
            query.source(),
            json!({"has_child": {
                "query": {"term": {"tag": "something"}},
                "type": "blog_tag",
                "inner_hits": {"name": "comments"}
            }})
        );
    }

    #[test]
    fn test_has_parent_query() {
        let query = HasParentQuery::new("blog", TermQuery::new("tag", "something"))
            .score_type("score")
            .query_name("parents");
        assert_eq!(
            query.source(),
            json!({"has_parent": {
                "query": {"term": {"tag": "something"}},
                "parent_type": "blog",
                "score_type": "score",
                "_name": "parents"
            }})
        );
    }
}
