//! Parent/child filters

use serde_json::Value;

use crate::filter::ast::{cache_options_setters, CacheOptions, Filter};
use crate::models::json::{put, single, Object};
use crate::models::InnerHit;
use crate::query::{Query, QueryOrFilter};

/// Filter on parents whose children match
#[derive(Clone, Debug)]
pub struct HasChildFilter {
    child_type: String,
    inner: Option<QueryOrFilter>,
    min_children: Option<i64>,
    max_children: Option<i64>,
    short_circuit_cutoff: Option<i64>,
    inner_hit: Option<InnerHit>,
    options: CacheOptions,
}

impl HasChildFilter {
    pub fn new(child_type: impl Into<String>) -> Self {
        Self {
            child_type: child_type.into(),
            inner: None,
            min_children: None,
            max_children: None,
            short_circuit_cutoff: None,
            inner_hit: None,
            options: CacheOptions::default(),
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

    pub fn inner_hit(mut self, inner_hit: InnerHit) -> Self {
        self.inner_hit = Some(inner_hit);
        self
    }
}

cache_options_setters!(HasChildFilter);

impl Filter for HasChildFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("type".to_string(), Value::from(self.child_type.clone()));
        if let Some(inner) = &self.inner {
            inner.apply(&mut body);
        }
        put(&mut body, "min_children", &self.min_children);
        put(&mut body, "max_children", &self.max_children);
        put(&mut body, "short_circuit_cutoff", &self.short_circuit_cutoff);
        self.options.apply(&mut body);
        if let Some(inner_hit) = &self.inner_hit {
            body.insert("inner_hits".to_string(), inner_hit.source());
        }
        single("has_child", Value::Object(body))
    }
}

/// Filter on children whose parent matches
#[derive(Clone, Debug)]
pub struct HasParentFilter {
    parent_type: String,
    inner: Option<QueryOrFilter>,
    inner_hit: Option<InnerHit>,
    options: CacheOptions,
}

impl HasParentFilter {
    pub fn new(parent_type: impl Into<String>) -> Self {
        Self {
            parent_type: parent_type.into(),
            inner: None,
            inner_hit: None,
            options: CacheOptions::default(),
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

    pub fn inner_hit(mut self, inner_hit: InnerHit) -> Self {
        self.inner_hit = Some(inner_hit);
        self
    }
}

cache_options_setters!(HasParentFilter);

impl Filter for HasParentFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("parent_type".to_string(), Value::from(self.parent_type.clone()));
        if let Some(inner) = &self.inner {
            inner.apply(&mut body);
        }
        self.options.apply(&mut body);
        if let Some(inner_hit) = &self.inner_hit {
            body.insert("inner_hits".to_string(), inner_hit.source());
        }
        single("has_parent", Value::Object(body))
    }
}
