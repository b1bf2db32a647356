//! Filters without field bindings: type, match_all and limit

use serde_json::Value;

use crate::filter::ast::Filter;
use crate::models::json::single;

/// Filter on the document mapping type
#[derive(Clone, Debug)]
pub struct TypeFilter {
    doc_type: String,
}

impl TypeFilter {
    pub fn new(doc_type: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
        }
    }
}

impl Filter for TypeFilter {
    fn source(&self) -> Value {
        single("type", single("value", Value::from(self.doc_type.clone())))
    }
}

/// Filter matching every document
#[derive(Clone, Debug, Default)]
pub struct MatchAllFilter;

impl MatchAllFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for MatchAllFilter {
    fn source(&self) -> Value {
        single("match_all", Value::Object(Default::default()))
    }
}

/// Filter limiting the number of documents examined per shard
#[derive(Clone, Debug)]
pub struct LimitFilter {
    limit: u64,
}

impl LimitFilter {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Filter for LimitFilter {
    fn source(&self) -> Value {
        single("limit", single("value", Value::from(self.limit)))
    }
}
