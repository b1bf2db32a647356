//! Single-bucket aggregations scoped by structure rather than by value

use serde_json::Value;

use crate::aggregation::ast::{bucket_setters, render, Aggregation, NamedAggregations};
use crate::models::json::{put, Object};

/// Bucket of documents missing a field value
#[derive(Clone, Debug, Default)]
pub struct MissingAggregation {
    field: Option<String>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl MissingAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

bucket_setters!(MissingAggregation);

impl Aggregation for MissingAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put(&mut body, "field", &self.field);
        render("missing", body, &self.sub_aggregations, &self.meta)
    }
}

/// Bucket of the nested documents under `path`
#[derive(Clone, Debug)]
pub struct NestedAggregation {
    path: String,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl NestedAggregation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sub_aggregations: NamedAggregations::new(),
            meta: Object::new(),
        }
    }
}

bucket_setters!(NestedAggregation);

impl Aggregation for NestedAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("path".to_string(), Value::from(self.path.clone()));
        render("nested", body, &self.sub_aggregations, &self.meta)
    }
}

/// Joins nested buckets back to the root document, or to `path`
#[derive(Clone, Debug, Default)]
pub struct ReverseNestedAggregation {
    path: Option<String>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl ReverseNestedAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

bucket_setters!(ReverseNestedAggregation);

impl Aggregation for ReverseNestedAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put(&mut body, "path", &self.path);
        render("reverse_nested", body, &self.sub_aggregations, &self.meta)
    }
}

/// Bucket of the child documents of the given type
#[derive(Clone, Debug)]
pub struct ChildrenAggregation {
    child_type: String,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl ChildrenAggregation {
    pub fn new(child_type: impl Into<String>) -> Self {
        Self {
            child_type: child_type.into(),
            sub_aggregations: NamedAggregations::new(),
            meta: Object::new(),
        }
    }
}

bucket_setters!(ChildrenAggregation);

impl Aggregation for ChildrenAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("type".to_string(), Value::from(self.child_type.clone()));
        render("children", body, &self.sub_aggregations, &self.meta)
    }
}

/// Bucket of every document in the search context, ignoring the query
#[derive(Clone, Debug, Default)]
pub struct GlobalAggregation {
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl GlobalAggregation {
    pub fn new() -> Self {
        Self::default()
    }
}

bucket_setters!(GlobalAggregation);

impl Aggregation for GlobalAggregation {
    fn source(&self) -> Value {
        render("global", Object::new(), &self.sub_aggregations, &self.meta)
    }
}
