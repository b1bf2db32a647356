//! Core trait for the aggregation family and the pieces shared by its nodes
//!
//! An aggregation renders as `{<type>: body, "aggregations"?: {..}, "meta"?: {..}}`.
//! Sub-aggregations are named by the parent, so a node never knows its own
//! name.

use serde_json::Value;
use std::fmt::Debug;

use crate::models::json::{put, put_object, single, Object};

/// Boxed aggregation node, as held by parents and the search source
pub type BoxedAggregation = Box<dyn Aggregation>;

/// Object-safe cloning for boxed aggregations
pub trait AggregationClone {
    fn clone_box(&self) -> Box<dyn Aggregation>;
}

impl<T> AggregationClone for T
where
    T: 'static + Aggregation + Clone,
{
    fn clone_box(&self) -> Box<dyn Aggregation> {
        Box::new(self.clone())
    }
}

/// Core trait for all aggregation nodes
pub trait Aggregation: AggregationClone + Send + Sync + Debug {
    /// Render the aggregation, e.g. `{"min": {"field": "price"}}`
    fn source(&self) -> Value;
}

impl Clone for Box<dyn Aggregation> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl Aggregation for Box<dyn Aggregation> {
    fn source(&self) -> Value {
        self.as_ref().source()
    }
}

/// Ordered name to aggregation list
///
/// Inserting a name that is already present replaces the earlier entry in
/// its original position.
#[derive(Clone, Debug, Default)]
pub struct NamedAggregations {
    entries: Vec<(String, BoxedAggregation)>,
}

impl NamedAggregations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, aggregation: BoxedAggregation) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = aggregation,
            None => self.entries.push((name, aggregation)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&BoxedAggregation> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, aggregation)| aggregation)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `{name: body, ..}`, or `None` when empty
    pub fn source(&self) -> Option<Value> {
        if self.entries.is_empty() {
            return None;
        }
        let map: Object = self
            .entries
            .iter()
            .map(|(name, aggregation)| (name.clone(), aggregation.source()))
            .collect();
        Some(Value::Object(map))
    }
}

/// Wrap a type body with the optional sub-aggregations and meta object
pub(crate) fn render(
    kind: &str,
    body: Object,
    sub_aggregations: &NamedAggregations,
    meta: &Object,
) -> Value {
    render_value(kind, Value::Object(body), sub_aggregations, meta)
}

/// Like [`render`] for bodies that are not objects of options
pub(crate) fn render_value(
    kind: &str,
    body: Value,
    sub_aggregations: &NamedAggregations,
    meta: &Object,
) -> Value {
    let mut map = Object::new();
    map.insert(kind.to_string(), body);
    if let Some(subs) = sub_aggregations.source() {
        map.insert("aggregations".to_string(), subs);
    }
    put_object(&mut map, "meta", meta);
    Value::Object(map)
}

/// Field or script an aggregation reads its values from
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValuesSource {
    pub field: Option<String>,
    pub script: Option<String>,
    pub script_file: Option<String>,
    pub lang: Option<String>,
    pub format: Option<String>,
    pub params: Object,
}

impl ValuesSource {
    pub(crate) fn apply(&self, map: &mut Object) {
        put(map, "field", &self.field);
        put(map, "script", &self.script);
        put(map, "script_file", &self.script_file);
        put(map, "lang", &self.lang);
        put(map, "format", &self.format);
        put_object(map, "params", &self.params);
    }
}

/// Bucket ordering, rendered as `{<key>: "asc"|"desc"}`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketOrder {
    pub key: String,
    pub ascending: bool,
}

impl BucketOrder {
    pub fn new(key: impl Into<String>, ascending: bool) -> Self {
        Self {
            key: key.into(),
            ascending,
        }
    }

    pub fn source(&self) -> Value {
        let direction = if self.ascending { "asc" } else { "desc" };
        single(self.key.clone(), Value::from(direction))
    }
}

/// `sub_aggregation` and `meta` setters for nodes with `sub_aggregations`
/// and `meta` fields
macro_rules! bucket_setters {
    ($ty:ty) => {
        impl $ty {
            /// Add a named sub-aggregation, replacing one of the same name
            pub fn sub_aggregation(
                mut self,
                name: impl Into<String>,
                aggregation: impl $crate::aggregation::Aggregation + 'static,
            ) -> Self {
                self.sub_aggregations.insert(name, Box::new(aggregation));
                self
            }

            /// Attach a metadata entry echoed back in the response
            pub fn meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
                self.meta.insert(key.into(), value.into());
                self
            }
        }
    };
}

/// Field and script setters for nodes with a `values: ValuesSource` field
macro_rules! values_source_setters {
    ($ty:ty) => {
        impl $ty {
            pub fn field(mut self, field: impl Into<String>) -> Self {
                self.values.field = Some(field.into());
                self
            }

            pub fn script(mut self, script: impl Into<String>) -> Self {
                self.values.script = Some(script.into());
                self
            }

            pub fn script_file(mut self, script_file: impl Into<String>) -> Self {
                self.values.script_file = Some(script_file.into());
                self
            }

            pub fn lang(mut self, lang: impl Into<String>) -> Self {
                self.values.lang = Some(lang.into());
                self
            }

            pub fn format(mut self, format: impl Into<String>) -> Self {
                self.values.format = Some(format.into());
                self
            }

            pub fn param(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
                self.values.params.insert(name.into(), value.into());
                self
            }
        }
    };
}

/// Order helpers for nodes with an `order: Option<BucketOrder>` field
macro_rules! order_setters {
    ($ty:ty) => {
        impl $ty {
            /// Order buckets by an arbitrary key
            pub fn order(mut self, key: impl Into<String>, ascending: bool) -> Self {
                self.order = Some($crate::aggregation::BucketOrder::new(key, ascending));
                self
            }

            /// Order buckets by document count
            pub fn order_by_count(self, ascending: bool) -> Self {
                self.order("_count", ascending)
            }

            /// Order buckets by term
            pub fn order_by_term(self, ascending: bool) -> Self {
                self.order("_term", ascending)
            }

            /// Order buckets by key
            pub fn order_by_key(self, ascending: bool) -> Self {
                self.order("_key", ascending)
            }

            /// Order buckets by a single-valued sub-aggregation
            pub fn order_by_aggregation(self, name: impl Into<String>, ascending: bool) -> Self {
                self.order(name, ascending)
            }

            /// Order buckets by one metric of a multi-valued sub-aggregation
            pub fn order_by_aggregation_and_metric(
                self,
                name: impl Into<String>,
                metric: impl Into<String>,
                ascending: bool,
            ) -> Self {
                self.order(format!("{}.{}", name.into(), metric.into()), ascending)
            }
        }
    };
}

pub(crate) use bucket_setters;
pub(crate) use order_setters;
pub(crate) use values_source_setters;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{AvgAggregation, TermsAggregation};
    use serde_json::json;

    #[derive(Clone, Debug)]
    struct Fixed(&'static str);

    impl Aggregation for Fixed {
        fn source(&self) -> Value {
            single(self.0, json!({}))
        }
    }

    #[test]
    fn test_named_aggregations_replace_in_place() {
        let mut aggs = NamedAggregations::new();
        aggs.insert("a", Box::new(Fixed("min")));
        aggs.insert("b", Box::new(Fixed("max")));
        aggs.insert("a", Box::new(Fixed("sum")));
        assert_eq!(aggs.len(), 2);
        assert_eq!(aggs.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            serde_json::to_string(&aggs.source().unwrap()).unwrap(),
            r#"{"a":{"sum":{}},"b":{"max":{}}}"#
        );
    }

    #[test]
    fn test_empty_named_aggregations_render_nothing() {
        assert!(NamedAggregations::new().source().is_none());
    }

    #[test]
    fn test_boxed_clone_renders_equal() {
        let boxed: BoxedAggregation = Box::new(
            TermsAggregation::new()
                .field("user")
                .sub_aggregation("avg_age", AvgAggregation::new().field("age")),
        );
        let copy = boxed.clone();
        assert_eq!(copy.source(), boxed.source());

        let mut aggs = NamedAggregations::new();
        aggs.insert("users", copy);
        assert_eq!(aggs.clone().source(), aggs.source());
    }

    #[test]
    fn test_bucket_order() {
        assert_eq!(BucketOrder::new("_count", false).source(), json!({"_count": "desc"}));
        assert_eq!(BucketOrder::new("avg_price", true).source(), json!({"avg_price": "asc"}));
    }

    #[test]
    fn test_values_source_elides_unset() {
        let mut values = ValuesSource {
            script: Some("doc['price'].value * factor".to_string()),
            ..Default::default()
        };
        values.params.insert("factor".to_string(), json!(1.2));
        let mut map = Object::new();
        values.apply(&mut map);
        assert_eq!(
            Value::Object(map),
            json!({"script": "doc['price'].value * factor", "params": {"factor": 1.2}})
        );
    }
}
