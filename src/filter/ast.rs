//! Core trait for the filter family
//!
//! Filters mirror queries but do not score. Most variants accept the
//! `_cache`, `_cache_key` and `_name` options, collected in [`CacheOptions`].

use serde_json::Value;
use std::fmt::Debug;

use crate::models::json::{put, Object};

/// Boxed filter node, as held by composites
pub type BoxedFilter = Box<dyn Filter>;

/// Object-safe cloning for boxed filters
pub trait FilterClone {
    fn clone_box(&self) -> Box<dyn Filter>;
}

impl<T> FilterClone for T
where
    T: 'static + Filter + Clone,
{
    fn clone_box(&self) -> Box<dyn Filter> {
        Box::new(self.clone())
    }
}

/// Core trait for all filter nodes
pub trait Filter: FilterClone + Send + Sync + Debug {
    /// Render the filter, e.g. `{"term": {"user": "kimchy"}}`
    fn source(&self) -> Value;
}

impl Clone for Box<dyn Filter> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl Filter for Box<dyn Filter> {
    fn source(&self) -> Value {
        self.as_ref().source()
    }
}

/// Filter cache settings and the optional filter name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheOptions {
    pub cache: Option<bool>,
    pub cache_key: Option<String>,
    pub name: Option<String>,
}

impl CacheOptions {
    /// Write the configured options into a filter body
    pub(crate) fn apply(&self, map: &mut Object) {
        put(map, "_cache", &self.cache);
        put(map, "_cache_key", &self.cache_key);
        put(map, "_name", &self.name);
    }
}

/// Implements the `cache`, `cache_key` and `filter_name` setters for a
/// filter that keeps its [`CacheOptions`] in a field named `options`
macro_rules! cache_options_setters {
    ($ty:ty) => {
        impl $ty {
            /// Set whether the engine caches the filter result
            pub fn cache(mut self, cache: bool) -> Self {
                self.options.cache = Some(cache);
                self
            }

            /// Set the key under which the filter result is cached
            pub fn cache_key(mut self, key: impl Into<String>) -> Self {
                self.options.cache_key = Some(key.into());
                self
            }

            /// Name the filter so matches report it under `matched_filters`
            pub fn filter_name(mut self, name: impl Into<String>) -> Self {
                self.options.name = Some(name.into());
                self
            }
        }
    };
}

pub(crate) use cache_options_setters;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{AndFilter, RangeFilter, TermFilter};
    use serde_json::json;

    #[test]
    fn test_boxed_clone_renders_equal() {
        let boxed: BoxedFilter = Box::new(
            AndFilter::new()
                .add(TermFilter::new("user", "kimchy"))
                .add(RangeFilter::new("age").gte(18))
                .cache(true),
        );
        let copy = boxed.clone();
        assert_eq!(copy.source(), boxed.source());
        assert_eq!(copy.source()["and"]["_cache"], json!(true));
    }

    #[test]
    fn test_cache_options_only_emit_when_set() {
        let mut map = Object::new();
        CacheOptions::default().apply(&mut map);
        assert!(map.is_empty());

        let options = CacheOptions {
            cache: Some(false),
            cache_key: None,
            name: Some("recent".to_string()),
        };
        options.apply(&mut map);
        assert_eq!(Value::Object(map), json!({"_cache": false, "_name": "recent"}));
    }
}
