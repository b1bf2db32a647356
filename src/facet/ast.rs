//! Core trait for the legacy facet family
//!
//! Unlike other nodes a facet carries auxiliary keys beside its typed body:
//! `facet_filter`, `nested`, `global` and `mode`.

use serde_json::Value;
use std::fmt::Debug;

use crate::filter::BoxedFilter;
use crate::models::json::{put, put_object, Object};

/// Boxed facet node, as held by the search source
pub type BoxedFacet = Box<dyn Facet>;

/// Object-safe cloning for boxed facets
pub trait FacetClone {
    fn clone_box(&self) -> Box<dyn Facet>;
}

impl<T> FacetClone for T
where
    T: 'static + Facet + Clone,
{
    fn clone_box(&self) -> Box<dyn Facet> {
        Box::new(self.clone())
    }
}

/// Core trait for all facet nodes
pub trait Facet: FacetClone + Send + Sync + Debug {
    /// Render the facet, e.g. `{"terms": {"field": "tag", "size": 10}}`
    fn source(&self) -> Value;
}

impl Clone for Box<dyn Facet> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl Facet for Box<dyn Facet> {
    fn source(&self) -> Value {
        self.as_ref().source()
    }
}

/// Scope options accepted by every facet
#[derive(Clone, Debug, Default)]
pub struct FacetOptions {
    pub facet_filter: Option<BoxedFilter>,
    pub nested: Option<String>,
    pub global: Option<bool>,
    pub mode: Option<String>,
}

impl FacetOptions {
    /// Build `{<kind>: body}` plus the configured scope options
    pub(crate) fn render(&self, kind: &str, body: Value) -> Value {
        let mut map = Object::new();
        map.insert(kind.to_string(), body);
        if let Some(filter) = &self.facet_filter {
            map.insert("facet_filter".to_string(), filter.source());
        }
        put(&mut map, "nested", &self.nested);
        put(&mut map, "global", &self.global);
        put(&mut map, "mode", &self.mode);
        Value::Object(map)
    }
}

/// Scope setters for facets that keep their [`FacetOptions`] in a field
/// named `options`
macro_rules! facet_options_setters {
    ($ty:ty) => {
        impl $ty {
            /// Restrict the documents the facet is computed on
            pub fn facet_filter(mut self, filter: impl $crate::filter::Filter + 'static) -> Self {
                self.options.facet_filter = Some(Box::new(filter));
                self
            }

            /// Compute the facet over nested documents under `path`
            pub fn nested(mut self, path: impl Into<String>) -> Self {
                self.options.nested = Some(path.into());
                self
            }

            /// Compute the facet over every document, ignoring the query
            pub fn global(mut self, global: bool) -> Self {
                self.options.global = Some(global);
                self
            }

            /// collector or post
            pub fn mode(mut self, mode: impl Into<String>) -> Self {
                self.options.mode = Some(mode.into());
                self
            }
        }
    };
}

pub(crate) use facet_options_setters;

/// Script body keys shared by the script-driven facets
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FacetScript {
    pub lang: Option<String>,
    pub params: Object,
}

impl FacetScript {
    pub(crate) fn apply(&self, map: &mut Object) {
        put(map, "lang", &self.lang);
        put_object(map, "params", &self.params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::TermsFacet;
    use crate::filter::TermFilter;
    use serde_json::json;

    #[test]
    fn test_boxed_clone_renders_equal() {
        let boxed: BoxedFacet = Box::new(
            TermsFacet::new()
                .field("tags")
                .size(5)
                .facet_filter(TermFilter::new("user", "kimchy")),
        );
        let copy = boxed.clone();
        assert_eq!(copy.source(), boxed.source());
        assert_eq!(copy.source()["facet_filter"], json!({"term": {"user": "kimchy"}}));
    }

    #[test]
    fn test_facet_options_sit_beside_the_body() {
        let options = FacetOptions {
            facet_filter: Some(Box::new(TermFilter::new("user", "olivere"))),
            nested: Some("comments".to_string()),
            global: Some(true),
            mode: Some("collector".to_string()),
        };
        assert_eq!(
            options.render("terms", json!({"field": "tag", "size": 10})),
            json!({
                "terms": {"field": "tag", "size": 10},
                "facet_filter": {"term": {"user": "olivere"}},
                "nested": "comments",
                "global": true,
                "mode": "collector"
            })
        );
    }

    #[test]
    fn test_default_options_render_only_the_body() {
        assert_eq!(
            FacetOptions::default().render("statistical", json!({"field": "price"})),
            json!({"statistical": {"field": "price"}})
        );
    }
}
