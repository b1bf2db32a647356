//! Core trait for the query family
//!
//! Every query variant renders itself into the JSON body the engine expects
//! wherever a query is allowed. Composite queries own their children as boxed
//! trait objects and render them recursively.

use serde_json::Value;
use std::fmt::Debug;

use crate::filter::BoxedFilter;
use crate::models::json::Object;

/// Boxed query node, as held by composites
pub type BoxedQuery = Box<dyn Query>;

/// Object-safe cloning for boxed queries
pub trait QueryClone {
    fn clone_box(&self) -> Box<dyn Query>;
}

impl<T> QueryClone for T
where
    T: 'static + Query + Clone,
{
    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}

/// Core trait for all query nodes
///
/// Rendering is pure: calling [`Query::source`] twice yields equal values and
/// never mutates the node.
pub trait Query: QueryClone + Send + Sync + Debug {
    /// Render the query, e.g. `{"term": {"user": "kimchy"}}`
    fn source(&self) -> Value;
}

impl Clone for Box<dyn Query> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl Query for Box<dyn Query> {
    fn source(&self) -> Value {
        self.as_ref().source()
    }
}

/// The one-of `query`/`filter` child accepted by nested, parent/child and
/// scoring nodes
#[derive(Clone, Debug)]
pub enum QueryOrFilter {
    Query(BoxedQuery),
    Filter(BoxedFilter),
}

impl QueryOrFilter {
    /// Insert the child under `query` or `filter`
    pub(crate) fn apply(&self, map: &mut Object) {
        match self {
            QueryOrFilter::Query(query) => {
                map.insert("query".to_string(), query.source());
            }
            QueryOrFilter::Filter(filter) => {
                map.insert("filter".to_string(), filter.source());
            }
        }
    }
}
