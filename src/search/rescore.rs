//! Second-pass scoring of the top hits

use serde_json::Value;
use std::fmt::Debug;

use crate::models::json::{put, put_float, Object};
use crate::query::{BoxedQuery, Query, ScoreMode};

/// Boxed rescorer, as held by [`Rescore`]
pub type BoxedRescorer = Box<dyn Rescorer>;

/// Object-safe cloning for boxed rescorers
pub trait RescorerClone {
    fn clone_box(&self) -> Box<dyn Rescorer>;
}

impl<T> RescorerClone for T
where
    T: 'static + Rescorer + Clone,
{
    fn clone_box(&self) -> Box<dyn Rescorer> {
        Box::new(self.clone())
    }
}

/// A rescoring strategy, rendered under its name inside a rescore entry
pub trait Rescorer: RescorerClone + Send + Sync + Debug {
    /// Key the body is placed under, e.g. `query`
    fn name(&self) -> &'static str;

    fn source(&self) -> Value;
}

impl Clone for Box<dyn Rescorer> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl Rescorer for Box<dyn Rescorer> {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn source(&self) -> Value {
        self.as_ref().source()
    }
}

/// Rescores with a second query, mixing both scores by weight
#[derive(Clone, Debug)]
pub struct QueryRescorer {
    query: BoxedQuery,
    query_weight: Option<f64>,
    rescore_query_weight: Option<f64>,
    score_mode: Option<ScoreMode>,
}

impl QueryRescorer {
    pub fn new(query: impl Query + 'static) -> Self {
        Self {
            query: Box::new(query),
            query_weight: None,
            rescore_query_weight: None,
            score_mode: None,
        }
    }

    /// Weight of the original query score
    pub fn query_weight(mut self, weight: f64) -> Self {
        self.query_weight = Some(weight);
        self
    }

    pub fn rescore_query_weight(mut self, weight: f64) -> Self {
        self.rescore_query_weight = Some(weight);
        self
    }

    pub fn score_mode(mut self, mode: ScoreMode) -> Self {
        self.score_mode = Some(mode);
        self
    }
}

impl Rescorer for QueryRescorer {
    fn name(&self) -> &'static str {
        "query"
    }

    fn source(&self) -> Value {
        let mut map = Object::new();
        map.insert("rescore_query".to_string(), self.query.source());
        put_float(&mut map, "query_weight", self.query_weight);
        put_float(&mut map, "rescore_query_weight", self.rescore_query_weight);
        put(&mut map, "score_mode", &self.score_mode.map(|m| m.as_str()));
        Value::Object(map)
    }
}

/// One rescore entry of a search request
///
/// An entry without a rescorer is empty and is skipped by the search
/// source.
#[derive(Clone, Debug, Default)]
pub struct Rescore {
    rescorer: Option<BoxedRescorer>,
    window_size: Option<u64>,
    default_window_size: Option<u64>,
}

impl Rescore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rescorer(mut self, rescorer: impl Rescorer + 'static) -> Self {
        self.rescorer = Some(Box::new(rescorer));
        self
    }

    /// Number of top hits per shard to rescore
    pub fn window_size(mut self, window_size: u64) -> Self {
        self.window_size = Some(window_size);
        self
    }

    /// Window size used when none is set on this entry
    pub fn default_window_size(mut self, window_size: u64) -> Self {
        self.default_window_size = Some(window_size);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rescorer.is_none()
    }

    pub fn source(&self) -> Value {
        self.source_with_default(None)
    }

    /// Render with a default window size inherited from the enclosing
    /// request, which takes the place of this entry's own default
    pub fn source_with_default(&self, inherited_window_size: Option<u64>) -> Value {
        let window_size = self
            .window_size
            .or(inherited_window_size)
            .or(self.default_window_size);
        let mut map = Object::new();
        put(&mut map, "window_size", &window_size);
        if let Some(rescorer) = &self.rescorer {
            map.insert(rescorer.name().to_string(), rescorer.source());
        }
        Value::Object(map)
    }
}
