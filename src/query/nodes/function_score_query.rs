//! Function-score query - rescoring matches with score functions

use serde_json::Value;

use crate::filter::{BoxedFilter, Filter};
use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::{Query, QueryOrFilter};
use crate::query::score_functions::{apply_function, BoxedScoreFunction, ScoreFunction};
use crate::query::types::{BoostMode, ScoreMode};

/// Query that modifies the score of the documents matched by a query or filter
///
/// With exactly one function and no filter attached to it, the function body
/// sits directly inside `function_score`; otherwise every function renders
/// as an entry of the `functions` array in insertion order.
///
/// # Example
///
/// ```json
/// {
///   "function_score": {
///     "query": { "term": { "name.last": "banon" } },
///     "functions": [
///       { "filter": { "term": { "name.last": "banon" } }, "boost_factor": 3 },
///       { "boost_factor": 3 }
///     ],
///     "score_mode": "avg"
///   }
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct FunctionScoreQuery {
    inner: Option<QueryOrFilter>,
    functions: Vec<(Option<BoxedFilter>, BoxedScoreFunction)>,
    score_mode: Option<ScoreMode>,
    boost_mode: Option<BoostMode>,
    max_boost: Option<f64>,
    boost: Option<f64>,
    min_score: Option<f64>,
}

impl FunctionScoreQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Query + 'static) -> Self {
        self.inner = Some(QueryOrFilter::Query(Box::new(query)));
        self
    }

    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.inner = Some(QueryOrFilter::Filter(Box::new(filter)));
        self
    }

    /// Append a function applied to documents matching `filter`
    pub fn add(
        mut self,
        filter: impl Filter + 'static,
        function: impl ScoreFunction + 'static,
    ) -> Self {
        self.functions
            .push((Some(Box::new(filter)), Box::new(function)));
        self
    }

    /// Append a function applied to every document
    pub fn add_score_function(mut self, function: impl ScoreFunction + 'static) -> Self {
        self.functions.push((None, Box::new(function)));
        self
    }

    pub fn score_mode(mut self, mode: ScoreMode) -> Self {
        self.score_mode = Some(mode);
        self
    }

    pub fn boost_mode(mut self, mode: BoostMode) -> Self {
        self.boost_mode = Some(mode);
        self
    }

    pub fn max_boost(mut self, max_boost: f64) -> Self {
        self.max_boost = Some(max_boost);
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }
}

impl Query for FunctionScoreQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        if let Some(inner) = &self.inner {
            inner.apply(&mut body);
        }

        match self.functions.as_slice() {
            [(None, function)] => apply_function(function.as_ref(), &mut body),
            functions => {
                let rendered: Vec<Value> = functions
                    .iter()
                    .map(|(filter, function)| {
                        let mut entry = Object::new();
                        if let Some(filter) = filter {
                            entry.insert("filter".to_string(), filter.source());
                        }
                        apply_function(function.as_ref(), &mut entry);
                        Value::Object(entry)
                    })
                    .collect();
                body.insert("functions".to_string(), Value::Array(rendered));
            }
        }

        put(&mut body, "score_mode", &self.score_mode.map(|m| m.as_str()));
        put(&mut body, "boost_mode", &self.boost_mode.map(|m| m.as_str()));
        put_float(&mut body, "max_boost", self.max_boost);
        put_float(&mut body, "boost", self.boost);
        put_float(&mut body, "min_score", self.min_score);
        single("function_score", Value::Object(body))
    }
}
