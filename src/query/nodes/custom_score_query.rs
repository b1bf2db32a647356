//! Script-scored queries from the 0.90 and 1.0 releases
//!
//! Both were superseded by `function_score` but are still accepted by 1.x
//! clusters.

use serde_json::Value;

use crate::filter::{BoxedFilter, Filter};
use crate::models::json::{float, put, put_float, put_object, single, Object};
use crate::query::ast::{Query, QueryOrFilter};

/// Query scored by a script over the inner query's matches
#[derive(Clone, Debug)]
pub struct CustomScoreQuery {
    inner: Option<QueryOrFilter>,
    script: Option<String>,
    lang: Option<String>,
    boost: Option<f64>,
    params: Object,
}

impl CustomScoreQuery {
    pub fn new() -> Self {
        Self {
            inner: None,
            script: None,
            lang: None,
            boost: None,
            params: Object::new(),
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

    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl Default for CustomScoreQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query for CustomScoreQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        if let Some(inner) = &self.inner {
            inner.apply(&mut body);
        }
        put(&mut body, "script", &self.script);
        put(&mut body, "lang", &self.lang);
        put_float(&mut body, "boost", self.boost);
        put_object(&mut body, "params", &self.params);
        single("custom_score", Value::Object(body))
    }
}

/// Score attached to one filter of a [`CustomFiltersScoreQuery`]
#[derive(Clone, Debug, PartialEq)]
pub enum FilterScore {
    Boost(f64),
    Script(String),
}

/// Query scored by the first (or combined) matching filter's boost or script
#[derive(Clone, Debug, Default)]
pub struct CustomFiltersScoreQuery {
    inner: Option<QueryOrFilter>,
    filters: Vec<(BoxedFilter, FilterScore)>,
    score_mode: Option<String>,
    max_boost: Option<f64>,
    lang: Option<String>,
    params: Object,
}

impl CustomFiltersScoreQuery {
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

    /// Boost documents matching `filter` by a constant
    pub fn add_boost(mut self, filter: impl Filter + 'static, boost: f64) -> Self {
        self.filters.push((Box::new(filter), FilterScore::Boost(boost)));
        self
    }

    /// Score documents matching `filter` with a script
    pub fn add_script(mut self, filter: impl Filter + 'static, script: impl Into<String>) -> Self {
        self.filters
            .push((Box::new(filter), FilterScore::Script(script.into())));
        self
    }

    /// first, min, max, total, avg or multiply
    pub fn score_mode(mut self, mode: impl Into<String>) -> Self {
        self.score_mode = Some(mode.into());
        self
    }

    pub fn max_boost(mut self, max_boost: f64) -> Self {
        self.max_boost = Some(max_boost);
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl Query for CustomFiltersScoreQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        if let Some(inner) = &self.inner {
            inner.apply(&mut body);
        }
        let filters = self
            .filters
            .iter()
            .map(|(filter, score)| {
                let mut entry = Object::new();
                entry.insert("filter".to_string(), filter.source());
                match score {
                    FilterScore::Boost(boost) => {
                        entry.insert("boost".to_string(), float(*boost));
                    }
                    FilterScore::Script(script) => {
                        entry.insert("script".to_string(), Value::from(script.clone()));
                    }
                }
                Value::Object(entry)
            })
            .collect();
        body.insert("filters".to_string(), Value::Array(filters));
        put(&mut body, "score_mode", &self.score_mode);
        put_float(&mut body, "max_boost", self.max_boost);
        put(&mut body, "lang", &self.lang);
        put_object(&mut body, "params", &self.params);
        single("custom_filters_score", Value::Object(body))
    }
}
