//! Assembles the body of a search request
//!
//! [`SearchSource`] collects the query, filters, pagination, sorting,
//! facets, aggregations, highlighting, suggesters and rescorers and renders
//! them in one pass:
//!
//! ```json
//! {
//!   "query": { "match_all": {} },
//!   "post_filter": { "term": { "tag": "important" } },
//!   "highlight": { "fields": { "content": {} } }
//! }
//! ```

use serde_json::Value;
use tracing::debug;

use crate::aggregation::{Aggregation, NamedAggregations};
use crate::config::SearchDefaults;
use crate::error::Result;
use crate::facet::{BoxedFacet, Facet};
use crate::filter::{BoxedFilter, Filter};
use crate::models::json::{float, one_or_many, put, put_float, Object};
use crate::models::{FetchSourceContext, InnerHit, PartialField, ScriptField, SortInfo};
use crate::query::{BoxedQuery, Query};
use crate::search::highlight::Highlight;
use crate::search::rescore::Rescore;
use crate::sort::{BoxedSorter, Sorter};
use crate::suggest::{BoxedSuggester, Suggester};

/// Replaces the entry named `name` in place or appends it
fn upsert<T>(entries: &mut Vec<(String, T)>, name: String, value: T) {
    match entries.iter_mut().find(|(existing, _)| *existing == name) {
        Some(entry) => entry.1 = value,
        None => entries.push((name, value)),
    }
}

/// Body of a search request
///
/// Every setter consumes the source and returns it, so a request is built
/// in one expression and rendered with [`SearchSource::source`].
#[derive(Clone, Debug, Default)]
pub struct SearchSource {
    query: Option<BoxedQuery>,
    post_filter: Option<BoxedFilter>,
    from: Option<u64>,
    size: Option<u64>,
    min_score: Option<f64>,
    version: Option<bool>,
    explain: Option<bool>,
    timeout: Option<String>,
    fetch_source_context: Option<FetchSourceContext>,
    field_names: Option<Vec<String>>,
    fielddata_fields: Vec<String>,
    partial_fields: Vec<PartialField>,
    script_fields: Vec<ScriptField>,
    sorters: Vec<BoxedSorter>,
    sorts: Vec<SortInfo>,
    track_scores: Option<bool>,
    index_boosts: Vec<(String, f64)>,
    facets: Vec<(String, BoxedFacet)>,
    aggregations: NamedAggregations,
    highlight: Option<Highlight>,
    suggesters: Vec<BoxedSuggester>,
    global_suggest_text: Option<String>,
    rescores: Vec<Rescore>,
    default_rescore_window_size: Option<u64>,
    stats: Vec<String>,
    inner_hits: Vec<(String, InnerHit)>,
}

impl SearchSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Query + 'static) -> Self {
        self.query = Some(Box::new(query));
        self
    }

    /// Filter applied to the hits after aggregations and facets are computed
    pub fn post_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.post_filter = Some(Box::new(filter));
        self
    }

    /// Offset of the first hit; emitted whenever set, zero included
    pub fn from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Return the version of each hit
    pub fn version(mut self, version: bool) -> Self {
        self.version = Some(version);
        self
    }

    pub fn explain(mut self, explain: bool) -> Self {
        self.explain = Some(explain);
        self
    }

    /// Server-side timeout as a time value, e.g. `5s`
    pub fn timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    pub fn timeout_in_millis(self, millis: u64) -> Self {
        self.timeout(format!("{millis}ms"))
    }

    /// Enable or disable `_source`, keeping any configured patterns
    pub fn fetch_source(mut self, fetch_source: bool) -> Self {
        self.fetch_source_context = Some(match self.fetch_source_context.take() {
            Some(context) => context.set_fetch_source(fetch_source),
            None => FetchSourceContext::new(fetch_source),
        });
        self
    }

    pub fn fetch_source_context(mut self, context: FetchSourceContext) -> Self {
        self.fetch_source_context = Some(context);
        self
    }

    /// Return no stored fields at all; renders `"fields": []`
    pub fn no_fields(mut self) -> Self {
        self.field_names = Some(Vec::new());
        self
    }

    /// Append a stored field to return
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.field_names
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_names
            .get_or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn fielddata_field(mut self, name: impl Into<String>) -> Self {
        self.fielddata_fields.push(name.into());
        self
    }

    pub fn fielddata_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fielddata_fields
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn partial_field(mut self, field: PartialField) -> Self {
        self.partial_fields.push(field);
        self
    }

    pub fn script_field(mut self, field: ScriptField) -> Self {
        self.script_fields.push(field);
        self
    }

    /// Sort on a field by name
    pub fn sort(self, field: impl Into<String>, ascending: bool) -> Self {
        self.sort_with_info(SortInfo::new(field).ascending(ascending))
    }

    pub fn sort_with_info(mut self, info: SortInfo) -> Self {
        self.sorts.push(info);
        self
    }

    /// Add a structured sorter; once any is present the plain sort list is
    /// ignored
    pub fn sorter(mut self, sorter: impl Sorter + 'static) -> Self {
        self.sorters.push(Box::new(sorter));
        self
    }

    /// Compute scores even when sorting on a field
    pub fn track_scores(mut self, track_scores: bool) -> Self {
        self.track_scores = Some(track_scores);
        self
    }

    pub fn index_boost(mut self, index: impl Into<String>, boost: f64) -> Self {
        upsert(&mut self.index_boosts, index.into(), boost);
        self
    }

    pub fn facet(mut self, name: impl Into<String>, facet: impl Facet + 'static) -> Self {
        upsert(&mut self.facets, name.into(), Box::new(facet) as BoxedFacet);
        self
    }

    pub fn aggregation(
        mut self,
        name: impl Into<String>,
        aggregation: impl Aggregation + 'static,
    ) -> Self {
        self.aggregations.insert(name, Box::new(aggregation));
        self
    }

    pub fn highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub fn suggester(mut self, suggester: impl Suggester + 'static) -> Self {
        self.suggesters.push(Box::new(suggester));
        self
    }

    /// Text shared by every suggester that sets none of its own
    pub fn global_suggest_text(mut self, text: impl Into<String>) -> Self {
        self.global_suggest_text = Some(text.into());
        self
    }

    pub fn rescorer(mut self, rescore: Rescore) -> Self {
        self.rescores.push(rescore);
        self
    }

    /// Window size for rescores that do not set their own
    pub fn default_rescore_window_size(mut self, window_size: u64) -> Self {
        self.default_rescore_window_size = Some(window_size);
        self
    }

    /// Statistics groups the request is counted under
    pub fn stats<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stats.extend(groups.into_iter().map(Into::into));
        self
    }

    /// Top-level inner hits, independent of any nested or parent/child query
    pub fn inner_hit(mut self, name: impl Into<String>, inner_hit: InnerHit) -> Self {
        upsert(&mut self.inner_hits, name.into(), inner_hit);
        self
    }

    /// Fill unset options from configured defaults
    pub fn with_defaults(mut self, defaults: &SearchDefaults) -> Self {
        debug!("Applying search defaults {:?}", defaults);
        if self.size.is_none() {
            self.size = defaults.size;
        }
        if self.timeout.is_none() {
            self.timeout = defaults.timeout_ms.map(|ms| format!("{ms}ms"));
        }
        if self.default_rescore_window_size.is_none() {
            self.default_rescore_window_size = defaults.rescore_window_size;
        }
        if self.track_scores.is_none() {
            self.track_scores = defaults.track_scores;
        }
        if self.explain.is_none() {
            self.explain = defaults.explain;
        }
        self
    }

    fn sort_source(&self) -> Option<Value> {
        let sorts: Vec<Value> = if self.sorters.is_empty() {
            self.sorts.iter().map(SortInfo::source).collect()
        } else {
            self.sorters.iter().map(|sorter| sorter.source()).collect()
        };
        (!sorts.is_empty()).then_some(Value::Array(sorts))
    }

    fn suggest_source(&self) -> Option<Value> {
        if self.suggesters.is_empty() {
            return None;
        }
        let mut suggest = Object::new();
        for suggester in &self.suggesters {
            suggest.insert(suggester.name().to_string(), suggester.source());
        }
        put(&mut suggest, "text", &self.global_suggest_text);
        Some(Value::Object(suggest))
    }

    fn rescore_source(&self) -> Option<Value> {
        let rescores = self
            .rescores
            .iter()
            .filter(|rescore| !rescore.is_empty())
            .map(|rescore| rescore.source_with_default(self.default_rescore_window_size))
            .collect();
        one_or_many(rescores)
    }

    fn inner_hits_source(&self) -> Option<Value> {
        if self.inner_hits.is_empty() {
            return None;
        }
        let mut map = Object::new();
        for (name, inner_hit) in &self.inner_hits {
            map.insert(name.clone(), inner_hit.top_level_source());
        }
        Some(Value::Object(map))
    }

    /// Render the request body; an empty source renders `{}`
    pub fn source(&self) -> Value {
        let mut map = Object::new();
        put(&mut map, "from", &self.from);
        put(&mut map, "size", &self.size);
        put(&mut map, "timeout", &self.timeout);
        if let Some(query) = &self.query {
            map.insert("query".to_string(), query.source());
        }
        if let Some(filter) = &self.post_filter {
            map.insert("post_filter".to_string(), filter.source());
        }
        put_float(&mut map, "min_score", self.min_score);
        put(&mut map, "version", &self.version);
        put(&mut map, "explain", &self.explain);
        if let Some(context) = &self.fetch_source_context {
            map.insert("_source".to_string(), context.source());
        }

        if let Some(names) = &self.field_names {
            let fields = match names.as_slice() {
                [only] => Value::from(only.clone()),
                many => Value::from(many.to_vec()),
            };
            map.insert("fields".to_string(), fields);
        }
        if !self.fielddata_fields.is_empty() {
            map.insert(
                "fielddata_fields".to_string(),
                Value::from(self.fielddata_fields.clone()),
            );
        }
        if !self.partial_fields.is_empty() {
            let mut partials = Object::new();
            for field in &self.partial_fields {
                partials.insert(field.name().to_string(), field.source());
            }
            map.insert("partial_fields".to_string(), Value::Object(partials));
        }
        if !self.script_fields.is_empty() {
            let mut scripts = Object::new();
            for field in &self.script_fields {
                scripts.insert(field.name().to_string(), field.source());
            }
            map.insert("script_fields".to_string(), Value::Object(scripts));
        }

        if let Some(sort) = self.sort_source() {
            map.insert("sort".to_string(), sort);
        }
        put(&mut map, "track_scores", &self.track_scores);
        if !self.index_boosts.is_empty() {
            let mut boosts = Object::new();
            for (index, boost) in &self.index_boosts {
                boosts.insert(index.clone(), float(*boost));
            }
            map.insert("indices_boost".to_string(), Value::Object(boosts));
        }
        if !self.facets.is_empty() {
            let mut facets = Object::new();
            for (name, facet) in &self.facets {
                facets.insert(name.clone(), facet.source());
            }
            map.insert("facets".to_string(), Value::Object(facets));
        }
        if let Some(aggregations) = self.aggregations.source() {
            map.insert("aggregations".to_string(), aggregations);
        }
        if let Some(highlight) = &self.highlight {
            map.insert("highlight".to_string(), highlight.source());
        }
        if let Some(suggest) = self.suggest_source() {
            map.insert("suggest".to_string(), suggest);
        }
        if let Some(rescore) = self.rescore_source() {
            map.insert("rescore".to_string(), rescore);
        }
        if !self.stats.is_empty() {
            map.insert("stats".to_string(), Value::from(self.stats.clone()));
        }
        if let Some(inner_hits) = self.inner_hits_source() {
            map.insert("inner_hits".to_string(), inner_hits);
        }
        Value::Object(map)
    }

    /// Serialize the request body as compact JSON text
    pub fn to_json_string(&self) -> Result<String> {
        let text = serde_json::to_string(&self.source())?;
        debug!("Rendered search source ({} bytes)", text.len());
        Ok(text)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        let text = serde_json::to_string_pretty(&self.source())?;
        debug!("Rendered search source ({} bytes)", text.len());
        Ok(text)
    }
}
