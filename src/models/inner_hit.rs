//! Inner hits returned alongside nested and parent/child matches

use serde_json::Value;

use crate::models::json::single;
use crate::models::{FetchSourceContext, ScriptField, SortInfo};
use crate::query::Query;
use crate::search::{Highlight, SearchSource};
use crate::sort::Sorter;

/// Directs the engine to return the inner documents that caused a match
///
/// Inside a nested or parent/child node it renders as the embedded search
/// source plus `name`. At the top level of a request the body is further
/// wrapped by [`InnerHit::top_level_source`].
#[derive(Clone, Debug, Default)]
pub struct InnerHit {
    search_source: SearchSource,
    path: Option<String>,
    inner_type: Option<String>,
    name: Option<String>,
}

impl InnerHit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the inner hits are reported under
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Nested path, for top-level inner hits
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Child or parent type, for top-level inner hits
    pub fn inner_type(mut self, typ: impl Into<String>) -> Self {
        self.inner_type = Some(typ.into());
        self
    }

    pub fn query(mut self, query: impl Query + 'static) -> Self {
        self.search_source = self.search_source.query(query);
        self
    }

    pub fn from(mut self, from: u64) -> Self {
        self.search_source = self.search_source.from(from);
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.search_source = self.search_source.size(size);
        self
    }

    pub fn explain(mut self, explain: bool) -> Self {
        self.search_source = self.search_source.explain(explain);
        self
    }

    pub fn version(mut self, version: bool) -> Self {
        self.search_source = self.search_source.version(version);
        self
    }

    pub fn track_scores(mut self, track_scores: bool) -> Self {
        self.search_source = self.search_source.track_scores(track_scores);
        self
    }

    pub fn fetch_source(mut self, fetch_source: bool) -> Self {
        self.search_source = self.search_source.fetch_source(fetch_source);
        self
    }

    pub fn fetch_source_context(mut self, context: FetchSourceContext) -> Self {
        self.search_source = self.search_source.fetch_source_context(context);
        self
    }

    pub fn no_fields(mut self) -> Self {
        self.search_source = self.search_source.no_fields();
        self
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.search_source = self.search_source.field(name);
        self
    }

    pub fn fielddata_field(mut self, name: impl Into<String>) -> Self {
        self.search_source = self.search_source.fielddata_field(name);
        self
    }

    pub fn script_field(mut self, field: ScriptField) -> Self {
        self.search_source = self.search_source.script_field(field);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.search_source = self.search_source.sort(field, ascending);
        self
    }

    pub fn sort_with_info(mut self, info: SortInfo) -> Self {
        self.search_source = self.search_source.sort_with_info(info);
        self
    }

    pub fn sorter(mut self, sorter: impl Sorter + 'static) -> Self {
        self.search_source = self.search_source.sorter(sorter);
        self
    }

    pub fn highlight(mut self, highlight: Highlight) -> Self {
        self.search_source = self.search_source.highlight(highlight);
        self
    }

    /// Render the embedded body with `name` added
    pub fn source(&self) -> Value {
        let mut body = self.search_source.source();
        if let (Value::Object(map), Some(name)) = (&mut body, &self.name) {
            map.insert("name".to_string(), Value::from(name.clone()));
        }
        body
    }

    /// Render for the `inner_hits` section of a request:
    /// `{"path": {path: body}}`, `{"type": {type: body}}` or the bare body
    pub fn top_level_source(&self) -> Value {
        match (&self.path, &self.inner_type) {
            (Some(path), _) => single("path", single(path.clone(), self.source())),
            (None, Some(typ)) => single("type", single(typ.clone(), self.source())),
            (None, None) => self.source(),
        }
    }
}
