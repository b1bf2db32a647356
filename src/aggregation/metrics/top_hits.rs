use serde_json::Value;

use crate::aggregation::ast::{bucket_setters, render_value, Aggregation, NamedAggregations};
use crate::models::json::Object;
use crate::models::{FetchSourceContext, ScriptField, SortInfo};
use crate::search::{Highlight, SearchSource};
use crate::sort::Sorter;

/// Most relevant documents of each bucket
///
/// The body is a search source restricted to the keys the engine accepts
/// here, rendered the same way as a top-level request.
#[derive(Clone, Debug, Default)]
pub struct TopHitsAggregation {
    search_source: SearchSource,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl TopHitsAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, from: u64) -> Self {
        self.search_source = self.search_source.from(from);
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.search_source = self.search_source.size(size);
        self
    }

    pub fn track_scores(mut self, track_scores: bool) -> Self {
        self.search_source = self.search_source.track_scores(track_scores);
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

    pub fn fetch_source(mut self, fetch: bool) -> Self {
        self.search_source = self.search_source.fetch_source(fetch);
        self
    }

    pub fn fetch_source_context(mut self, context: FetchSourceContext) -> Self {
        self.search_source = self.search_source.fetch_source_context(context);
        self
    }

    pub fn fielddata_field(mut self, field: impl Into<String>) -> Self {
        self.search_source = self.search_source.fielddata_field(field);
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
}

bucket_setters!(TopHitsAggregation);

impl Aggregation for TopHitsAggregation {
    fn source(&self) -> Value {
        render_value(
            "top_hits",
            self.search_source.source(),
            &self.sub_aggregations,
            &self.meta,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_hits_aggregation() {
        let agg = TopHitsAggregation::new()
            .sort("last_activity_date", false)
            .fetch_source_context(FetchSourceContext::new(true).include(["title"]))
            .size(1);
        assert_eq!(
            agg.source(),
            json!({"top_hits": {
                "size": 1,
                "_source": {"includes": ["title"]},
                "sort": [{"last_activity_date": {"order": "desc"}}]
            }})
        );
    }

    #[test]
    fn test_top_hits_without_source() {
        let agg = TopHitsAggregation::new().fetch_source(false).explain(true);
        assert_eq!(
            agg.source(),
            json!({"top_hits": {"explain": true, "_source": false}})
        );
    }
}
