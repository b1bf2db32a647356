//! Term bucketing: one bucket per distinct value

use serde_json::Value;

use crate::aggregation::ast::{
    bucket_setters, order_setters, render, values_source_setters, Aggregation, BucketOrder,
    NamedAggregations, ValuesSource,
};
use crate::filter::{BoxedFilter, Filter};
use crate::models::json::{put, Object};

/// Include or exclude clause of a terms aggregation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct TermsPattern {
    pattern: Option<String>,
    flags: Option<String>,
    terms: Vec<String>,
}

impl TermsPattern {
    /// An explicit term list wins over a pattern; a pattern with flags
    /// renders as `{pattern, flags}`
    fn source(&self) -> Option<Value> {
        if !self.terms.is_empty() {
            return Some(Value::from(self.terms.clone()));
        }
        let pattern = self.pattern.clone()?;
        match &self.flags {
            Some(flags) if !flags.is_empty() => {
                let mut map = Object::new();
                map.insert("pattern".to_string(), Value::from(pattern));
                map.insert("flags".to_string(), Value::from(flags.clone()));
                Some(Value::Object(map))
            }
            _ => Some(Value::from(pattern)),
        }
    }
}

/// Buckets per distinct term of a field or script
#[derive(Clone, Debug, Default)]
pub struct TermsAggregation {
    values: ValuesSource,
    size: Option<i64>,
    shard_size: Option<i64>,
    required_size: Option<i64>,
    min_doc_count: Option<i64>,
    shard_min_doc_count: Option<i64>,
    order: Option<BucketOrder>,
    include: TermsPattern,
    exclude: TermsPattern,
    execution_hint: Option<String>,
    collect_mode: Option<String>,
    show_term_doc_count_error: Option<bool>,
    value_type: Option<String>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl TermsAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn shard_size(mut self, shard_size: i64) -> Self {
        self.shard_size = Some(shard_size);
        self
    }

    /// Emitted as `required_size` next to `size`
    pub fn required_size(mut self, required_size: i64) -> Self {
        self.required_size = Some(required_size);
        self
    }

    pub fn min_doc_count(mut self, min_doc_count: i64) -> Self {
        self.min_doc_count = Some(min_doc_count);
        self
    }

    pub fn shard_min_doc_count(mut self, min_doc_count: i64) -> Self {
        self.shard_min_doc_count = Some(min_doc_count);
        self
    }

    /// Regular expression selecting the terms to keep
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.pattern = Some(pattern.into());
        self
    }

    /// Java regex flags for the include pattern, e.g. `CANON_EQ|CASE_INSENSITIVE`
    pub fn include_flags(mut self, flags: impl Into<String>) -> Self {
        self.include.flags = Some(flags.into());
        self
    }

    /// Append exact terms to keep
    pub fn include_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.terms.extend(terms.into_iter().map(Into::into));
        self
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.pattern = Some(pattern.into());
        self
    }

    pub fn exclude_flags(mut self, flags: impl Into<String>) -> Self {
        self.exclude.flags = Some(flags.into());
        self
    }

    pub fn exclude_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.terms.extend(terms.into_iter().map(Into::into));
        self
    }

    /// map or ordinals
    pub fn execution_hint(mut self, hint: impl Into<String>) -> Self {
        self.execution_hint = Some(hint.into());
        self
    }

    /// depth_first or breadth_first
    pub fn collect_mode(mut self, mode: impl Into<String>) -> Self {
        self.collect_mode = Some(mode.into());
        self
    }

    pub fn show_term_doc_count_error(mut self, show: bool) -> Self {
        self.show_term_doc_count_error = Some(show);
        self
    }

    pub fn value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }
}

values_source_setters!(TermsAggregation);
order_setters!(TermsAggregation);
bucket_setters!(TermsAggregation);

impl Aggregation for TermsAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        self.values.apply(&mut body);
        put(&mut body, "size", &self.size.filter(|size| *size >= 0));
        put(&mut body, "shard_size", &self.shard_size);
        put(&mut body, "required_size", &self.required_size);
        put(&mut body, "min_doc_count", &self.min_doc_count);
        put(&mut body, "shard_min_doc_count", &self.shard_min_doc_count);
        put(&mut body, "show_term_doc_count_error", &self.show_term_doc_count_error);
        put(&mut body, "collect_mode", &self.collect_mode);
        put(&mut body, "value_type", &self.value_type);
        if let Some(order) = &self.order {
            body.insert("order".to_string(), order.source());
        }
        put(&mut body, "include", &self.include.source());
        put(&mut body, "exclude", &self.exclude.source());
        put(&mut body, "execution_hint", &self.execution_hint);
        render("terms", body, &self.sub_aggregations, &self.meta)
    }
}

/// Terms that are unusually frequent in the matching set compared to a
/// background set
#[derive(Clone, Debug, Default)]
pub struct SignificantTermsAggregation {
    field: Option<String>,
    size: Option<i64>,
    shard_size: Option<i64>,
    required_size: Option<i64>,
    min_doc_count: Option<i64>,
    background_filter: Option<BoxedFilter>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl SignificantTermsAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn shard_size(mut self, shard_size: i64) -> Self {
        self.shard_size = Some(shard_size);
        self
    }

    pub fn required_size(mut self, required_size: i64) -> Self {
        self.required_size = Some(required_size);
        self
    }

    /// Emitted under the camel-case key `minDocCount`
    pub fn min_doc_count(mut self, min_doc_count: i64) -> Self {
        self.min_doc_count = Some(min_doc_count);
        self
    }

    /// Restrict the background set the frequencies are compared against
    pub fn background_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.background_filter = Some(Box::new(filter));
        self
    }
}

bucket_setters!(SignificantTermsAggregation);

impl Aggregation for SignificantTermsAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put(&mut body, "field", &self.field);
        put(&mut body, "size", &self.size);
        put(&mut body, "shard_size", &self.shard_size);
        put(&mut body, "required_size", &self.required_size);
        put(&mut body, "minDocCount", &self.min_doc_count);
        if let Some(filter) = &self.background_filter {
            body.insert("background_filter".to_string(), filter.source());
        }
        render("significant_terms", body, &self.sub_aggregations, &self.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::AvgAggregation;
    use crate::filter::TermFilter;
    use serde_json::json;

    #[test]
    fn test_terms_aggregation() {
        let agg = TermsAggregation::new()
            .field("gender")
            .size(10)
            .order_by_term(false);
        assert_eq!(
            agg.source(),
            json!({"terms": {"field": "gender", "size": 10, "order": {"_term": "desc"}}})
        );
    }

    #[test]
    fn test_terms_aggregation_with_sub_aggregation() {
        let agg = TermsAggregation::new()
            .field("genre")
            .order_by_aggregation("avg_play_count", true)
            .sub_aggregation("avg_play_count", AvgAggregation::new().field("play_count"));
        assert_eq!(
            agg.source(),
            json!({
                "terms": {"field": "genre", "order": {"avg_play_count": "asc"}},
                "aggregations": {"avg_play_count": {"avg": {"field": "play_count"}}}
            })
        );
    }

    #[test]
    fn test_terms_aggregation_order_by_metric() {
        let agg = TermsAggregation::new()
            .field("genre")
            .order_by_aggregation_and_metric("playback_stats", "avg", false);
        assert_eq!(
            agg.source(),
            json!({"terms": {"field": "genre", "order": {"playback_stats.avg": "desc"}}})
        );
    }

    #[test]
    fn test_terms_aggregation_include_exclude() {
        let agg = TermsAggregation::new()
            .field("tags")
            .include(".*sport.*")
            .include_flags("CANON_EQ|CASE_INSENSITIVE")
            .exclude_terms(["water_sports"]);
        assert_eq!(
            agg.source(),
            json!({"terms": {
                "field": "tags",
                "include": {"pattern": ".*sport.*", "flags": "CANON_EQ|CASE_INSENSITIVE"},
                "exclude": ["water_sports"]
            }})
        );
    }

    #[test]
    fn test_terms_aggregation_keeps_required_size() {
        let agg = TermsAggregation::new()
            .field("tags")
            .size(5)
            .required_size(7)
            .min_doc_count(0);
        assert_eq!(
            agg.source(),
            json!({"terms": {"field": "tags", "size": 5, "required_size": 7, "min_doc_count": 0}})
        );
    }

    #[test]
    fn test_significant_terms_aggregation() {
        let agg = SignificantTermsAggregation::new()
            .field("crime_type")
            .min_doc_count(10)
            .required_size(3)
            .background_filter(TermFilter::new("text", "spain"));
        assert_eq!(
            agg.source(),
            json!({"significant_terms": {
                "field": "crime_type",
                "required_size": 3,
                "minDocCount": 10,
                "background_filter": {"term": {"text": "spain"}}
            }})
        );
    }
}
