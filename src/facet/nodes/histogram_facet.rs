//! Histogram facets over numbers, scripts and dates

use serde_json::Value;

use crate::facet::ast::{facet_options_setters, Facet, FacetOptions, FacetScript};
use crate::models::json::{put, put_float, Object};

/// Counts per fixed numeric interval
#[derive(Clone, Debug, Default)]
pub struct HistogramFacet {
    field: Option<String>,
    key_field: Option<String>,
    value_field: Option<String>,
    interval: Option<i64>,
    time_interval: Option<String>,
    options: FacetOptions,
}

impl HistogramFacet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = Some(field.into());
        self
    }

    pub fn value_field(mut self, field: impl Into<String>) -> Self {
        self.value_field = Some(field.into());
        self
    }

    pub fn interval(mut self, interval: i64) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Interval given as a time value, e.g. `1.5d`
    pub fn time_interval(mut self, interval: impl Into<String>) -> Self {
        self.time_interval = Some(interval.into());
        self
    }
}

facet_options_setters!(HistogramFacet);

impl Facet for HistogramFacet {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put(&mut body, "field", &self.field);
        put(&mut body, "key_field", &self.key_field);
        put(&mut body, "value_field", &self.value_field);
        put(&mut body, "interval", &self.interval);
        put(&mut body, "time_interval", &self.time_interval);
        self.options.render("histogram", Value::Object(body))
    }
}

/// Histogram whose keys or values come from scripts
#[derive(Clone, Debug, Default)]
pub struct HistogramScriptFacet {
    key_field: Option<String>,
    key_script: Option<String>,
    value_script: Option<String>,
    interval: Option<i64>,
    script_options: FacetScript,
    options: FacetOptions,
}

impl HistogramScriptFacet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = Some(field.into());
        self
    }

    pub fn key_script(mut self, script: impl Into<String>) -> Self {
        self.key_script = Some(script.into());
        self
    }

    pub fn value_script(mut self, script: impl Into<String>) -> Self {
        self.value_script = Some(script.into());
        self
    }

    pub fn interval(mut self, interval: i64) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.script_options.lang = Some(lang.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.script_options.params.insert(name.into(), value.into());
        self
    }
}

facet_options_setters!(HistogramScriptFacet);

impl Facet for HistogramScriptFacet {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put(&mut body, "key_field", &self.key_field);
        put(&mut body, "key_script", &self.key_script);
        put(&mut body, "value_script", &self.value_script);
        put(&mut body, "interval", &self.interval);
        self.script_options.apply(&mut body);
        self.options.render("histogram", Value::Object(body))
    }
}

/// Counts per calendar interval of a date field
#[derive(Clone, Debug, Default)]
pub struct DateHistogramFacet {
    field: Option<String>,
    key_field: Option<String>,
    value_field: Option<String>,
    value_script: Option<String>,
    interval: Option<String>,
    time_zone: Option<String>,
    pre_zone: Option<String>,
    post_zone: Option<String>,
    pre_zone_adjust_large_interval: Option<bool>,
    pre_offset: Option<String>,
    post_offset: Option<String>,
    factor: Option<f64>,
    comparator: Option<String>,
    script_options: FacetScript,
    options: FacetOptions,
}

impl DateHistogramFacet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = Some(field.into());
        self
    }

    pub fn value_field(mut self, field: impl Into<String>) -> Self {
        self.value_field = Some(field.into());
        self
    }

    pub fn value_script(mut self, script: impl Into<String>) -> Self {
        self.value_script = Some(script.into());
        self
    }

    /// year, quarter, month, week, day, hour, minute or a time value
    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    pub fn pre_zone(mut self, zone: impl Into<String>) -> Self {
        self.pre_zone = Some(zone.into());
        self
    }

    pub fn post_zone(mut self, zone: impl Into<String>) -> Self {
        self.post_zone = Some(zone.into());
        self
    }

    pub fn pre_zone_adjust_large_interval(mut self, adjust: bool) -> Self {
        self.pre_zone_adjust_large_interval = Some(adjust);
        self
    }

    pub fn pre_offset(mut self, offset: impl Into<String>) -> Self {
        self.pre_offset = Some(offset.into());
        self
    }

    pub fn post_offset(mut self, offset: impl Into<String>) -> Self {
        self.post_offset = Some(offset.into());
        self
    }

    pub fn factor(mut self, factor: f64) -> Self {
        self.factor = Some(factor);
        self
    }

    /// time, count, total, reverse_time, reverse_count or reverse_total
    pub fn comparator(mut self, comparator: impl Into<String>) -> Self {
        self.comparator = Some(comparator.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.script_options.lang = Some(lang.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.script_options.params.insert(name.into(), value.into());
        self
    }
}

facet_options_setters!(DateHistogramFacet);

impl Facet for DateHistogramFacet {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put(&mut body, "field", &self.field);
        put(&mut body, "key_field", &self.key_field);
        put(&mut body, "value_field", &self.value_field);
        put(&mut body, "value_script", &self.value_script);
        put(&mut body, "interval", &self.interval);
        put(&mut body, "time_zone", &self.time_zone);
        put(&mut body, "pre_zone", &self.pre_zone);
        put(&mut body, "post_zone", &self.post_zone);
        put(
            &mut body,
            "pre_zone_adjust_large_interval",
            &self.pre_zone_adjust_large_interval,
        );
        put(&mut body, "pre_offset", &self.pre_offset);
        put(&mut body, "post_offset", &self.post_offset);
        put_float(&mut body, "factor", self.factor);
        put(&mut body, "comparator", &self.comparator);
        self.script_options.apply(&mut body);
        self.options.render("date_histogram", Value::Object(body))
    }
}
