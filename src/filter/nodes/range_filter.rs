use serde_json::Value;

use crate::filter::ast::{cache_options_setters, CacheOptions, Filter};
use crate::models::json::{put, single, Object};
use crate::query::RangeBounds;

/// Filter on a range of values
///
/// Always renders `from`, `to`, `include_lower` and `include_upper`.
#[derive(Clone, Debug)]
pub struct RangeFilter {
    name: String,
    bounds: RangeBounds,
    time_zone: Option<String>,
    format: Option<String>,
    execution: Option<String>,
    options: CacheOptions,
}

impl RangeFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: RangeBounds::default(),
            time_zone: None,
            format: None,
            execution: None,
            options: CacheOptions::default(),
        }
    }

    /// Set the lower bound, keeping the current inclusion flag
    pub fn from(mut self, from: impl Into<Value>) -> Self {
        self.bounds.from = from.into();
        self
    }

    /// Set the upper bound, keeping the current inclusion flag
    pub fn to(mut self, to: impl Into<Value>) -> Self {
        self.bounds.to = to.into();
        self
    }

    pub fn gt(mut self, from: impl Into<Value>) -> Self {
        self.bounds.gt(from.into());
        self
    }

    pub fn gte(mut self, from: impl Into<Value>) -> Self {
        self.bounds.gte(from.into());
        self
    }

    pub fn lt(mut self, to: impl Into<Value>) -> Self {
        self.bounds.lt(to.into());
        self
    }

    pub fn lte(mut self, to: impl Into<Value>) -> Self {
        self.bounds.lte(to.into());
        self
    }

    pub fn include_lower(mut self, include: bool) -> Self {
        self.bounds.include_lower = include;
        self
    }

    pub fn include_upper(mut self, include: bool) -> Self {
        self.bounds.include_upper = include;
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Execution mode, `index` or `fielddata`
    pub fn execution(mut self, execution: impl Into<String>) -> Self {
        self.execution = Some(execution.into());
        self
    }
}

cache_options_setters!(RangeFilter);

impl Filter for RangeFilter {
    fn source(&self) -> Value {
        let mut params = Object::new();
        self.bounds.apply(&mut params);
        put(&mut params, "time_zone", &self.time_zone);
        put(&mut params, "format", &self.format);

        let mut body = Object::new();
        body.insert(self.name.clone(), Value::Object(params));
        put(&mut body, "execution", &self.execution);
        self.options.apply(&mut body);
        single("range", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_range_filter_from_to() {
        let filter = RangeFilter::new("postDate").from("2010-03-01").to("2010-04-01");
        assert_eq!(
            filter.source(),
            json!({"range": {"postDate": {
                "from": "2010-03-01",
                "to": "2010-04-01",
                "include_lower": true,
                "include_upper": true
            }}})
        );
    }

    #[test]
    fn test_range_filter_open_bound_is_null() {
        let filter = RangeFilter::new("age").gte(10).execution("fielddata");
        assert_eq!(
            filter.source(),
            json!({"range": {
                "age": {"from": 10, "to": null, "include_lower": true, "include_upper": true},
                "execution": "fielddata"
            }})
        );
    }

    #[test]
    fn test_from_keeps_inclusion_flags() {
        let filter = RangeFilter::new("age").include_lower(false).from(3).lt(9);
        assert_eq!(
            filter.source(),
            json!({"range": {"age": {
                "from": 3, "to": 9, "include_lower": false, "include_upper": false
            }}})
        );
    }
}
