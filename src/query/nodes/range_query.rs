//! Range query - numeric, date and string ranges

use serde_json::Value;

use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::Query;
use crate::query::types::RangeBounds;

/// Query matching documents with field values in a range
///
/// `gt`/`gte`/`lt`/`lte` set a bound together with its inclusion flag;
/// `from`/`to` set a bound and keep the current flag.
#[derive(Clone, Debug)]
pub struct RangeQuery {
    name: String,
    bounds: RangeBounds,
    time_zone: Option<String>,
    format: Option<String>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl RangeQuery {
    /// Create a new range query on `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: RangeBounds::default(),
            time_zone: None,
            format: None,
            boost: None,
            query_name: None,
        }
    }

    pub fn from(mut self, from: impl Into<Value>) -> Self {
        self.bounds.from = from.into();
        self
    }

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

    /// Time zone applied to date bounds, e.g. `"+01:00"`
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// Date format of the bounds, e.g. `"dd/MM/yyyy"`
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }

    /// Current bounds
    pub fn bounds(&self) -> &RangeBounds {
        &self.bounds
    }
}

impl Query for RangeQuery {
    fn source(&self) -> Value {
        let mut params = Object::new();
        self.bounds.apply(&mut params);
        put(&mut params, "time_zone", &self.time_zone);
        put(&mut params, "format", &self.format);
        put_float(&mut params, "boost", self.boost);

        let mut body = Object::new();
        body.insert(self.name.clone(), Value::Object(params));
        put(&mut body, "_name", &self.query_name);
        single("range", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_range_query_from_to() {
        let query = RangeQuery::new("postDate")
            .from("2010-03-01")
            .to("2010-04-01")
            .boost(3.0)
            .query_name("my_query");
        assert_eq!(
            query.source(),
            json!({"range": {
                "postDate": {
                    "from": "2010-03-01",
                    "to": "2010-04-01",
                    "include_lower": true,
                    "include_upper": true,
                    "boost": 3
                },
                "_name": "my_query"
            }})
        );
    }

    #[test]
    fn test_range_query_gt_sets_exclusive_lower() {
        let query = RangeQuery::new("obj1.count").gt(5);
        assert_eq!(
            query.source(),
            json!({"range": {"obj1.count": {
                "from": 5, "to": null, "include_lower": false, "include_upper": true
            }}})
        );
        assert!(!query.bounds().include_lower);
    }

    #[test]
    fn test_range_query_with_time_zone() {
        let query = RangeQuery::new("born")
            .gte("2012-01-01")
            .lte("now")
            .time_zone("+1:00")
            .format("yyyy-MM-dd");
        assert_eq!(
            query.source(),
            json!({"range": {"born": {
                "from": "2012-01-01",
                "to": "now",
                "include_lower": true,
                "include_upper": true,
                "time_zone": "+1:00",
                "format": "yyyy-MM-dd"
            }}})
        );
    }
}
