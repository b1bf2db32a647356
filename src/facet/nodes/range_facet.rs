use serde_json::Value;

use crate::aggregation::{range_entry_setters, render_entries, RangeEntry};
use crate::facet::ast::{facet_options_setters, Facet, FacetOptions};
use crate::models::json::{put, Object};

/// Document counts per range of a field, optionally with statistics of a
/// second value field
#[derive(Clone, Debug, Default)]
pub struct RangeFacet {
    field: Option<String>,
    key_field: Option<String>,
    value_field: Option<String>,
    entries: Vec<RangeEntry>,
    options: FacetOptions,
}

impl RangeFacet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Field the ranges apply to when statistics come from `value_field`
    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = Some(field.into());
        self
    }

    pub fn value_field(mut self, field: impl Into<String>) -> Self {
        self.value_field = Some(field.into());
        self
    }
}

range_entry_setters!(RangeFacet);
facet_options_setters!(RangeFacet);

impl Facet for RangeFacet {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put(&mut body, "field", &self.field);
        put(&mut body, "key_field", &self.key_field);
        put(&mut body, "value_field", &self.value_field);
        body.insert("ranges".to_string(), render_entries(&self.entries));
        self.options.render("range", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_range_facet() {
        let facet = RangeFacet::new()
            .field("price")
            .add_unbounded_from(50)
            .add_range(20, 70)
            .add_range(70, 120)
            .add_unbounded_to(150);
        assert_eq!(
            facet.source(),
            json!({"range": {
                "field": "price",
                "ranges": [{"to": 50}, {"from": 20, "to": 70}, {"from": 70, "to": 120}, {"from": 150}]
            }})
        );
    }

    #[test]
    fn test_range_facet_with_key_and_value_fields() {
        let facet = RangeFacet::new()
            .key_field("price")
            .value_field("qty")
            .between(10.5, "100")
            .nested("offers");
        assert_eq!(
            facet.source(),
            json!({
                "range": {
                    "key_field": "price",
                    "value_field": "qty",
                    "ranges": [{"from": 10.5, "to": "100"}]
                },
                "nested": "offers"
            })
        );
    }
}
