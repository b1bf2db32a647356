use serde_json::Value;

use crate::filter::{BoxedFilter, Filter};
use crate::models::json::{put, single, Object};

/// Plain per-field sort descriptor
///
/// The search source only renders these when no structured sorter was
/// registered.
#[derive(Clone, Debug)]
pub struct SortInfo {
    field: String,
    ascending: bool,
    missing: Option<Value>,
    ignore_unmapped: Option<bool>,
    unmapped_type: Option<String>,
    sort_mode: Option<String>,
    nested_filter: Option<BoxedFilter>,
    nested_path: Option<String>,
}

impl SortInfo {
    /// Sort on `field`, ascending by default
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
            missing: None,
            ignore_unmapped: None,
            unmapped_type: None,
            sort_mode: None,
            nested_filter: None,
            nested_path: None,
        }
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Value used for documents missing the field, e.g. `"_last"`
    pub fn missing(mut self, missing: impl Into<Value>) -> Self {
        self.missing = Some(missing.into());
        self
    }

    pub fn ignore_unmapped(mut self, ignore: bool) -> Self {
        self.ignore_unmapped = Some(ignore);
        self
    }

    pub fn unmapped_type(mut self, typ: impl Into<String>) -> Self {
        self.unmapped_type = Some(typ.into());
        self
    }

    pub fn sort_mode(mut self, mode: impl Into<String>) -> Self {
        self.sort_mode = Some(mode.into());
        self
    }

    pub fn nested_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.nested_filter = Some(Box::new(filter));
        self
    }

    pub fn nested_path(mut self, path: impl Into<String>) -> Self {
        self.nested_path = Some(path.into());
        self
    }

    pub fn source(&self) -> Value {
        let mut prop = Object::new();
        let order = if self.ascending { "asc" } else { "desc" };
        prop.insert("order".to_string(), Value::from(order));
        put(&mut prop, "missing", &self.missing);
        put(&mut prop, "ignore_unmapped", &self.ignore_unmapped);
        put(&mut prop, "unmapped_type", &self.unmapped_type);
        put(&mut prop, "mode", &self.sort_mode);
        if let Some(filter) = &self.nested_filter {
            prop.insert("nested_filter".to_string(), filter.source());
        }
        put(&mut prop, "nested_path", &self.nested_path);
        single(self.field.clone(), Value::Object(prop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TermFilter;
    use serde_json::json;

    #[test]
    fn test_sort_info_defaults_to_ascending() {
        assert_eq!(
            SortInfo::new("grade").source(),
            json!({"grade": {"order": "asc"}})
        );
    }

    #[test]
    fn test_sort_info_options() {
        let info = SortInfo::new("offer.price")
            .ascending(false)
            .missing("_last")
            .unmapped_type("long")
            .sort_mode("avg")
            .nested_path("offer")
            .nested_filter(TermFilter::new("offer.color", "blue"));
        assert_eq!(
            info.source(),
            json!({
                "offer.price": {
                    "order": "desc",
                    "missing": "_last",
                    "unmapped_type": "long",
                    "mode": "avg",
                    "nested_filter": {"term": {"offer.color": "blue"}},
                    "nested_path": "offer"
                }
            })
        );
    }
}
