use serde_json::Value;

use crate::filter::ast::{cache_options_setters, BoxedFilter, CacheOptions, Filter};
use crate::models::json::{single, Object};

/// Filter negating its child
#[derive(Clone, Debug)]
pub struct NotFilter {
    filter: BoxedFilter,
    options: CacheOptions,
}

impl NotFilter {
    pub fn new(filter: impl Filter + 'static) -> Self {
        Self {
            filter: Box::new(filter),
            options: CacheOptions::default(),
        }
    }
}

cache_options_setters!(NotFilter);

impl Filter for NotFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("filter".to_string(), self.filter.source());
        self.options.apply(&mut body);
        single("not", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TermFilter;
    use serde_json::json;

    #[test]
    fn test_not_filter() {
        let filter = NotFilter::new(TermFilter::new("user", "olivere")).cache(false);
        assert_eq!(
            filter.source(),
            json!({"not": {"filter": {"term": {"user": "olivere"}}, "_cache": false}})
        );
    }
}
