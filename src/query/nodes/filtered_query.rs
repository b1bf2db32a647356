use serde_json::Value;

use crate::filter::{BoxedFilter, Filter};
use crate::models::json::{put, put_float, single, Object};
use crate::query::ast::{BoxedQuery, Query};

/// Query whose matches are further restricted by filters
///
/// One filter renders as its own body; several are wrapped in a single
/// `and` filter.
#[derive(Clone, Debug)]
pub struct FilteredQuery {
    query: BoxedQuery,
    filters: Vec<BoxedFilter>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl FilteredQuery {
    pub fn new(query: impl Query + 'static) -> Self {
        Self {
            query: Box::new(query),
            filters: Vec::new(),
            boost: None,
            query_name: None,
        }
    }

    /// Append a filter
    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
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
}

impl Query for FilteredQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("query".to_string(), self.query.source());
        match self.filters.as_slice() {
            [] => {}
            [only] => {
                body.insert("filter".to_string(), only.source());
            }
            many => {
                let filters = many.iter().map(|filter| filter.source()).collect();
                let and = single("filters", Value::Array(filters));
                body.insert("filter".to_string(), single("and", and));
            }
        }
        put_float(&mut body, "boost", self.boost);
        put(&mut body, "_name", &self.query_name);
        single("filtered", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{RangeFilter, TermFilter};
    use crate::query::TermQuery;
    use serde_json::json;

    #[test]
    fn test_filtered_query_single_filter() {
        let query = FilteredQuery::new(TermQuery::new("user", "olivere"))
            .filter(TermFilter::new("tag", "rust"));
        assert_eq!(
            query.source(),
            json!({"filtered": {
                "query": {"term": {"user": "olivere"}},
                "filter": {"term": {"tag": "rust"}}
            }})
        );
    }

    #[test]
    fn test_filtered_query_wraps_several_filters() {
        let query = FilteredQuery::new(TermQuery::new("user", "olivere"))
            .filter(TermFilter::new("tag", "rust"))
            .filter(RangeFilter::new("age").gte(18))
            .query_name("adults");
        assert_eq!(
            query.source(),
            json!({"filtered": {
                "query": {"term": {"user": "olivere"}},
                "filter": {"and": {"filters": [
                    {"term": {"tag": "rust"}},
                    {"range": {"age": {
                        "from": 18, "to": null, "include_lower": true, "include_upper": true
                    }}}
                ]}},
                "_name": "adults"
            }})
        );
    }

    #[test]
    fn test_cloned_filtered_query_renders_equal() {
        let query = FilteredQuery::new(TermQuery::new("a", 1))
            .filter(TermFilter::new("b", 2))
            .filter(RangeFilter::new("c").from(1).to(2));
        let copy = query.clone();
        assert_eq!(copy.source(), query.source());
        assert_eq!(
            query.source()["filtered"]["filter"]["and"]["filters"]
                .as_array()
                .map(Vec::len),
            Some(2)
        );
    }

    #[test]
    fn test_filtered_query_without_filters() {
        let query = FilteredQuery::new(TermQuery::new("user", "olivere"));
        assert_eq!(
            query.source(),
            json!({"filtered": {"query": {"term": {"user": "olivere"}}}})
        );
    }
}
