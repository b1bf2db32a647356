use serde_json::Value;

use crate::models::json::{put_float, single, Object};
use crate::query::ast::{BoxedQuery, Query};

/// Query demoting documents that match `negative` instead of excluding them
#[derive(Clone, Debug, Default)]
pub struct BoostingQuery {
    positive: Option<BoxedQuery>,
    negative: Option<BoxedQuery>,
    negative_boost: Option<f64>,
    boost: Option<f64>,
}

impl BoostingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positive(mut self, query: impl Query + 'static) -> Self {
        self.positive = Some(Box::new(query));
        self
    }

    pub fn negative(mut self, query: impl Query + 'static) -> Self {
        self.negative = Some(Box::new(query));
        self
    }

    pub fn negative_boost(mut self, boost: f64) -> Self {
        self.negative_boost = Some(boost);
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Query for BoostingQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        if let Some(positive) = &self.positive {
            body.insert("positive".to_string(), positive.source());
        }
        if let Some(negative) = &self.negative {
            body.insert("negative".to_string(), negative.source());
        }
        put_float(&mut body, "negative_boost", self.negative_boost);
        put_float(&mut body, "boost", self.boost);
        single("boosting", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::TermQuery;
    use serde_json::json;

    #[test]
    fn test_boosting_query() {
        let query = BoostingQuery::new()
            .positive(TermQuery::new("tag", "wow"))
            .negative(TermQuery::new("tag", "bad"))
            .negative_boost(0.2);
        assert_eq!(
            query.source(),
            json!({"boosting": {
                "positive": {"term": {"tag": "wow"}},
                "negative": {"term": {"tag": "bad"}},
                "negative_boost": 0.2
            }})
        );
    }
}
