//! Fuzzy-like-this queries (`flt` and `flt_field`)

use serde_json::Value;

use crate::models::json::{put, put_float, put_strings, single, Object};
use crate::query::ast::Query;

/// Parameters shared by both fuzzy-like-this variants
#[derive(Clone, Debug, Default)]
struct FltParams {
    like_text: String,
    ignore_tf: Option<bool>,
    max_query_terms: Option<i64>,
    fuzziness: Option<Value>,
    prefix_length: Option<i64>,
    analyzer: Option<String>,
    boost: Option<f64>,
    fail_on_unsupported_field: Option<bool>,
    query_name: Option<String>,
}

impl FltParams {
    fn apply(&self, map: &mut Object) {
        map.insert("like_text".to_string(), Value::from(self.like_text.clone()));
        put(map, "ignore_tf", &self.ignore_tf);
        put(map, "max_query_terms", &self.max_query_terms);
        put(map, "fuzziness", &self.fuzziness);
        put(map, "prefix_length", &self.prefix_length);
        put(map, "analyzer", &self.analyzer);
        put_float(map, "boost", self.boost);
        put(map, "fail_on_unsupported_field", &self.fail_on_unsupported_field);
        put(map, "_name", &self.query_name);
    }
}

macro_rules! flt_setters {
    ($ty:ty) => {
        impl $ty {
            pub fn ignore_tf(mut self, ignore_tf: bool) -> Self {
                self.params.ignore_tf = Some(ignore_tf);
                self
            }

            pub fn max_query_terms(mut self, max: i64) -> Self {
                self.params.max_query_terms = Some(max);
                self
            }

            pub fn fuzziness(mut self, fuzziness: impl Into<Value>) -> Self {
                self.params.fuzziness = Some(fuzziness.into());
                self
            }

            pub fn prefix_length(mut self, prefix_length: i64) -> Self {
                self.params.prefix_length = Some(prefix_length);
                self
            }

            pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
                self.params.analyzer = Some(analyzer.into());
                self
            }

            pub fn boost(mut self, boost: f64) -> Self {
                self.params.boost = Some(boost);
                self
            }

            pub fn fail_on_unsupported_field(mut self, fail: bool) -> Self {
                self.params.fail_on_unsupported_field = Some(fail);
                self
            }

            pub fn query_name(mut self, name: impl Into<String>) -> Self {
                self.params.query_name = Some(name.into());
                self
            }
        }
    };
}

/// Fuzzy-like-this over several fields
#[derive(Clone, Debug)]
pub struct FuzzyLikeThisQuery {
    fields: Vec<String>,
    params: FltParams,
}

impl FuzzyLikeThisQuery {
    pub fn new(like_text: impl Into<String>) -> Self {
        Self {
            fields: Vec::new(),
            params: FltParams {
                like_text: like_text.into(),
                ..Default::default()
            },
        }
    }

    /// Append fields
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }
}

flt_setters!(FuzzyLikeThisQuery);

impl Query for FuzzyLikeThisQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put_strings(&mut body, "fields", &self.fields);
        self.params.apply(&mut body);
        single("flt", Value::Object(body))
    }
}

/// Fuzzy-like-this bound to a single field
#[derive(Clone, Debug)]
pub struct FuzzyLikeThisFieldQuery {
    name: String,
    params: FltParams,
}

impl FuzzyLikeThisFieldQuery {
    pub fn new(name: impl Into<String>, like_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: FltParams {
                like_text: like_text.into(),
                ..Default::default()
            },
        }
    }
}

flt_setters!(FuzzyLikeThisFieldQuery);

impl Query for FuzzyLikeThisFieldQuery {
    fn source(&self) -> Value {
        let mut params = Object::new();
        self.params.apply(&mut params);
        single("flt_field", single(self.name.clone(), Value::Object(params)))
    }
}
