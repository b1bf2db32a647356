//! More-like-this queries (`mlt` and `mlt_field`)

use serde_json::Value;

use crate::models::json::{put, put_float, put_strings, single, Object};
use crate::query::ast::Query;
use crate::query::types::MinimumShouldMatch;

/// A document used as input of a more-like-this query
#[derive(Clone, Debug, Default)]
pub struct MoreLikeThisItem {
    index: Option<String>,
    doc_type: Option<String>,
    id: Option<String>,
    doc: Option<Value>,
    fields: Vec<String>,
    routing: Option<String>,
}

impl MoreLikeThisItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Artificial document not present in the index
    pub fn doc(mut self, doc: impl Into<Value>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }

    pub fn source(&self) -> Value {
        let mut map = Object::new();
        put(&mut map, "_index", &self.index);
        put(&mut map, "_type", &self.doc_type);
        put(&mut map, "_id", &self.id);
        put(&mut map, "doc", &self.doc);
        put_strings(&mut map, "fields", &self.fields);
        put(&mut map, "_routing", &self.routing);
        Value::Object(map)
    }
}

/// Parameters shared by both more-like-this variants
#[derive(Clone, Debug, Default)]
struct MltParams {
    like_text: Option<String>,
    stop_words: Vec<String>,
    min_term_freq: Option<i64>,
    max_query_terms: Option<i64>,
    min_doc_freq: Option<i64>,
    max_doc_freq: Option<i64>,
    min_word_len: Option<i64>,
    max_word_len: Option<i64>,
    boost_terms: Option<f64>,
    percent_terms_to_match: Option<f64>,
    minimum_should_match: Option<MinimumShouldMatch>,
    analyzer: Option<String>,
    boost: Option<f64>,
    fail_on_unsupported_field: Option<bool>,
    include: Option<bool>,
    query_name: Option<String>,
}

impl MltParams {
    fn apply(&self, map: &mut Object) {
        put(map, "like_text", &self.like_text);
        put_strings(map, "stop_words", &self.stop_words);
        put(map, "min_term_freq", &self.min_term_freq);
        put(map, "max_query_terms", &self.max_query_terms);
        put(map, "min_doc_freq", &self.min_doc_freq);
        put(map, "max_doc_freq", &self.max_doc_freq);
        put(map, "min_word_len", &self.min_word_len);
        put(map, "max_word_len", &self.max_word_len);
        put_float(map, "boost_terms", self.boost_terms);
        put_float(map, "percent_terms_to_match", self.percent_terms_to_match);
        put(map, "minimum_should_match", &self.minimum_should_match);
        put(map, "analyzer", &self.analyzer);
        put_float(map, "boost", self.boost);
        put(map, "fail_on_unsupported_field", &self.fail_on_unsupported_field);
        put(map, "include", &self.include);
        put(map, "_name", &self.query_name);
    }
}

macro_rules! mlt_setters {
    ($ty:ty) => {
        impl $ty {
            pub fn like_text(mut self, text: impl Into<String>) -> Self {
                self.params.like_text = Some(text.into());
                self
            }

            /// Append stop words
            pub fn stop_words<I, S>(mut self, words: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.params
                    .stop_words
                    .extend(words.into_iter().map(Into::into));
                self
            }

            pub fn min_term_freq(mut self, freq: i64) -> Self {
                self.params.min_term_freq = Some(freq);
                self
            }

            pub fn max_query_terms(mut self, max: i64) -> Self {
                self.params.max_query_terms = Some(max);
                self
            }

            pub fn min_doc_freq(mut self, freq: i64) -> Self {
                self.params.min_doc_freq = Some(freq);
                self
            }

            pub fn max_doc_freq(mut self, freq: i64) -> Self {
                self.params.max_doc_freq = Some(freq);
                self
            }

            pub fn min_word_len(mut self, len: i64) -> Self {
                self.params.min_word_len = Some(len);
                self
            }

            pub fn max_word_len(mut self, len: i64) -> Self {
                self.params.max_word_len = Some(len);
                self
            }

            pub fn boost_terms(mut self, boost: f64) -> Self {
                self.params.boost_terms = Some(boost);
                self
            }

            pub fn percent_terms_to_match(mut self, percent: f64) -> Self {
                self.params.percent_terms_to_match = Some(percent);
                self
            }

            pub fn minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
                self.params.minimum_should_match = Some(msm.into());
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

            /// Whether the input documents themselves are returned
            pub fn include(mut self, include: bool) -> Self {
                self.params.include = Some(include);
                self
            }

            pub fn query_name(mut self, name: impl Into<String>) -> Self {
                self.params.query_name = Some(name.into());
                self
            }
        }
    };
}

/// More-like-this over several fields, by text, ids or documents
#[derive(Clone, Debug, Default)]
pub struct MoreLikeThisQuery {
    fields: Vec<String>,
    ids: Vec<String>,
    docs: Vec<MoreLikeThisItem>,
    params: MltParams,
}

impl MoreLikeThisQuery {
    pub fn new() -> Self {
        Self::default()
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

    /// Append ids of input documents
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Append an input document
    pub fn doc(mut self, item: MoreLikeThisItem) -> Self {
        self.docs.push(item);
        self
    }
}

mlt_setters!(MoreLikeThisQuery);

impl Query for MoreLikeThisQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put_strings(&mut body, "fields", &self.fields);
        put_strings(&mut body, "ids", &self.ids);
        if !self.docs.is_empty() {
            body.insert(
                "docs".to_string(),
                Value::Array(self.docs.iter().map(MoreLikeThisItem::source).collect()),
            );
        }
        self.params.apply(&mut body);
        single("mlt", Value::Object(body))
    }
}

/// More-like-this bound to a single field
#[derive(Clone, Debug)]
pub struct MoreLikeThisFieldQuery {
    name: String,
    params: MltParams,
}

impl MoreLikeThisFieldQuery {
    pub fn new(name: impl Into<String>, like_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: MltParams {
                like_text: Some(like_text.into()),
                ..Default::default()
            },
        }
    }
}

mlt_setters!(MoreLikeThisFieldQuery);

impl Query for MoreLikeThisFieldQuery {
    fn source(&self) -> Value {
        let mut params = Object::new();
        self.params.apply(&mut params);
        single("mlt_field", single(self.name.clone(), Value::Object(params)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_more_like_this_query() {
        let query = MoreLikeThisQuery::new()
            .fields(["message"])
            .like_text("Golang topic")
            .min_term_freq(1)
            .max_query_terms(12)
            .stop_words(["a", "the"]);
        assert_eq!(
            query.source(),
            json!({"mlt": {
                "fields": ["message"],
                "like_text": "Golang topic",
                "stop_words": ["a", "the"],
                "min_term_freq": 1,
                "max_query_terms": 12
            }})
        );
    }

    #[test]
    fn test_more_like_this_with_docs() {
        let query = MoreLikeThisQuery::new()
            .fields(["name.first"])
            .ids(["1"])
            .doc(MoreLikeThisItem::new().index("test").doc_type("type").id("2"))
            .doc(MoreLikeThisItem::new().doc(json!({"name.first": "Ben"})))
            .minimum_should_match("30%")
            .include(true);
        assert_eq!(
            query.source(),
            json!({"mlt": {
                "fields": ["name.first"],
                "ids": ["1"],
                "docs": [
                    {"_index": "test", "_type": "type", "_id": "2"},
                    {"doc": {"name.first": "Ben"}}
                ],
                "minimum_should_match": "30%",
                "include": true
            }})
        );
    }

    #[test]
    fn test_more_like_this_field_query() {
        let query = MoreLikeThisFieldQuery::new("message", "this is a test")
            .boost(1.3)
            .max_doc_freq(100);
        assert_eq!(
            query.source(),
            json!({"mlt_field": {"message": {
                "like_text": "this is a test",
                "max_doc_freq": 100,
                "boost": 1.3
            }}})
        );
    }
}
