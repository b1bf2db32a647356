//! Phrase suggester and its candidate generators

use serde_json::Value;

use crate::models::json::{put, put_float, put_object, single, Object};
use crate::suggest::ast::{render, suggest_options_setters, SuggestOptions, Suggester};
use crate::suggest::smoothing::SmoothingModel;

/// Produces candidate terms for each token of the phrase
#[derive(Clone, Debug)]
pub struct DirectCandidateGenerator {
    field: String,
    pre_filter: Option<String>,
    post_filter: Option<String>,
    suggest_mode: Option<String>,
    accuracy: Option<f64>,
    size: Option<u64>,
    sort: Option<String>,
    string_distance: Option<String>,
    max_edits: Option<u32>,
    max_inspections: Option<u32>,
    max_term_freq: Option<f64>,
    prefix_length: Option<u32>,
    min_word_length: Option<u32>,
    min_doc_freq: Option<f64>,
}

impl DirectCandidateGenerator {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pre_filter: None,
            post_filter: None,
            suggest_mode: None,
            accuracy: None,
            size: None,
            sort: None,
            string_distance: None,
            max_edits: None,
            max_inspections: None,
            max_term_freq: None,
            prefix_length: None,
            min_word_length: None,
            min_doc_freq: None,
        }
    }

    /// Analyzer applied to each token before candidates are generated
    pub fn pre_filter(mut self, analyzer: impl Into<String>) -> Self {
        self.pre_filter = Some(analyzer.into());
        self
    }

    pub fn post_filter(mut self, analyzer: impl Into<String>) -> Self {
        self.post_filter = Some(analyzer.into());
        self
    }

    pub fn suggest_mode(mut self, mode: impl Into<String>) -> Self {
        self.suggest_mode = Some(mode.into());
        self
    }

    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn string_distance(mut self, distance: impl Into<String>) -> Self {
        self.string_distance = Some(distance.into());
        self
    }

    pub fn max_edits(mut self, max_edits: u32) -> Self {
        self.max_edits = Some(max_edits);
        self
    }

    pub fn max_inspections(mut self, max_inspections: u32) -> Self {
        self.max_inspections = Some(max_inspections);
        self
    }

    pub fn max_term_freq(mut self, max_term_freq: f64) -> Self {
        self.max_term_freq = Some(max_term_freq);
        self
    }

    pub fn prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    pub fn min_word_length(mut self, min_word_length: u32) -> Self {
        self.min_word_length = Some(min_word_length);
        self
    }

    pub fn min_doc_freq(mut self, min_doc_freq: f64) -> Self {
        self.min_doc_freq = Some(min_doc_freq);
        self
    }

    pub fn source(&self) -> Value {
        let mut map = Object::new();
        map.insert("field".to_string(), Value::from(self.field.clone()));
        put(&mut map, "suggest_mode", &self.suggest_mode);
        put_float(&mut map, "accuracy", self.accuracy);
        put(&mut map, "size", &self.size);
        put(&mut map, "sort", &self.sort);
        put(&mut map, "string_distance", &self.string_distance);
        put(&mut map, "max_edits", &self.max_edits);
        put(&mut map, "max_inspections", &self.max_inspections);
        put_float(&mut map, "max_term_freq", self.max_term_freq);
        put(&mut map, "prefix_length", &self.prefix_length);
        put(&mut map, "min_word_len", &self.min_word_length);
        put_float(&mut map, "min_doc_freq", self.min_doc_freq);
        put(&mut map, "pre_filter", &self.pre_filter);
        put(&mut map, "post_filter", &self.post_filter);
        Value::Object(map)
    }
}

/// Suggests whole corrected phrases using an n-gram language model
#[derive(Clone, Debug)]
pub struct PhraseSuggester {
    name: String,
    options: SuggestOptions,
    real_word_error_likelihood: Option<f64>,
    confidence: Option<f64>,
    separator: Option<String>,
    max_errors: Option<f64>,
    gram_size: Option<u32>,
    token_limit: Option<u32>,
    force_unigrams: Option<bool>,
    smoothing: Option<Box<dyn SmoothingModel>>,
    generators: Vec<DirectCandidateGenerator>,
    pre_tag: Option<String>,
    post_tag: Option<String>,
    collate_query: Option<Value>,
    collate_filter: Option<Value>,
    collate_preference: Option<String>,
    collate_params: Object,
    collate_prune: Option<bool>,
}

impl PhraseSuggester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: SuggestOptions::default(),
            real_word_error_likelihood: None,
            confidence: None,
            separator: None,
            max_errors: None,
            gram_size: None,
            token_limit: None,
            force_unigrams: None,
            smoothing: None,
            generators: Vec::new(),
            pre_tag: None,
            post_tag: None,
            collate_query: None,
            collate_filter: None,
            collate_preference: None,
            collate_params: Object::new(),
            collate_prune: None,
        }
    }

    pub fn real_word_error_likelihood(mut self, likelihood: f64) -> Self {
        self.real_word_error_likelihood = Some(likelihood);
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Maximum share (below 1) or count of misspelled terms
    pub fn max_errors(mut self, max_errors: f64) -> Self {
        self.max_errors = Some(max_errors);
        self
    }

    pub fn gram_size(mut self, gram_size: u32) -> Self {
        self.gram_size = Some(gram_size);
        self
    }

    pub fn token_limit(mut self, token_limit: u32) -> Self {
        self.token_limit = Some(token_limit);
        self
    }

    pub fn force_unigrams(mut self, force: bool) -> Self {
        self.force_unigrams = Some(force);
        self
    }

    pub fn smoothing_model(mut self, model: impl SmoothingModel + 'static) -> Self {
        self.smoothing = Some(Box::new(model));
        self
    }

    pub fn candidate_generator(mut self, generator: DirectCandidateGenerator) -> Self {
        self.generators.push(generator);
        self
    }

    /// Tags wrapped around the changed tokens
    pub fn highlight(mut self, pre_tag: impl Into<String>, post_tag: impl Into<String>) -> Self {
        self.pre_tag = Some(pre_tag.into());
        self.post_tag = Some(post_tag.into());
        self
    }

    /// Query template every suggestion is checked against
    pub fn collate_query(mut self, query: impl Into<Value>) -> Self {
        self.collate_query = Some(query.into());
        self
    }

    pub fn collate_filter(mut self, filter: impl Into<Value>) -> Self {
        self.collate_filter = Some(filter.into());
        self
    }

    pub fn collate_preference(mut self, preference: impl Into<String>) -> Self {
        self.collate_preference = Some(preference.into());
        self
    }

    pub fn collate_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.collate_params.insert(name.into(), value.into());
        self
    }

    /// Keep suggestions that fail the collate check, flagged in the response
    pub fn collate_prune(mut self, prune: bool) -> Self {
        self.collate_prune = Some(prune);
        self
    }

    fn collate(&self) -> Object {
        let mut collate = Object::new();
        put(&mut collate, "query", &self.collate_query);
        put(&mut collate, "filter", &self.collate_filter);
        put(&mut collate, "preference", &self.collate_preference);
        put_object(&mut collate, "params", &self.collate_params);
        put(&mut collate, "prune", &self.collate_prune);
        collate
    }
}

suggest_options_setters!(PhraseSuggester);

impl Suggester for PhraseSuggester {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> Value {
        let mut body = Object::new();
        self.options.apply(&mut body);
        put_float(
            &mut body,
            "real_word_error_likelihood",
            self.real_word_error_likelihood,
        );
        put_float(&mut body, "confidence", self.confidence);
        put(&mut body, "separator", &self.separator);
        put_float(&mut body, "max_errors", self.max_errors);
        put(&mut body, "gram_size", &self.gram_size);
        put(&mut body, "token_limit", &self.token_limit);
        put(&mut body, "force_unigrams", &self.force_unigrams);

        if self.pre_tag.is_some() || self.post_tag.is_some() {
            let mut highlight = Object::new();
            put(&mut highlight, "pre_tag", &self.pre_tag);
            put(&mut highlight, "post_tag", &self.post_tag);
            body.insert("highlight".to_string(), Value::Object(highlight));
        }
        put_object(&mut body, "collate", &self.collate());
        if let Some(model) = &self.smoothing {
            body.insert("smoothing".to_string(), single(model.name(), model.source()));
        }
        if !self.generators.is_empty() {
            body.insert(
                "direct_generator".to_string(),
                Value::Array(
                    self.generators
                        .iter()
                        .map(DirectCandidateGenerator::source)
                        .collect(),
                ),
            );
        }
        render(&self.options.text, "phrase", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::smoothing::{Laplace, StupidBackoff};
    use serde_json::json;

    #[test]
    fn test_phrase_suggester() {
        let suggester = PhraseSuggester::new("simple_phrase")
            .text("Xor the Got-Jewel")
            .analyzer("body")
            .field("bigram")
            .size(1)
            .real_word_error_likelihood(0.95)
            .max_errors(0.5)
            .gram_size(2)
            .highlight("<em>", "</em>")
            .smoothing_model(Laplace::new(0.7))
            .candidate_generator(
                DirectCandidateGenerator::new("body")
                    .suggest_mode("always")
                    .min_word_length(1),
            );
        assert_eq!(
            suggester.named_source(),
            json!({"simple_phrase": {
                "text": "Xor the Got-Jewel",
                "phrase": {
                    "analyzer": "body",
                    "field": "bigram",
                    "size": 1,
                    "real_word_error_likelihood": 0.95,
                    "max_errors": 0.5,
                    "gram_size": 2,
                    "highlight": {"pre_tag": "<em>", "post_tag": "</em>"},
                    "smoothing": {"laplace": {"alpha": 0.7}},
                    "direct_generator": [
                        {"field": "body", "suggest_mode": "always", "min_word_len": 1}
                    ]
                }
            }})
        );
    }

    #[test]
    fn test_phrase_suggester_collate() {
        let suggester = PhraseSuggester::new("s")
            .field("title.trigram")
            .collate_query(json!({"match": {"{{field_name}}": "{{suggestion}}"}}))
            .collate_param("field_name", "title")
            .collate_prune(true)
            .smoothing_model(StupidBackoff::new(0.4));
        assert_eq!(
            suggester.source(),
            json!({"phrase": {
                "field": "title.trigram",
                "collate": {
                    "query": {"match": {"{{field_name}}": "{{suggestion}}"}},
                    "params": {"field_name": "title"},
                    "prune": true
                },
                "smoothing": {"stupid_backoff": {"discount": 0.4}}
            }})
        );
    }
}
