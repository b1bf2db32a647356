use serde_json::Value;

use crate::models::json::{put, put_float, Object};
use crate::suggest::ast::{render, suggest_options_setters, SuggestOptions, Suggester};

/// Suggests corrections per term of the input text based on edit distance
#[derive(Clone, Debug)]
pub struct TermSuggester {
    name: String,
    options: SuggestOptions,
    suggest_mode: Option<String>,
    accuracy: Option<f64>,
    sort: Option<String>,
    string_distance: Option<String>,
    max_edits: Option<u32>,
    max_inspections: Option<u32>,
    max_term_freq: Option<f64>,
    prefix_length: Option<u32>,
    min_word_length: Option<u32>,
    min_doc_freq: Option<f64>,
}

impl TermSuggester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: SuggestOptions::default(),
            suggest_mode: None,
            accuracy: None,
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

    /// missing, popular or always
    pub fn suggest_mode(mut self, mode: impl Into<String>) -> Self {
        self.suggest_mode = Some(mode.into());
        self
    }

    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    /// score or frequency
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
}

suggest_options_setters!(TermSuggester);

impl Suggester for TermSuggester {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> Value {
        let mut body = Object::new();
        self.options.apply(&mut body);
        put(&mut body, "suggest_mode", &self.suggest_mode);
        put_float(&mut body, "accuracy", self.accuracy);
        put(&mut body, "sort", &self.sort);
        put(&mut body, "string_distance", &self.string_distance);
        put(&mut body, "max_edits", &self.max_edits);
        put(&mut body, "max_inspections", &self.max_inspections);
        put_float(&mut body, "max_term_freq", self.max_term_freq);
        put(&mut body, "prefix_length", &self.prefix_length);
        put(&mut body, "min_word_len", &self.min_word_length);
        put_float(&mut body, "min_doc_freq", self.min_doc_freq);
        render(&self.options.text, "term", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_term_suggester() {
        let suggester = TermSuggester::new("my-suggestion")
            .text("Goolang")
            .field("message")
            .suggest_mode("popular")
            .min_word_length(3);
        assert_eq!(
            suggester.named_source(),
            json!({"my-suggestion": {
                "text": "Goolang",
                "term": {"field": "message", "suggest_mode": "popular", "min_word_len": 3}
            }})
        );
    }

    #[test]
    fn test_term_suggester_without_text() {
        let suggester = TermSuggester::new("s").field("body").size(5);
        assert_eq!(
            suggester.source(),
            json!({"term": {"field": "body", "size": 5}})
        );
    }
}
