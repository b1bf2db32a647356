//! Prefix completion over `completion` fields

use serde_json::Value;

use crate::models::json::{put, Object};
use crate::suggest::ast::{suggest_options_setters, SuggestOptions, Suggester};

/// Render `{"text": .., "completion": body}`
///
/// The engine expects `text` before `completion`; the object keeps that
/// order because `serde_json` is built with `preserve_order`. `text` is
/// always present, empty when unset.
fn render_completion(text: &Option<String>, body: Object) -> Value {
    let mut request = Object::new();
    request.insert(
        "text".to_string(),
        Value::from(text.as_deref().unwrap_or_default()),
    );
    request.insert("completion".to_string(), Value::Object(body));
    Value::Object(request)
}

/// Suggests completions of the input prefix
#[derive(Clone, Debug)]
pub struct CompletionSuggester {
    name: String,
    options: SuggestOptions,
}

impl CompletionSuggester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: SuggestOptions::default(),
        }
    }
}

suggest_options_setters!(CompletionSuggester);

impl Suggester for CompletionSuggester {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> Value {
        let mut body = Object::new();
        self.options.apply(&mut body);
        render_completion(&self.options.text, body)
    }
}

/// Completion suggester tolerating typos in the prefix
///
/// The `fuzzy` object is always rendered, so the engine applies its fuzzy
/// defaults even when no option is set.
#[derive(Clone, Debug)]
pub struct FuzzyCompletionSuggester {
    name: String,
    options: SuggestOptions,
    fuzziness: Option<Value>,
    fuzzy_transpositions: Option<bool>,
    fuzzy_min_length: Option<u32>,
    fuzzy_prefix_length: Option<u32>,
    unicode_aware: Option<bool>,
}

impl FuzzyCompletionSuggester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: SuggestOptions::default(),
            fuzziness: None,
            fuzzy_transpositions: None,
            fuzzy_min_length: None,
            fuzzy_prefix_length: None,
            unicode_aware: None,
        }
    }

    /// Edit distance as a number or `"AUTO"`
    pub fn fuzziness(mut self, fuzziness: impl Into<Value>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    pub fn fuzzy_transpositions(mut self, transpositions: bool) -> Self {
        self.fuzzy_transpositions = Some(transpositions);
        self
    }

    pub fn fuzzy_min_length(mut self, min_length: u32) -> Self {
        self.fuzzy_min_length = Some(min_length);
        self
    }

    pub fn fuzzy_prefix_length(mut self, prefix_length: u32) -> Self {
        self.fuzzy_prefix_length = Some(prefix_length);
        self
    }

    pub fn unicode_aware(mut self, unicode_aware: bool) -> Self {
        self.unicode_aware = Some(unicode_aware);
        self
    }
}

suggest_options_setters!(FuzzyCompletionSuggester);

impl Suggester for FuzzyCompletionSuggester {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> Value {
        let mut body = Object::new();
        self.options.apply(&mut body);

        let mut fuzzy = Object::new();
        put(&mut fuzzy, "fuzziness", &self.fuzziness);
        put(&mut fuzzy, "transpositions", &self.fuzzy_transpositions);
        put(&mut fuzzy, "min_length", &self.fuzzy_min_length);
        put(&mut fuzzy, "prefix_length", &self.fuzzy_prefix_length);
        put(&mut fuzzy, "unicode_aware", &self.unicode_aware);
        body.insert("fuzzy".to_string(), Value::Object(fuzzy));

        render_completion(&self.options.text, body)
    }
}
