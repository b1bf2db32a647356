//! Term facets

use serde_json::Value;

use crate::facet::ast::{facet_options_setters, Facet, FacetOptions, FacetScript};
use crate::models::json::{put, put_strings, Object};

/// Most frequent terms of one or more fields
///
/// `size` is always emitted and defaults to 10.
#[derive(Clone, Debug)]
pub struct TermsFacet {
    fields: Vec<String>,
    script_field: Option<String>,
    size: i64,
    shard_size: Option<i64>,
    all_terms: Option<bool>,
    exclude: Vec<String>,
    regex: Option<String>,
    regex_flags: Option<String>,
    order: Option<String>,
    script: Option<String>,
    script_options: FacetScript,
    execution_hint: Option<String>,
    options: FacetOptions,
}

impl TermsFacet {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            script_field: None,
            size: 10,
            shard_size: None,
            all_terms: None,
            exclude: Vec::new(),
            regex: None,
            regex_flags: None,
            order: None,
            script: None,
            script_options: FacetScript::default(),
            execution_hint: None,
            options: FacetOptions::default(),
        }
    }

    /// Append a field; one field renders as `field`, several as `fields`
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Script producing the terms in place of a field
    pub fn script_field(mut self, script: impl Into<String>) -> Self {
        self.script_field = Some(script.into());
        self
    }

    pub fn size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    pub fn shard_size(mut self, shard_size: i64) -> Self {
        self.shard_size = Some(shard_size);
        self
    }

    /// Return terms with a zero count too
    pub fn all_terms(mut self, all_terms: bool) -> Self {
        self.all_terms = Some(all_terms);
        self
    }

    pub fn exclude<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(terms.into_iter().map(Into::into));
        self
    }

    pub fn regex(mut self, regex: impl Into<String>) -> Self {
        self.regex = Some(regex.into());
        self
    }

    pub fn regex_flags(mut self, flags: impl Into<String>) -> Self {
        self.regex_flags = Some(flags.into());
        self
    }

    /// count, term, reverse_count or reverse_term
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Script transforming each term
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.script_options.lang = Some(lang.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.script_options.params.insert(name.into(), value.into());
        self
    }

    pub fn execution_hint(mut self, hint: impl Into<String>) -> Self {
        self.execution_hint = Some(hint.into());
        self
    }
}

impl Default for TermsFacet {
    fn default() -> Self {
        Self::new()
    }
}

facet_options_setters!(TermsFacet);

impl Facet for TermsFacet {
    fn source(&self) -> Value {
        let mut body = Object::new();
        match self.fields.as_slice() {
            [] => {}
            [only] => {
                body.insert("field".to_string(), Value::from(only.clone()));
            }
            many => {
                body.insert("fields".to_string(), Value::from(many.to_vec()));
            }
        }
        put(&mut body, "script_field", &self.script_field);
        body.insert("size".to_string(), Value::from(self.size));
        put(&mut body, "shard_size", &self.shard_size);
        put(&mut body, "all_terms", &self.all_terms);
        put_strings(&mut body, "exclude", &self.exclude);
        put(&mut body, "regex", &self.regex);
        put(&mut body, "regex_flags", &self.regex_flags);
        put(&mut body, "order", &self.order);
        put(&mut body, "script", &self.script);
        self.script_options.apply(&mut body);
        put(&mut body, "execution_hint", &self.execution_hint);
        self.options.render("terms", Value::Object(body))
    }
}

/// Statistics of a value field per term of a key field
#[derive(Clone, Debug)]
pub struct TermsStatsFacet {
    key_field: String,
    value_field: Option<String>,
    value_script: Option<String>,
    size: Option<i64>,
    shard_size: Option<i64>,
    order: Option<String>,
    all_terms: Option<bool>,
    script_options: FacetScript,
    options: FacetOptions,
}

impl TermsStatsFacet {
    pub fn new(key_field: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
            value_field: None,
            value_script: None,
            size: None,
            shard_size: None,
            order: None,
            all_terms: None,
            script_options: FacetScript::default(),
            options: FacetOptions::default(),
        }
    }

    pub fn value_field(mut self, field: impl Into<String>) -> Self {
        self.value_field = Some(field.into());
        self
    }

    pub fn value_script(mut self, script: impl Into<String>) -> Self {
        self.value_script = Some(script.into());
        self
    }

    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn shard_size(mut self, shard_size: i64) -> Self {
        self.shard_size = Some(shard_size);
        self
    }

    /// term, reverse_term, count, reverse_count, total, reverse_total,
    /// min, reverse_min, max, reverse_max, mean or reverse_mean
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn all_terms(mut self, all_terms: bool) -> Self {
        self.all_terms = Some(all_terms);
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.script_options.lang = Some(lang.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.script_options.params.insert(name.into(), value.into());
        self
    }
}

facet_options_setters!(TermsStatsFacet);

impl Facet for TermsStatsFacet {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("key_field".to_string(), Value::from(self.key_field.clone()));
        put(&mut body, "value_field", &self.value_field);
        put(&mut body, "value_script", &self.value_script);
        put(&mut body, "size", &self.size);
        put(&mut body, "shard_size", &self.shard_size);
        put(&mut body, "order", &self.order);
        put(&mut body, "all_terms", &self.all_terms);
        self.script_options.apply(&mut body);
        self.options.render("terms_stats", Value::Object(body))
    }
}
