//! Bool filter - must/should/must_not clause slots

use serde_json::Value;

use crate::filter::ast::{cache_options_setters, BoxedFilter, CacheOptions, Filter};
use crate::models::json::{one_or_many, single, Object};

/// Boolean combination of filters
///
/// A slot holding one clause renders as that clause's object, a slot with
/// several clauses renders as an array, and an empty slot is omitted.
#[derive(Clone, Debug, Default)]
pub struct BoolFilter {
    must: Vec<BoxedFilter>,
    must_not: Vec<BoxedFilter>,
    should: Vec<BoxedFilter>,
    options: CacheOptions,
}

impl BoolFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn must(mut self, filter: impl Filter + 'static) -> Self {
        self.must.push(Box::new(filter));
        self
    }

    pub fn must_not(mut self, filter: impl Filter + 'static) -> Self {
        self.must_not.push(Box::new(filter));
        self
    }

    pub fn should(mut self, filter: impl Filter + 'static) -> Self {
        self.should.push(Box::new(filter));
        self
    }
}

cache_options_setters!(BoolFilter);

impl Filter for BoolFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        for (slot, clauses) in [
            ("must", &self.must),
            ("must_not", &self.must_not),
            ("should", &self.should),
        ] {
            if let Some(rendered) = one_or_many(clauses.iter().map(|c| c.source()).collect()) {
                body.insert(slot.to_string(), rendered);
            }
        }
        self.options.apply(&mut body);
        single("bool", Value::Object(body))
    }
}
