use serde_json::Value;

use crate::filter::ast::{cache_options_setters, CacheOptions, Filter};
use crate::models::json::{put, single, Object};

/// Filter on terms matching a regular expression
#[derive(Clone, Debug)]
pub struct RegexpFilter {
    name: String,
    regexp: String,
    flags: Option<String>,
    max_determinized_states: Option<i64>,
    options: CacheOptions,
}

impl RegexpFilter {
    pub fn new(name: impl Into<String>, regexp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regexp: regexp.into(),
            flags: None,
            max_determinized_states: None,
            options: CacheOptions::default(),
        }
    }

    /// Enabled operators, e.g. `INTERSECTION|COMPLEMENT|EMPTY`
    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    pub fn max_determinized_states(mut self, states: i64) -> Self {
        self.max_determinized_states = Some(states);
        self
    }
}

cache_options_setters!(RegexpFilter);

impl Filter for RegexpFilter {
    fn source(&self) -> Value {
        let mut params = Object::new();
        params.insert("value".to_string(), Value::from(self.regexp.clone()));
        put(&mut params, "flags", &self.flags);
        put(&mut params, "max_determinized_states", &self.max_determinized_states);

        let mut body = Object::new();
        body.insert(self.name.clone(), Value::Object(params));
        self.options.apply(&mut body);
        single("regexp", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_regexp_filter() {
        let filter = RegexpFilter::new("name.first", "s.*y")
            .flags("INTERSECTION|COMPLEMENT|EMPTY")
            .max_determinized_states(20000)
            .filter_name("test");
        assert_eq!(
            filter.source(),
            json!({"regexp": {
                "name.first": {
                    "value": "s.*y",
                    "flags": "INTERSECTION|COMPLEMENT|EMPTY",
                    "max_determinized_states": 20000
                },
                "_name": "test"
            }})
        );
    }
}
