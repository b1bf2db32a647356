use serde_json::{Map, Value};

use crate::filter::ast::{cache_options_setters, CacheOptions, Filter};
use crate::models::json::{put, put_object, single, Object};

/// Filter evaluating a script per document
#[derive(Clone, Debug)]
pub struct ScriptFilter {
    script: String,
    lang: Option<String>,
    params: Map<String, Value>,
    options: CacheOptions,
}

impl ScriptFilter {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            lang: None,
            params: Map::new(),
            options: CacheOptions::default(),
        }
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

cache_options_setters!(ScriptFilter);

impl Filter for ScriptFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("script".to_string(), Value::from(self.script.clone()));
        put(&mut body, "lang", &self.lang);
        put_object(&mut body, "params", &self.params);
        self.options.apply(&mut body);
        single("script", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_script_filter() {
        let filter = ScriptFilter::new("doc['num1'].value > param1")
            .param("param1", 1)
            .cache(true);
        assert_eq!(
            filter.source(),
            json!({"script": {
                "script": "doc['num1'].value > param1",
                "params": {"param1": 1},
                "_cache": true
            }})
        );
    }
}
