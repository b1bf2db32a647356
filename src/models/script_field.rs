use serde_json::{Map, Value};

use crate::models::json::{put, put_object, Object};

/// A computed field returned under `script_fields`
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptField {
    name: String,
    script: String,
    lang: Option<String>,
    params: Map<String, Value>,
}

impl ScriptField {
    pub fn new(name: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            lang: None,
            params: Map::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }

    /// Render the body placed under the field's name
    pub fn source(&self) -> Value {
        let mut map = Object::new();
        map.insert("script".to_string(), Value::from(self.script.clone()));
        put(&mut map, "lang", &self.lang);
        put_object(&mut map, "params", &self.params);
        Value::Object(map)
    }
}
