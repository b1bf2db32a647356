//! Statistics over fields or a script

use serde_json::Value;

use crate::facet::ast::{facet_options_setters, Facet, FacetOptions, FacetScript};
use crate::models::json::Object;

/// Count, total, min, max, mean and variance of one or more fields
#[derive(Clone, Debug, Default)]
pub struct StatisticalFacet {
    fields: Vec<String>,
    options: FacetOptions,
}

impl StatisticalFacet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; one field renders as `field`, several as `fields`
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }
}

facet_options_setters!(StatisticalFacet);

impl Facet for StatisticalFacet {
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
        self.options.render("statistical", Value::Object(body))
    }
}

/// Statistics over the values produced by a script
#[derive(Clone, Debug)]
pub struct StatisticalScriptFacet {
    script: String,
    script_options: FacetScript,
    options: FacetOptions,
}

impl StatisticalScriptFacet {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            script_options: FacetScript::default(),
            options: FacetOptions::default(),
        }
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

facet_options_setters!(StatisticalScriptFacet);

impl Facet for StatisticalScriptFacet {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("script".to_string(), Value::from(self.script.clone()));
        self.script_options.apply(&mut body);
        self.options.render("statistical", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statistical_facet() {
        assert_eq!(
            StatisticalFacet::new().field("num1").source(),
            json!({"statistical": {"field": "num1"}})
        );
        assert_eq!(
            StatisticalFacet::new().field("num1").field("num2").source(),
            json!({"statistical": {"fields": ["num1", "num2"]}})
        );
    }

    #[test]
    fn test_statistical_script_facet() {
        let facet = StatisticalScriptFacet::new("doc['num1'].value + doc['num2'].value")
            .lang("groovy")
            .param("factor", 5);
        assert_eq!(
            facet.source(),
            json!({"statistical": {
                "script": "doc['num1'].value + doc['num2'].value",
                "lang": "groovy",
                "params": {"factor": 5}
            }})
        );
    }
}
