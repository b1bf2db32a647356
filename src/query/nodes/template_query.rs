use serde_json::Value;

use crate::models::json::{put_object, single, Object};
use crate::query::ast::Query;

/// Where a search template comes from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TemplateKind {
    /// Template given in the request
    #[default]
    Inline,
    /// Template stored in the `config/scripts` directory
    File,
    /// Template stored in the `.scripts` index
    Indexed,
}

impl TemplateKind {
    fn key(&self) -> &'static str {
        match self {
            TemplateKind::Inline => "query",
            TemplateKind::File => "file",
            TemplateKind::Indexed => "id",
        }
    }
}

/// Query rendered server-side from a mustache template and parameters
#[derive(Clone, Debug)]
pub struct TemplateQuery {
    template: Value,
    kind: TemplateKind,
    params: Object,
}

impl TemplateQuery {
    /// Inline template, given as a string or a JSON object
    pub fn new(template: impl Into<Value>) -> Self {
        Self {
            template: template.into(),
            kind: TemplateKind::Inline,
            params: Object::new(),
        }
    }

    /// Template loaded from a file by name
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name.into()).kind(TemplateKind::File)
    }

    /// Template loaded from the template index by id
    pub fn indexed(id: impl Into<String>) -> Self {
        Self::new(id.into()).kind(TemplateKind::Indexed)
    }

    pub fn kind(mut self, kind: TemplateKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl Query for TemplateQuery {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert(self.kind.key().to_string(), self.template.clone());
        put_object(&mut body, "params", &self.params);
        single("template", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inline_template_query() {
        let query = TemplateQuery::new(json!({"match": {"{{field}}": "{{value}}"}}))
            .param("field", "user")
            .param("value", "olivere");
        assert_eq!(
            query.source(),
            json!({"template": {
                "query": {"match": {"{{field}}": "{{value}}"}},
                "params": {"field": "user", "value": "olivere"}
            }})
        );
    }

    #[test]
    fn test_stored_template_queries() {
        assert_eq!(
            TemplateQuery::file("storedTemplate").param("template", "all").source(),
            json!({"template": {"file": "storedTemplate", "params": {"template": "all"}}})
        );
        assert_eq!(
            TemplateQuery::indexed("templateName").source(),
            json!({"template": {"id": "templateName"}})
        );
    }
}
