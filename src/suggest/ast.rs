//! Core trait for the suggester family
//!
//! A suggester renders `{"text": .., <type>: body}` and is placed under its
//! name inside the `suggest` section of a search request.

use serde_json::Value;
use std::fmt::Debug;

use crate::models::json::{one_or_many, put, single, Object};
use crate::suggest::context::ContextQuery;

/// Boxed suggester, as held by the search source
pub type BoxedSuggester = Box<dyn Suggester>;

/// Object-safe cloning for boxed suggesters
pub trait SuggesterClone {
    fn clone_box(&self) -> Box<dyn Suggester>;
}

impl<T> SuggesterClone for T
where
    T: 'static + Suggester + Clone,
{
    fn clone_box(&self) -> Box<dyn Suggester> {
        Box::new(self.clone())
    }
}

/// Core trait for all suggesters
pub trait Suggester: SuggesterClone + Send + Sync + Debug {
    /// Name the suggestions are reported under
    fn name(&self) -> &str;

    /// Render the unnamed body, e.g. `{"text": "n", "completion": {..}}`
    fn source(&self) -> Value;

    /// Render `{name: body}`
    fn named_source(&self) -> Value {
        single(self.name().to_string(), self.source())
    }
}

impl Clone for Box<dyn Suggester> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl Suggester for Box<dyn Suggester> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn source(&self) -> Value {
        self.as_ref().source()
    }
}

/// Settings every suggester accepts
#[derive(Clone, Debug, Default)]
pub struct SuggestOptions {
    pub text: Option<String>,
    pub field: Option<String>,
    pub analyzer: Option<String>,
    pub size: Option<u64>,
    pub shard_size: Option<u64>,
    pub context_queries: Vec<ContextQuery>,
}

impl SuggestOptions {
    /// Write the shared keys into a typed body; `text` lives outside it
    pub(crate) fn apply(&self, map: &mut Object) {
        put(map, "analyzer", &self.analyzer);
        put(map, "field", &self.field);
        put(map, "size", &self.size);
        put(map, "shard_size", &self.shard_size);
        if let Some(context) =
            one_or_many(self.context_queries.iter().map(ContextQuery::source).collect())
        {
            map.insert("context".to_string(), context);
        }
    }
}

/// Builds `{"text": .., <kind>: body}` with `text` first
pub(crate) fn render(text: &Option<String>, kind: &str, body: Object) -> Value {
    let mut map = Object::new();
    put(&mut map, "text", text);
    map.insert(kind.to_string(), Value::Object(body));
    Value::Object(map)
}

/// Shared setters for suggesters that keep their [`SuggestOptions`] in a
/// field named `options`
macro_rules! suggest_options_setters {
    ($ty:ty) => {
        impl $ty {
            /// Text to produce suggestions for
            pub fn text(mut self, text: impl Into<String>) -> Self {
                self.options.text = Some(text.into());
                self
            }

            pub fn field(mut self, field: impl Into<String>) -> Self {
                self.options.field = Some(field.into());
                self
            }

            pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
                self.options.analyzer = Some(analyzer.into());
                self
            }

            pub fn size(mut self, size: u64) -> Self {
                self.options.size = Some(size);
                self
            }

            pub fn shard_size(mut self, shard_size: u64) -> Self {
                self.options.shard_size = Some(shard_size);
                self
            }

            pub fn context_query(
                mut self,
                query: impl Into<$crate::suggest::context::ContextQuery>,
            ) -> Self {
                self.options.context_queries.push(query.into());
                self
            }
        }
    };
}

pub(crate) use suggest_options_setters;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::context::CategoryContextQuery;
    use crate::suggest::TermSuggester;
    use serde_json::json;

    #[test]
    fn test_boxed_clone_renders_equal() {
        let boxed: BoxedSuggester =
            Box::new(TermSuggester::new("spelling").text("serch").field("body"));
        let copy = boxed.clone();
        assert_eq!(copy.name(), "spelling");
        assert_eq!(copy.named_source(), boxed.named_source());
        assert_eq!(copy.source()["text"], json!("serch"));
    }

    #[test]
    fn test_render_puts_text_first() {
        let mut body = Object::new();
        body.insert("field".to_string(), json!("suggest"));
        let rendered = render(&Some("n".to_string()), "completion", body);
        assert_eq!(
            serde_json::to_string(&rendered).unwrap(),
            r#"{"text":"n","completion":{"field":"suggest"}}"#
        );
    }

    #[test]
    fn test_single_context_query_renders_as_object() {
        let mut options = SuggestOptions::default();
        options
            .context_queries
            .push(CategoryContextQuery::new("color").value("red").into());
        let mut map = Object::new();
        options.apply(&mut map);
        assert_eq!(Value::Object(map.clone()), json!({"context": {"color": "red"}}));

        options
            .context_queries
            .push(CategoryContextQuery::new("shape").value("round").into());
        let mut map = Object::new();
        options.apply(&mut map);
        assert_eq!(
            Value::Object(map),
            json!({"context": [{"color": "red"}, {"shape": "round"}]})
        );
    }
}
