//! Highlighting of matched terms in the returned hits

use serde_json::Value;

use crate::models::json::{put, put_object, put_strings, single, Object};
use crate::query::{BoxedQuery, Query};

/// Options accepted both globally and per field
///
/// Global settings use the same names as the per-field ones, so both
/// builders share this struct and its rendering.
#[derive(Clone, Debug, Default)]
struct HighlightOptions {
    pre_tags: Vec<String>,
    post_tags: Vec<String>,
    order: Option<String>,
    highlight_filter: Option<bool>,
    fragment_size: Option<i64>,
    number_of_fragments: Option<i64>,
    require_field_match: Option<bool>,
    boundary_max_scan: Option<i64>,
    boundary_chars: Option<String>,
    highlighter_type: Option<String>,
    fragmenter: Option<String>,
    highlight_query: Option<BoxedQuery>,
    no_match_size: Option<i64>,
    phrase_limit: Option<i64>,
    options: Object,
    force_source: Option<bool>,
}

impl HighlightOptions {
    fn apply_tags(&self, map: &mut Object) {
        put_strings(map, "pre_tags", &self.pre_tags);
        put_strings(map, "post_tags", &self.post_tags);
    }

    fn apply_rest(&self, map: &mut Object) {
        put(map, "require_field_match", &self.require_field_match);
        put(map, "boundary_max_scan", &self.boundary_max_scan);
        put(map, "boundary_chars", &self.boundary_chars);
        put(map, "type", &self.highlighter_type);
        put(map, "fragmenter", &self.fragmenter);
        if let Some(query) = &self.highlight_query {
            map.insert("highlight_query".to_string(), query.source());
        }
        put(map, "no_match_size", &self.no_match_size);
        put(map, "phrase_limit", &self.phrase_limit);
        put_object(map, "options", &self.options);
        put(map, "force_source", &self.force_source);
    }
}

/// Setters shared by [`Highlight`] and [`HighlighterField`]
macro_rules! highlight_option_setters {
    ($ty:ty) => {
        impl $ty {
            pub fn pre_tags<I, S>(mut self, tags: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.options.pre_tags.extend(tags.into_iter().map(Into::into));
                self
            }

            pub fn post_tags<I, S>(mut self, tags: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.options.post_tags.extend(tags.into_iter().map(Into::into));
                self
            }

            /// `score` sorts fragments by relevance
            pub fn order(mut self, order: impl Into<String>) -> Self {
                self.options.order = Some(order.into());
                self
            }

            pub fn highlight_filter(mut self, highlight_filter: bool) -> Self {
                self.options.highlight_filter = Some(highlight_filter);
                self
            }

            pub fn fragment_size(mut self, size: i64) -> Self {
                self.options.fragment_size = Some(size);
                self
            }

            pub fn number_of_fragments(mut self, count: i64) -> Self {
                self.options.number_of_fragments = Some(count);
                self
            }

            pub fn require_field_match(mut self, require: bool) -> Self {
                self.options.require_field_match = Some(require);
                self
            }

            pub fn boundary_max_scan(mut self, max_scan: i64) -> Self {
                self.options.boundary_max_scan = Some(max_scan);
                self
            }

            pub fn boundary_chars(mut self, chars: impl Into<String>) -> Self {
                self.options.boundary_chars = Some(chars.into());
                self
            }

            /// plain, postings or fvh
            pub fn highlighter_type(mut self, typ: impl Into<String>) -> Self {
                self.options.highlighter_type = Some(typ.into());
                self
            }

            pub fn fragmenter(mut self, fragmenter: impl Into<String>) -> Self {
                self.options.fragmenter = Some(fragmenter.into());
                self
            }

            pub fn highlight_query(mut self, query: impl Query + 'static) -> Self {
                self.options.highlight_query = Some(Box::new(query));
                self
            }

            pub fn no_match_size(mut self, size: i64) -> Self {
                self.options.no_match_size = Some(size);
                self
            }

            pub fn phrase_limit(mut self, limit: i64) -> Self {
                self.options.phrase_limit = Some(limit);
                self
            }

            pub fn option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
                self.options.options.insert(name.into(), value.into());
                self
            }

            pub fn force_source(mut self, force: bool) -> Self {
                self.options.force_source = Some(force);
                self
            }
        }
    };
}

/// Highlight settings for one field
#[derive(Clone, Debug)]
pub struct HighlighterField {
    name: String,
    fragment_offset: Option<i64>,
    matched_fields: Vec<String>,
    options: HighlightOptions,
}

impl HighlighterField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fragment_offset: None,
            matched_fields: Vec::new(),
            options: HighlightOptions::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fragment_offset(mut self, offset: i64) -> Self {
        self.fragment_offset = Some(offset);
        self
    }

    /// Combine matches on several fields into this one (fvh only)
    pub fn matched_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matched_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Render the per-field body, `{}` when nothing is set
    pub fn source(&self) -> Value {
        let mut map = Object::new();
        self.options.apply_tags(&mut map);
        put(&mut map, "fragment_size", &self.options.fragment_size);
        put(&mut map, "fragment_offset", &self.fragment_offset);
        put(&mut map, "number_of_fragments", &self.options.number_of_fragments);
        put(&mut map, "order", &self.options.order);
        put(&mut map, "highlight_filter", &self.options.highlight_filter);
        put_strings(&mut map, "matched_fields", &self.matched_fields);
        self.options.apply_rest(&mut map);
        Value::Object(map)
    }
}

highlight_option_setters!(HighlighterField);

/// Highlight section of a search request
#[derive(Clone, Debug, Default)]
pub struct Highlight {
    fields: Vec<HighlighterField>,
    tags_schema: Option<String>,
    encoder: Option<String>,
    use_explicit_field_order: bool,
    options: HighlightOptions,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight `name` with default settings
    pub fn field(self, name: impl Into<String>) -> Self {
        self.highlighter_field(HighlighterField::new(name))
    }

    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .extend(names.into_iter().map(HighlighterField::new));
        self
    }

    pub fn highlighter_field(mut self, field: HighlighterField) -> Self {
        self.fields.push(field);
        self
    }

    /// `styled` selects the built-in tag schema
    pub fn tags_schema(mut self, schema: impl Into<String>) -> Self {
        self.tags_schema = Some(schema.into());
        self
    }

    /// default or html
    pub fn encoder(mut self, encoder: impl Into<String>) -> Self {
        self.encoder = Some(encoder.into());
        self
    }

    /// Render fields as a list so the engine keeps their order
    pub fn use_explicit_field_order(mut self, explicit: bool) -> Self {
        self.use_explicit_field_order = explicit;
        self
    }

    pub fn source(&self) -> Value {
        let mut map = Object::new();
        put(&mut map, "tags_schema", &self.tags_schema);
        self.options.apply_tags(&mut map);
        put(&mut map, "order", &self.options.order);
        put(&mut map, "highlight_filter", &self.options.highlight_filter);
        put(&mut map, "fragment_size", &self.options.fragment_size);
        put(&mut map, "number_of_fragments", &self.options.number_of_fragments);
        put(&mut map, "encoder", &self.encoder);
        self.options.apply_rest(&mut map);

        if !self.fields.is_empty() {
            let fields = if self.use_explicit_field_order {
                Value::Array(
                    self.fields
                        .iter()
                        .map(|field| single(field.name.clone(), field.source()))
                        .collect(),
                )
            } else {
                let mut by_name = Object::new();
                for field in &self.fields {
                    by_name.insert(field.name.clone(), field.source());
                }
                Value::Object(by_name)
            };
            map.insert("fields".to_string(), fields);
        }
        Value::Object(map)
    }
}

highlight_option_setters!(Highlight);
