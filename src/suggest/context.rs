//! Category and geo contexts of context-enabled completion fields
//!
//! Queries restrict suggestions at search time; mappings declare the
//! contexts in the index mapping.

use serde_json::Value;

use crate::models::json::{one_or_many, put, single, Object};
use crate::models::GeoPoint;

/// Collapses a string list the way context bodies expect it: one value is
/// bare, any other count is a list
fn one_or_list(values: &[String]) -> Value {
    match values {
        [only] => Value::from(only.clone()),
        many => Value::from(many.to_vec()),
    }
}

/// Restricts suggestions to one or more categories
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryContextQuery {
    name: String,
    values: Vec<String>,
}

impl CategoryContextQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn source(&self) -> Value {
        single(self.name.clone(), one_or_list(&self.values))
    }
}

/// Restricts suggestions to the area around a location
#[derive(Clone, Debug, PartialEq)]
pub struct GeoContextQuery {
    name: String,
    location: Option<GeoPoint>,
    precision: Vec<String>,
}

impl GeoContextQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
            precision: Vec::new(),
        }
    }

    pub fn location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Precision as a geohash length or a distance, e.g. `1km`
    pub fn precision(mut self, precision: impl Into<String>) -> Self {
        self.precision.push(precision.into());
        self
    }

    pub fn source(&self) -> Value {
        let mut body = Object::new();
        if let Some(location) = &self.location {
            body.insert("value".to_string(), location.source());
        }
        if !self.precision.is_empty() {
            body.insert("precision".to_string(), one_or_list(&self.precision));
        }
        single(self.name.clone(), Value::Object(body))
    }
}

/// Context query attached to a suggester
#[derive(Clone, Debug, PartialEq)]
pub enum ContextQuery {
    Category(CategoryContextQuery),
    Geo(GeoContextQuery),
}

impl ContextQuery {
    pub fn source(&self) -> Value {
        match self {
            ContextQuery::Category(query) => query.source(),
            ContextQuery::Geo(query) => query.source(),
        }
    }
}

impl From<CategoryContextQuery> for ContextQuery {
    fn from(query: CategoryContextQuery) -> Self {
        ContextQuery::Category(query)
    }
}

impl From<GeoContextQuery> for ContextQuery {
    fn from(query: GeoContextQuery) -> Self {
        ContextQuery::Geo(query)
    }
}

/// Declares a category context in a completion field mapping
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryContextMapping {
    name: String,
    path: Option<String>,
    default_values: Vec<String>,
}

impl CategoryContextMapping {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            default_values: Vec::new(),
        }
    }

    /// Document field the category is read from
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_values.push(value.into());
        self
    }

    pub fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("type".to_string(), Value::from("category"));
        body.insert("default".to_string(), one_or_list(&self.default_values));
        put(&mut body, "path", &self.path);
        single(self.name.clone(), Value::Object(body))
    }
}

/// Declares a geo context in a completion field mapping
#[derive(Clone, Debug, PartialEq)]
pub struct GeoContextMapping {
    name: String,
    precision: Vec<String>,
    neighbors: Option<bool>,
    path: Option<String>,
    default_locations: Vec<GeoPoint>,
}

impl GeoContextMapping {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            precision: Vec::new(),
            neighbors: None,
            path: None,
            default_locations: Vec::new(),
        }
    }

    pub fn precision(mut self, precision: impl Into<String>) -> Self {
        self.precision.push(precision.into());
        self
    }

    pub fn neighbors(mut self, neighbors: bool) -> Self {
        self.neighbors = Some(neighbors);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn default_location(mut self, location: GeoPoint) -> Self {
        self.default_locations.push(location);
        self
    }

    pub fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("type".to_string(), Value::from("geo"));
        if !self.precision.is_empty() {
            body.insert("precision".to_string(), Value::from(self.precision.clone()));
        }
        if let Some(defaults) =
            one_or_many(self.default_locations.iter().map(GeoPoint::source).collect())
        {
            body.insert("default".to_string(), defaults);
        }
        put(&mut body, "neighbors", &self.neighbors);
        put(&mut body, "path", &self.path);
        single(self.name.clone(), Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_context_query() {
        assert_eq!(
            CategoryContextQuery::new("color").value("red").source(),
            json!({"color": "red"})
        );
        assert_eq!(
            CategoryContextQuery::new("color")
                .values(["red", "yellow"])
                .source(),
            json!({"color": ["red", "yellow"]})
        );
        assert_eq!(CategoryContextQuery::new("color").source(), json!({"color": []}));
    }

    #[test]
    fn test_geo_context_query() {
        let query = GeoContextQuery::new("location")
            .location(GeoPoint::new(52.52, 13.4))
            .precision("1km");
        assert_eq!(
            query.source(),
            json!({"location": {"value": {"lat": 52.52, "lon": 13.4}, "precision": "1km"}})
        );
    }

    #[test]
    fn test_category_context_mapping() {
        let mapping = CategoryContextMapping::new("color")
            .default_value("red")
            .default_value("orange")
            .path("color_field");
        assert_eq!(
            mapping.source(),
            json!({"color": {"type": "category", "default": ["red", "orange"], "path": "color_field"}})
        );
    }

    #[test]
    fn test_geo_context_mapping() {
        let mapping = GeoContextMapping::new("location")
            .precision("1km")
            .precision("5m")
            .neighbors(true)
            .default_location(GeoPoint::new(0.0, 0.0));
        assert_eq!(
            mapping.source(),
            json!({"location": {
                "type": "geo",
                "precision": ["1km", "5m"],
                "default": {"lat": 0, "lon": 0},
                "neighbors": true
            }})
        );
    }
}
