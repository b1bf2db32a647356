use serde_json::Value;

use crate::aggregation::{range_entry_setters, render_entries, RangeEntry};
use crate::facet::ast::{facet_options_setters, Facet, FacetOptions, FacetScript};
use crate::models::json::{put, Object};
use crate::models::GeoPoint;

/// Counts per distance ring around a point
///
/// The origin renders under the field name, as `{lat, lon}` or as the
/// geohash when one is set.
#[derive(Clone, Debug)]
pub struct GeoDistanceFacet {
    field: String,
    point: Option<GeoPoint>,
    geohash: Option<String>,
    unit: Option<String>,
    distance_type: Option<String>,
    value_field: Option<String>,
    value_script: Option<String>,
    entries: Vec<RangeEntry>,
    script_options: FacetScript,
    options: FacetOptions,
}

impl GeoDistanceFacet {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            point: None,
            geohash: None,
            unit: None,
            distance_type: None,
            value_field: None,
            value_script: None,
            entries: Vec::new(),
            script_options: FacetScript::default(),
            options: FacetOptions::default(),
        }
    }

    pub fn point(mut self, point: GeoPoint) -> Self {
        self.point = Some(point);
        self
    }

    pub fn lat_lon(self, lat: f64, lon: f64) -> Self {
        self.point(GeoPoint::new(lat, lon))
    }

    pub fn geohash(mut self, geohash: impl Into<String>) -> Self {
        self.geohash = Some(geohash.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn distance_type(mut self, distance_type: impl Into<String>) -> Self {
        self.distance_type = Some(distance_type.into());
        self
    }

    pub fn value_field(mut self, field: impl Into<String>) -> Self {
        self.value_field = Some(field.into());
        self
    }

    pub fn value_script(mut self, script: impl Into<String>) -> Self {
        self.value_script = Some(script.into());
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

range_entry_setters!(GeoDistanceFacet);
facet_options_setters!(GeoDistanceFacet);

impl Facet for GeoDistanceFacet {
    fn source(&self) -> Value {
        let mut body = Object::new();
        match (&self.geohash, &self.point) {
            (Some(hash), _) => {
                body.insert(self.field.clone(), Value::from(hash.clone()));
            }
            (None, Some(point)) => {
                body.insert(self.field.clone(), point.source());
            }
            (None, None) => {}
        }
        put(&mut body, "unit", &self.unit);
        put(&mut body, "distance_type", &self.distance_type);
        put(&mut body, "value_field", &self.value_field);
        put(&mut body, "value_script", &self.value_script);
        self.script_options.apply(&mut body);
        body.insert("ranges".to_string(), render_entries(&self.entries));
        self.options.render("geo_distance", Value::Object(body))
    }
}
