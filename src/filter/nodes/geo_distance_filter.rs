//! Geo filters: distance, polygon and bounding box

use serde_json::Value;

use crate::filter::ast::{cache_options_setters, CacheOptions, Filter};
use crate::models::json::{put, single, Object};
use crate::models::GeoPoint;

/// Filter on documents within a distance of a point
///
/// When a geohash is set the field key holds the hash string, otherwise it
/// holds `{lat, lon}`.
#[derive(Clone, Debug)]
pub struct GeoDistanceFilter {
    name: String,
    point: Option<GeoPoint>,
    geohash: Option<String>,
    distance: Option<String>,
    distance_type: Option<String>,
    optimize_bbox: Option<String>,
    options: CacheOptions,
}

impl GeoDistanceFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            point: None,
            geohash: None,
            distance: None,
            distance_type: None,
            optimize_bbox: None,
            options: CacheOptions::default(),
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

    /// Distance with unit, e.g. `"200km"`
    pub fn distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = Some(distance.into());
        self
    }

    /// `arc`, `sloppy_arc` or `plane`
    pub fn distance_type(mut self, distance_type: impl Into<String>) -> Self {
        self.distance_type = Some(distance_type.into());
        self
    }

    /// `memory`, `indexed` or `none`
    pub fn optimize_bbox(mut self, optimize_bbox: impl Into<String>) -> Self {
        self.optimize_bbox = Some(optimize_bbox.into());
        self
    }
}

cache_options_setters!(GeoDistanceFilter);

impl Filter for GeoDistanceFilter {
    fn source(&self) -> Value {
        let mut body = Object::new();
        if let Some(geohash) = &self.geohash {
            body.insert(self.name.clone(), Value::from(geohash.clone()));
        } else if let Some(point) = &self.point {
            body.insert(self.name.clone(), point.source());
        }
        put(&mut body, "distance", &self.distance);
        put(&mut body, "distance_type", &self.distance_type);
        put(&mut body, "optimize_bbox", &self.optimize_bbox);
        self.options.apply(&mut body);
        single("geo_distance", Value::Object(body))
    }
}

/// Filter on points inside a polygon
#[derive(Clone, Debug)]
pub struct GeoPolygonFilter {
    name: String,
    points: Vec<GeoPoint>,
    options: CacheOptions,
}

impl GeoPolygonFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            options: CacheOptions::default(),
        }
    }

    /// Append a polygon vertex
    pub fn add_point(mut self, point: GeoPoint) -> Self {
        self.points.push(point);
        self
    }
}

cache_options_setters!(GeoPolygonFilter);

impl Filter for GeoPolygonFilter {
    fn source(&self) -> Value {
        let points = Value::Array(self.points.iter().map(GeoPoint::source).collect());
        let mut body = Object::new();
        body.insert(self.name.clone(), single("points", points));
        self.options.apply(&mut body);
        single("geo_polygon", Value::Object(body))
    }
}

/// Filter on points inside a rectangle
#[derive(Clone, Debug)]
pub struct GeoBoundingBoxFilter {
    name: String,
    top_left: Option<GeoPoint>,
    bottom_right: Option<GeoPoint>,
    box_type: Option<String>,
    options: CacheOptions,
}

impl GeoBoundingBoxFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            top_left: None,
            bottom_right: None,
            box_type: None,
            options: CacheOptions::default(),
        }
    }

    pub fn top_left(mut self, point: GeoPoint) -> Self {
        self.top_left = Some(point);
        self
    }

    pub fn bottom_right(mut self, point: GeoPoint) -> Self {
        self.bottom_right = Some(point);
        self
    }

    /// `memory` or `indexed`
    pub fn box_type(mut self, box_type: impl Into<String>) -> Self {
        self.box_type = Some(box_type.into());
        self
    }
}

cache_options_setters!(GeoBoundingBoxFilter);

impl Filter for GeoBoundingBoxFilter {
    fn source(&self) -> Value {
        let mut corners = Object::new();
        if let Some(point) = &self.top_left {
            corners.insert("top_left".to_string(), point.source());
        }
        if let Some(point) = &self.bottom_right {
            corners.insert("bottom_right".to_string(), point.source());
        }
        let mut body = Object::new();
        body.insert(self.name.clone(), Value::Object(corners));
        put(&mut body, "type", &self.box_type);
        self.options.apply(&mut body);
        single("geo_bounding_box", Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geo_distance_filter_with_point() {
        let filter = GeoDistanceFilter::new("pin.location")
            .lat_lon(40.0, -70.0)
            .distance("200km")
            .distance_type("plane")
            .optimize_bbox("memory");
        assert_eq!(
            filter.source(),
            json!({"geo_distance": {
                "pin.location": {"lat": 40, "lon": -70},
                "distance": "200km",
                "distance_type": "plane",
                "optimize_bbox": "memory"
            }})
        );
    }

    #[test]
    fn test_geo_distance_filter_with_geohash() {
        let filter = GeoDistanceFilter::new("pin.location")
            .lat_lon(40.0, -70.0)
            .geohash("drm3btev3e86")
            .distance("12km");
        assert_eq!(
            filter.source(),
            json!({"geo_distance": {"pin.location": "drm3btev3e86", "distance": "12km"}})
        );
    }

    #[test]
    fn test_geo_polygon_filter() {
        let filter = GeoPolygonFilter::new("person.location")
            .add_point(GeoPoint::new(40.0, -70.0))
            .add_point(GeoPoint::new(30.0, -80.0))
            .add_point(GeoPoint::new(20.0, -90.0));
        assert_eq!(
            filter.source(),
            json!({"geo_polygon": {"person.location": {"points": [
                {"lat": 40, "lon": -70},
                {"lat": 30, "lon": -80},
                {"lat": 20, "lon": -90}
            ]}}})
        );
    }

    #[test]
    fn test_geo_bounding_box_filter() {
        let filter = GeoBoundingBoxFilter::new("pin.location")
            .top_left(GeoPoint::new(40.73, -74.1))
            .bottom_right(GeoPoint::new(40.01, -71.12))
            .box_type("indexed");
        assert_eq!(
            filter.source(),
            json!({"geo_bounding_box": {
                "pin.location": {
                    "top_left": {"lat": 40.73, "lon": -74.1},
                    "bottom_right": {"lat": 40.01, "lon": -71.12}
                },
                "type": "indexed"
            }})
        );
    }
}
