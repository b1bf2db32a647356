use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::DslError;
use crate::models::json::{float, Object};

/// A latitude/longitude pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Render as `{"lat": .., "lon": ..}`
    pub fn source(&self) -> Value {
        let mut map = Object::new();
        map.insert("lat".to_string(), float(self.lat));
        map.insert("lon".to_string(), float(self.lon));
        Value::Object(map)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parses the `"lat,lon"` string form
impl FromStr for GeoPoint {
    type Err = DslError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| DslError::InvalidGeoPoint(s.to_string()))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| DslError::InvalidGeoPoint(s.to_string()))?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(|_| DslError::InvalidGeoPoint(s.to_string()))?;
        Ok(Self::new(lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geo_point_source() {
        let point = GeoPoint::new(40.0, -70.5);
        assert_eq!(point.source(), json!({"lat": 40, "lon": -70.5}));
    }

    #[test]
    fn test_geo_point_from_str() {
        let point: GeoPoint = "41.12, -71.34".parse().unwrap();
        assert_eq!(point, GeoPoint::new(41.12, -71.34));
        assert_eq!(point.to_string(), "41.12,-71.34");
    }

    #[test]
    fn test_geo_point_from_str_rejects_garbage() {
        assert!("41.12".parse::<GeoPoint>().is_err());
        assert!("north,south".parse::<GeoPoint>().is_err());
    }
}
