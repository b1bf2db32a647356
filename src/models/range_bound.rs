//! Bounds accepted by range-like aggregations and facets

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};
use serde_json::Value;

use crate::models::json::float;

/// One end of a range entry
///
/// Numbers and strings pass through unchanged, instants are written as
/// RFC 3339 timestamps and any other kind of value renders no bound at all.
#[derive(Clone, Debug, PartialEq)]
pub enum RangeBound {
    Integer(i64),
    Float(f64),
    Text(String),
    Instant(DateTime<FixedOffset>),
    Unsupported,
}

impl RangeBound {
    /// Render the bound, or `None` when it should be omitted
    pub fn source(&self) -> Option<Value> {
        match self {
            RangeBound::Integer(v) => Some(Value::from(*v)),
            RangeBound::Float(v) => Some(float(*v)),
            RangeBound::Text(v) => Some(Value::from(v.clone())),
            RangeBound::Instant(v) => Some(Value::from(
                v.to_rfc3339_opts(SecondsFormat::Secs, true),
            )),
            RangeBound::Unsupported => None,
        }
    }
}

macro_rules! integer_bound {
    ($($t:ty),*) => {
        $(impl From<$t> for RangeBound {
            fn from(v: $t) -> Self {
                RangeBound::Integer(v as i64)
            }
        })*
    };
}

integer_bound!(i8, i16, i32, i64, u8, u16, u32, isize);

impl From<u64> for RangeBound {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(v) => RangeBound::Integer(v),
            Err(_) => RangeBound::Float(v as f64),
        }
    }
}

impl From<f32> for RangeBound {
    fn from(v: f32) -> Self {
        RangeBound::Float(f64::from(v))
    }
}

impl From<f64> for RangeBound {
    fn from(v: f64) -> Self {
        RangeBound::Float(v)
    }
}

impl From<&str> for RangeBound {
    fn from(v: &str) -> Self {
        RangeBound::Text(v.to_string())
    }
}

impl From<String> for RangeBound {
    fn from(v: String) -> Self {
        RangeBound::Text(v)
    }
}

impl From<bool> for RangeBound {
    fn from(_: bool) -> Self {
        RangeBound::Unsupported
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for RangeBound {
    fn from(v: DateTime<Tz>) -> Self {
        RangeBound::Instant(v.fixed_offset())
    }
}

impl From<Value> for RangeBound {
    fn from(v: Value) -> Self {
        match v {
            Value::Number(n) => match n.as_i64() {
                Some(i) => RangeBound::Integer(i),
                None => n.as_f64().map_or(RangeBound::Unsupported, RangeBound::Float),
            },
            Value::String(s) => RangeBound::Text(s),
            _ => RangeBound::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_numeric_bounds() {
        assert_eq!(RangeBound::from(50).source(), Some(json!(50)));
        assert_eq!(RangeBound::from(2.5).source(), Some(json!(2.5)));
        assert_eq!(RangeBound::from(100.0).source(), Some(json!(100)));
    }

    #[test]
    fn test_instant_bound_is_rfc3339() {
        let instant = NaiveDate::from_ymd_opt(2012, 12, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        assert_eq!(
            RangeBound::from(instant).source(),
            Some(json!("2012-12-31T00:00:00Z"))
        );
        let offset = FixedOffset::east_opt(3600).unwrap();
        let local = instant.with_timezone(&offset);
        assert_eq!(
            RangeBound::from(local).source(),
            Some(json!("2012-12-31T01:00:00+01:00"))
        );
    }

    #[test]
    fn test_unsupported_bounds_are_omitted() {
        assert_eq!(RangeBound::from(true).source(), None);
        assert_eq!(RangeBound::from(json!([1, 2])).source(), None);
        assert_eq!(RangeBound::from(json!(null)).source(), None);
        assert_eq!(RangeBound::from(json!("now-1d")).source(), Some(json!("now-1d")));
    }
}
