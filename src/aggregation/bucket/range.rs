//! Range bucketing over numbers, dates, IPv4 addresses and geo distance
//!
//! Entries keep their insertion order and render as `{key?, from?, to?}`.
//! Bounds go through [`RangeBound`], so a bound of an unsupported kind is
//! left out of its entry.

use serde_json::Value;

use crate::aggregation::ast::{
    bucket_setters, render, values_source_setters, Aggregation, NamedAggregations, ValuesSource,
};
use crate::models::json::{put, Object};
use crate::models::{GeoPoint, RangeBound};

/// One entry of a range-like aggregation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeEntry {
    pub key: Option<String>,
    pub from: Option<RangeBound>,
    pub to: Option<RangeBound>,
    pub mask: Option<String>,
}

impl RangeEntry {
    pub fn source(&self) -> Value {
        let mut map = Object::new();
        put(&mut map, "key", &self.key);
        put(&mut map, "from", &self.from.as_ref().and_then(RangeBound::source));
        put(&mut map, "to", &self.to.as_ref().and_then(RangeBound::source));
        put(&mut map, "mask", &self.mask);
        Value::Object(map)
    }
}

pub(crate) fn render_entries(entries: &[RangeEntry]) -> Value {
    Value::Array(entries.iter().map(RangeEntry::source).collect())
}

/// Entry builders for nodes with an `entries: Vec<RangeEntry>` field
macro_rules! range_entry_setters {
    ($ty:ty) => {
        impl $ty {
            fn push_entry(
                mut self,
                key: Option<String>,
                from: Option<$crate::models::RangeBound>,
                to: Option<$crate::models::RangeBound>,
            ) -> Self {
                self.entries.push($crate::aggregation::RangeEntry {
                    key,
                    from,
                    to,
                    mask: None,
                });
                self
            }

            /// Append `[from, to)`
            pub fn add_range(
                self,
                from: impl Into<$crate::models::RangeBound>,
                to: impl Into<$crate::models::RangeBound>,
            ) -> Self {
                self.push_entry(None, Some(from.into()), Some(to.into()))
            }

            pub fn add_range_with_key(
                self,
                key: impl Into<String>,
                from: impl Into<$crate::models::RangeBound>,
                to: impl Into<$crate::models::RangeBound>,
            ) -> Self {
                self.push_entry(Some(key.into()), Some(from.into()), Some(to.into()))
            }

            /// Append `[from, +inf)`
            pub fn add_unbounded_to(self, from: impl Into<$crate::models::RangeBound>) -> Self {
                self.push_entry(None, Some(from.into()), None)
            }

            pub fn add_unbounded_to_with_key(
                self,
                key: impl Into<String>,
                from: impl Into<$crate::models::RangeBound>,
            ) -> Self {
                self.push_entry(Some(key.into()), Some(from.into()), None)
            }

            /// Append `(-inf, to)`
            pub fn add_unbounded_from(self, to: impl Into<$crate::models::RangeBound>) -> Self {
                self.push_entry(None, None, Some(to.into()))
            }

            pub fn add_unbounded_from_with_key(
                self,
                key: impl Into<String>,
                to: impl Into<$crate::models::RangeBound>,
            ) -> Self {
                self.push_entry(Some(key.into()), None, Some(to.into()))
            }

            /// Alias of [`Self::add_unbounded_from`]
            pub fn lt(self, to: impl Into<$crate::models::RangeBound>) -> Self {
                self.add_unbounded_from(to)
            }

            /// Alias of [`Self::add_range`]
            pub fn between(
                self,
                from: impl Into<$crate::models::RangeBound>,
                to: impl Into<$crate::models::RangeBound>,
            ) -> Self {
                self.add_range(from, to)
            }

            /// Alias of [`Self::add_unbounded_to`]
            pub fn gt(self, from: impl Into<$crate::models::RangeBound>) -> Self {
                self.add_unbounded_to(from)
            }
        }
    };
}

pub(crate) use range_entry_setters;

/// Numeric range buckets
#[derive(Clone, Debug, Default)]
pub struct RangeAggregation {
    values: ValuesSource,
    keyed: Option<bool>,
    unmapped: Option<bool>,
    entries: Vec<RangeEntry>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl RangeAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return buckets as an object keyed by range key instead of a list
    pub fn keyed(mut self, keyed: bool) -> Self {
        self.keyed = Some(keyed);
        self
    }

    pub fn unmapped(mut self, unmapped: bool) -> Self {
        self.unmapped = Some(unmapped);
        self
    }
}

values_source_setters!(RangeAggregation);
range_entry_setters!(RangeAggregation);
bucket_setters!(RangeAggregation);

impl Aggregation for RangeAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        self.values.apply(&mut body);
        put(&mut body, "keyed", &self.keyed);
        put(&mut body, "unmapped", &self.unmapped);
        body.insert("ranges".to_string(), render_entries(&self.entries));
        render("range", body, &self.sub_aggregations, &self.meta)
    }
}

/// Date range buckets; bounds may be date math strings or instants
#[derive(Clone, Debug, Default)]
pub struct DateRangeAggregation {
    values: ValuesSource,
    keyed: Option<bool>,
    unmapped: Option<bool>,
    entries: Vec<RangeEntry>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl DateRangeAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyed(mut self, keyed: bool) -> Self {
        self.keyed = Some(keyed);
        self
    }

    pub fn unmapped(mut self, unmapped: bool) -> Self {
        self.unmapped = Some(unmapped);
        self
    }
}

values_source_setters!(DateRangeAggregation);
range_entry_setters!(DateRangeAggregation);
bucket_setters!(DateRangeAggregation);

impl Aggregation for DateRangeAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        self.values.apply(&mut body);
        put(&mut body, "keyed", &self.keyed);
        put(&mut body, "unmapped", &self.unmapped);
        body.insert("ranges".to_string(), render_entries(&self.entries));
        render("date_range", body, &self.sub_aggregations, &self.meta)
    }
}

/// IPv4 range buckets, given as address bounds or CIDR masks
#[derive(Clone, Debug, Default)]
pub struct IpRangeAggregation {
    values: ValuesSource,
    keyed: Option<bool>,
    entries: Vec<RangeEntry>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl IpRangeAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyed(mut self, keyed: bool) -> Self {
        self.keyed = Some(keyed);
        self
    }

    /// Append a CIDR mask entry, e.g. `10.0.0.0/25`
    pub fn add_mask(mut self, mask: impl Into<String>) -> Self {
        self.entries.push(RangeEntry {
            mask: Some(mask.into()),
            ..Default::default()
        });
        self
    }

    pub fn add_mask_with_key(mut self, key: impl Into<String>, mask: impl Into<String>) -> Self {
        self.entries.push(RangeEntry {
            key: Some(key.into()),
            mask: Some(mask.into()),
            ..Default::default()
        });
        self
    }
}

values_source_setters!(IpRangeAggregation);
range_entry_setters!(IpRangeAggregation);
bucket_setters!(IpRangeAggregation);

impl Aggregation for IpRangeAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        self.values.apply(&mut body);
        put(&mut body, "keyed", &self.keyed);
        body.insert("ranges".to_string(), render_entries(&self.entries));
        render("ip_range", body, &self.sub_aggregations, &self.meta)
    }
}

/// Buckets by distance rings around an origin point
#[derive(Clone, Debug, Default)]
pub struct GeoDistanceAggregation {
    field: Option<String>,
    origin: Option<String>,
    unit: Option<String>,
    distance_type: Option<String>,
    entries: Vec<RangeEntry>,
    sub_aggregations: NamedAggregations,
    meta: Object,
}

impl GeoDistanceAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Origin as `"lat, lon"` or a geohash
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn origin_point(mut self, point: GeoPoint) -> Self {
        self.origin = Some(point.to_string());
        self
    }

    /// Distance unit of the ranges, e.g. `km`
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// sloppy_arc, arc or plane
    pub fn distance_type(mut self, distance_type: impl Into<String>) -> Self {
        self.distance_type = Some(distance_type.into());
        self
    }
}

range_entry_setters!(GeoDistanceAggregation);
bucket_setters!(GeoDistanceAggregation);

impl Aggregation for GeoDistanceAggregation {
    fn source(&self) -> Value {
        let mut body = Object::new();
        put(&mut body, "field", &self.field);
        put(&mut body, "origin", &self.origin);
        put(&mut body, "unit", &self.unit);
        put(&mut body, "distance_type", &self.distance_type);
        body.insert("ranges".to_string(), render_entries(&self.entries));
        render("geo_distance", body, &self.sub_aggregations, &self.meta)
    }
}
