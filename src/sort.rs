//! Structured sort specifications
//!
//! A search source renders its sorters as the `sort` array, in the order
//! they were added.

use serde_json::Value;
use std::fmt::Debug;

use crate::filter::{BoxedFilter, Filter};
use crate::models::json::{put, put_object, single, Object};
use crate::models::GeoPoint;

/// Boxed sorter, as held by the search source
pub type BoxedSorter = Box<dyn Sorter>;

/// Object-safe cloning for boxed sorters
pub trait SorterClone {
    fn clone_box(&self) -> Box<dyn Sorter>;
}

impl<T> SorterClone for T
where
    T: 'static + Sorter + Clone,
{
    fn clone_box(&self) -> Box<dyn Sorter> {
        Box::new(self.clone())
    }
}

pub trait Sorter: SorterClone + Send + Sync + Debug {
    /// Render one entry of the `sort` array
    fn source(&self) -> Value;
}

impl Clone for Box<dyn Sorter> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl Sorter for Box<dyn Sorter> {
    fn source(&self) -> Value {
        self.as_ref().source()
    }
}

/// Nested-document options shared by every sorter except the score sort
#[derive(Clone, Debug, Default)]
struct NestedSortOptions {
    sort_mode: Option<String>,
    nested_filter: Option<BoxedFilter>,
    nested_path: Option<String>,
}

impl NestedSortOptions {
    fn apply(&self, map: &mut Object) {
        put(map, "mode", &self.sort_mode);
        if let Some(filter) = &self.nested_filter {
            map.insert("nested_filter".to_string(), filter.source());
        }
        put(map, "nested_path", &self.nested_path);
    }
}

macro_rules! nested_sort_setters {
    ($ty:ty) => {
        impl $ty {
            /// min, max, sum or avg for multi-valued fields
            pub fn sort_mode(mut self, mode: impl Into<String>) -> Self {
                self.nested.sort_mode = Some(mode.into());
                self
            }

            pub fn nested_filter(mut self, filter: impl Filter + 'static) -> Self {
                self.nested.nested_filter = Some(Box::new(filter));
                self
            }

            pub fn nested_path(mut self, path: impl Into<String>) -> Self {
                self.nested.nested_path = Some(path.into());
                self
            }
        }
    };
}

/// Sort by relevance score, descending unless told otherwise
#[derive(Clone, Debug, Default)]
pub struct ScoreSort {
    ascending: bool,
}

impl ScoreSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn asc(self) -> Self {
        self.ascending(true)
    }

    pub fn desc(self) -> Self {
        self.ascending(false)
    }
}

impl Sorter for ScoreSort {
    fn source(&self) -> Value {
        let mut body = Object::new();
        if self.ascending {
            body.insert("reverse".to_string(), Value::Bool(true));
        }
        single("_score", Value::Object(body))
    }
}

/// Sort by a field value, ascending by default
#[derive(Clone, Debug)]
pub struct FieldSort {
    field: String,
    ascending: bool,
    missing: Option<Value>,
    ignore_unmapped: Option<bool>,
    unmapped_type: Option<String>,
    nested: NestedSortOptions,
}

impl FieldSort {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
            missing: None,
            ignore_unmapped: None,
            unmapped_type: None,
            nested: NestedSortOptions::default(),
        }
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn asc(self) -> Self {
        self.ascending(true)
    }

    pub fn desc(self) -> Self {
        self.ascending(false)
    }

    /// `_last`, `_first` or a custom value for documents without the field
    pub fn missing(mut self, missing: impl Into<Value>) -> Self {
        self.missing = Some(missing.into());
        self
    }

    pub fn ignore_unmapped(mut self, ignore: bool) -> Self {
        self.ignore_unmapped = Some(ignore);
        self
    }

    pub fn unmapped_type(mut self, typ: impl Into<String>) -> Self {
        self.unmapped_type = Some(typ.into());
        self
    }
}

nested_sort_setters!(FieldSort);

impl Sorter for FieldSort {
    fn source(&self) -> Value {
        let mut body = Object::new();
        let order = if self.ascending { "asc" } else { "desc" };
        body.insert("order".to_string(), Value::from(order));
        put(&mut body, "missing", &self.missing);
        put(&mut body, "ignore_unmapped", &self.ignore_unmapped);
        put(&mut body, "unmapped_type", &self.unmapped_type);
        self.nested.apply(&mut body);
        single(self.field.clone(), Value::Object(body))
    }
}

/// Sort by distance from one or more points
///
/// Points render as `{lat, lon}` followed by the geohashes, all under the
/// field name.
#[derive(Clone, Debug)]
pub struct GeoDistanceSort {
    field: String,
    points: Vec<GeoPoint>,
    geohashes: Vec<String>,
    ascending: bool,
    unit: Option<String>,
    distance_type: Option<String>,
    nested: NestedSortOptions,
}

impl GeoDistanceSort {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            points: Vec::new(),
            geohashes: Vec::new(),
            ascending: true,
            unit: None,
            distance_type: None,
            nested: NestedSortOptions::default(),
        }
    }

    pub fn point(mut self, lat: f64, lon: f64) -> Self {
        self.points.push(GeoPoint::new(lat, lon));
        self
    }

    pub fn points(mut self, points: impl IntoIterator<Item = GeoPoint>) -> Self {
        self.points.extend(points);
        self
    }

    pub fn geohash(mut self, geohash: impl Into<String>) -> Self {
        self.geohashes.push(geohash.into());
        self
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn asc(self) -> Self {
        self.ascending(true)
    }

    pub fn desc(self) -> Self {
        self.ascending(false)
    }

    /// Unit of the computed sort values, e.g. `km`
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

nested_sort_setters!(GeoDistanceSort);

impl Sorter for GeoDistanceSort {
    fn source(&self) -> Value {
        let locations: Vec<Value> = self
            .points
            .iter()
            .map(GeoPoint::source)
            .chain(self.geohashes.iter().map(|hash| Value::from(hash.clone())))
            .collect();
        let mut body = Object::new();
        body.insert(self.field.clone(), Value::Array(locations));
        put(&mut body, "unit", &self.unit);
        put(&mut body, "distance_type", &self.distance_type);
        if !self.ascending {
            body.insert("reverse".to_string(), Value::Bool(true));
        }
        self.nested.apply(&mut body);
        single("_geo_distance", Value::Object(body))
    }
}

/// Sort by a script value of the given type (`number` or `string`)
#[derive(Clone, Debug)]
pub struct ScriptSort {
    script: String,
    typ: String,
    lang: Option<String>,
    params: Object,
    ascending: bool,
    nested: NestedSortOptions,
}

impl ScriptSort {
    pub fn new(script: impl Into<String>, typ: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            typ: typ.into(),
            lang: None,
            params: Object::new(),
            ascending: true,
            nested: NestedSortOptions::default(),
        }
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn asc(self) -> Self {
        self.ascending(true)
    }

    pub fn desc(self) -> Self {
        self.ascending(false)
    }
}

nested_sort_setters!(ScriptSort);

impl Sorter for ScriptSort {
    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("script".to_string(), Value::from(self.script.clone()));
        body.insert("type".to_string(), Value::from(self.typ.clone()));
        if !self.ascending {
            body.insert("reverse".to_string(), Value::Bool(true));
        }
        put(&mut body, "lang", &self.lang);
        put_object(&mut body, "params", &self.params);
        self.nested.apply(&mut body);
        single("_script", Value::Object(body))
    }
}
