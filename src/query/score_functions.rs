//! Score functions used by the function-score query
//!
//! Each function renders only its body; the enclosing query places that body
//! under [`ScoreFunction::name`] and adds `weight` and `filter` beside it.

use serde_json::Value;
use std::fmt::Debug;

use crate::models::json::{float, put, put_float, put_object, Object};

/// Boxed score function, as held by the function-score query
pub type BoxedScoreFunction = Box<dyn ScoreFunction>;

/// Object-safe cloning for boxed score functions
pub trait ScoreFunctionClone {
    fn clone_box(&self) -> Box<dyn ScoreFunction>;
}

impl<T> ScoreFunctionClone for T
where
    T: 'static + ScoreFunction + Clone,
{
    fn clone_box(&self) -> Box<dyn ScoreFunction> {
        Box::new(self.clone())
    }
}

pub trait ScoreFunction: ScoreFunctionClone + Send + Sync + Debug {
    /// Key the body is placed under, e.g. `gauss`
    fn name(&self) -> &'static str;

    /// Function body without the name or weight
    fn source(&self) -> Value;

    /// Weight multiplied into this function's score
    fn weight(&self) -> Option<f64> {
        None
    }
}

impl Clone for Box<dyn ScoreFunction> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl ScoreFunction for Box<dyn ScoreFunction> {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn source(&self) -> Value {
        self.as_ref().source()
    }

    fn weight(&self) -> Option<f64> {
        self.as_ref().weight()
    }
}

/// Curve of a decay function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecayKind {
    Exponential,
    Gaussian,
    Linear,
}

impl DecayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecayKind::Exponential => "exp",
            DecayKind::Gaussian => "gauss",
            DecayKind::Linear => "linear",
        }
    }
}

/// Decay score by distance from an origin on a numeric, date or geo field
///
/// Renders `{<field>: {origin?, scale, offset?, decay?}, multi_value_mode?}`.
#[derive(Clone, Debug)]
pub struct DecayFunction {
    kind: DecayKind,
    field: String,
    origin: Option<Value>,
    scale: Option<Value>,
    offset: Option<Value>,
    decay: Option<f64>,
    multi_value_mode: Option<String>,
    weight: Option<f64>,
}

impl DecayFunction {
    pub fn new(kind: DecayKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            origin: None,
            scale: None,
            offset: None,
            decay: None,
            multi_value_mode: None,
            weight: None,
        }
    }

    pub fn exp(field: impl Into<String>) -> Self {
        Self::new(DecayKind::Exponential, field)
    }

    pub fn gauss(field: impl Into<String>) -> Self {
        Self::new(DecayKind::Gaussian, field)
    }

    pub fn linear(field: impl Into<String>) -> Self {
        Self::new(DecayKind::Linear, field)
    }

    pub fn origin(mut self, origin: impl Into<Value>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn scale(mut self, scale: impl Into<Value>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    pub fn offset(mut self, offset: impl Into<Value>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn decay(mut self, decay: f64) -> Self {
        self.decay = Some(decay);
        self
    }

    /// How a multi-valued field picks its distance: min, max, avg or sum
    pub fn multi_value_mode(mut self, mode: impl Into<String>) -> Self {
        self.multi_value_mode = Some(mode.into());
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

impl ScoreFunction for DecayFunction {
    fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    fn source(&self) -> Value {
        let mut params = Object::new();
        put(&mut params, "origin", &self.origin);
        put(&mut params, "scale", &self.scale);
        put(&mut params, "offset", &self.offset);
        put_float(&mut params, "decay", self.decay);
        let mut body = Object::new();
        body.insert(self.field.clone(), Value::Object(params));
        put(&mut body, "multi_value_mode", &self.multi_value_mode);
        Value::Object(body)
    }

    fn weight(&self) -> Option<f64> {
        self.weight
    }
}

/// Score by a field value, optionally scaled and transformed
#[derive(Clone, Debug)]
pub struct FieldValueFactorFunction {
    field: String,
    factor: Option<f64>,
    modifier: Option<String>,
    missing: Option<f64>,
    weight: Option<f64>,
}

impl FieldValueFactorFunction {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            factor: None,
            modifier: None,
            missing: None,
            weight: None,
        }
    }

    pub fn factor(mut self, factor: f64) -> Self {
        self.factor = Some(factor);
        self
    }

    /// One of none, log, log1p, log2p, ln, ln1p, ln2p, square, sqrt, reciprocal
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    /// Value used for documents without the field
    pub fn missing(mut self, missing: f64) -> Self {
        self.missing = Some(missing);
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

impl ScoreFunction for FieldValueFactorFunction {
    fn name(&self) -> &'static str {
        "field_value_factor"
    }

    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("field".to_string(), Value::from(self.field.clone()));
        put_float(&mut body, "factor", self.factor);
        put(&mut body, "modifier", &self.modifier);
        put_float(&mut body, "missing", self.missing);
        Value::Object(body)
    }

    fn weight(&self) -> Option<f64> {
        self.weight
    }
}

/// Uniformly random score, reproducible for a given seed
#[derive(Clone, Debug, Default)]
pub struct RandomFunction {
    seed: Option<Value>,
    weight: Option<f64>,
}

impl RandomFunction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: impl Into<Value>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

impl ScoreFunction for RandomFunction {
    fn name(&self) -> &'static str {
        "random_score"
    }

    fn source(&self) -> Value {
        let mut body = Object::new();
        put(&mut body, "seed", &self.seed);
        Value::Object(body)
    }

    fn weight(&self) -> Option<f64> {
        self.weight
    }
}

/// Score computed by a script
#[derive(Clone, Debug)]
pub struct ScriptFunction {
    script: String,
    lang: Option<String>,
    params: Object,
    weight: Option<f64>,
}

impl ScriptFunction {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            lang: None,
            params: Object::new(),
            weight: None,
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

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

impl ScoreFunction for ScriptFunction {
    fn name(&self) -> &'static str {
        "script_score"
    }

    fn source(&self) -> Value {
        let mut body = Object::new();
        body.insert("script".to_string(), Value::from(self.script.clone()));
        put(&mut body, "lang", &self.lang);
        put_object(&mut body, "params", &self.params);
        Value::Object(body)
    }

    fn weight(&self) -> Option<f64> {
        self.weight
    }
}

/// Constant multiplier; the body is the bare number
#[derive(Clone, Debug)]
pub struct BoostFactorFunction {
    boost_factor: f64,
}

impl BoostFactorFunction {
    pub fn new(boost_factor: f64) -> Self {
        Self { boost_factor }
    }
}

impl ScoreFunction for BoostFactorFunction {
    fn name(&self) -> &'static str {
        "boost_factor"
    }

    fn source(&self) -> Value {
        float(self.boost_factor)
    }
}

/// Constant weight with no other scoring, rendered as `"weight": n`
#[derive(Clone, Debug)]
pub struct WeightFactorFunction {
    weight: f64,
}

impl WeightFactorFunction {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl ScoreFunction for WeightFactorFunction {
    fn name(&self) -> &'static str {
        "weight"
    }

    fn source(&self) -> Value {
        float(self.weight)
    }
}

/// Render `{<name>: body, weight?}` into `map`
pub(crate) fn apply_function(function: &dyn ScoreFunction, map: &mut Object) {
    map.insert(function.name().to_string(), function.source());
    put_float(map, "weight", function.weight());
}

/// Render a function as a standalone object
pub fn function_source(function: &dyn ScoreFunction) -> Value {
    let mut map = Object::new();
    apply_function(function, &mut map);
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boxed_clone_renders_equal() {
        let boxed: BoxedScoreFunction = Box::new(
            DecayFunction::gauss("pin.location")
                .origin("11, 12")
                .scale("2km"),
        );
        let copy = boxed.clone();
        assert_eq!(copy.name(), "gauss");
        assert_eq!(copy.source(), boxed.source());
        assert_eq!(copy.source()["pin.location"]["scale"], json!("2km"));
    }

    #[test]
    fn test_decay_functions() {
        let gauss = DecayFunction::gauss("pin.location")
            .origin("11, 12")
            .scale("2km")
            .offset("0km")
            .decay(0.33);
        assert_eq!(gauss.name(), "gauss");
        assert_eq!(
            gauss.source(),
            json!({"pin.location": {
                "origin": "11, 12", "scale": "2km", "offset": "0km", "decay": 0.33
            }})
        );

        let exp = DecayFunction::exp("age").scale(10).multi_value_mode("avg");
        assert_eq!(exp.name(), "exp");
        assert_eq!(
            exp.source(),
            json!({"age": {"scale": 10}, "multi_value_mode": "avg"})
        );
        assert_eq!(DecayFunction::linear("age").name(), "linear");
    }

    #[test]
    fn test_field_value_factor_function() {
        let function = FieldValueFactorFunction::new("popularity")
            .factor(1.2)
            .modifier("sqrt")
            .missing(1.0);
        assert_eq!(
            function.source(),
            json!({"field": "popularity", "factor": 1.2, "modifier": "sqrt", "missing": 1})
        );
    }

    #[test]
    fn test_random_and_script_functions() {
        assert_eq!(RandomFunction::new().source(), json!({}));
        assert_eq!(RandomFunction::new().seed(10).source(), json!({"seed": 10}));

        let script = ScriptFunction::new("_score * doc['my_numeric_field'].value / pow(param1, param2)")
            .param("param1", 2)
            .param("param2", 3.1);
        assert_eq!(
            script.source(),
            json!({
                "script": "_score * doc['my_numeric_field'].value / pow(param1, param2)",
                "params": {"param1": 2, "param2": 3.1}
            })
        );
    }

    #[test]
    fn test_bare_number_bodies() {
        assert_eq!(BoostFactorFunction::new(3.0).source(), json!(3));
        assert_eq!(
            function_source(&WeightFactorFunction::new(2.5)),
            json!({"weight": 2.5})
        );
    }

    #[test]
    fn test_weight_beside_function() {
        let function = FieldValueFactorFunction::new("likes").weight(2.0);
        assert_eq!(
            function_source(&function),
            json!({"field_value_factor": {"field": "likes"}, "weight": 2})
        );
    }
}
