//! Smoothing models of the phrase suggester
//!
//! A model renders only its parameters; the suggester places them under
//! `smoothing` keyed by [`SmoothingModel::name`].

use serde_json::Value;
use std::fmt::Debug;

use crate::models::json::{float, Object};

/// Object-safe cloning for boxed smoothing models
pub trait SmoothingModelClone {
    fn clone_box(&self) -> Box<dyn SmoothingModel>;
}

impl<T> SmoothingModelClone for T
where
    T: 'static + SmoothingModel + Clone,
{
    fn clone_box(&self) -> Box<dyn SmoothingModel> {
        Box::new(self.clone())
    }
}

pub trait SmoothingModel: SmoothingModelClone + Send + Sync + Debug {
    fn name(&self) -> &'static str;

    fn source(&self) -> Value;
}

impl Clone for Box<dyn SmoothingModel> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

/// Backs off to lower order n-grams with a fixed discount
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StupidBackoff {
    discount: f64,
}

impl StupidBackoff {
    pub fn new(discount: f64) -> Self {
        Self { discount }
    }
}

impl SmoothingModel for StupidBackoff {
    fn name(&self) -> &'static str {
        "stupid_backoff"
    }

    fn source(&self) -> Value {
        let mut map = Object::new();
        map.insert("discount".to_string(), float(self.discount));
        Value::Object(map)
    }
}

/// Additive smoothing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Laplace {
    alpha: f64,
}

impl Laplace {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl SmoothingModel for Laplace {
    fn name(&self) -> &'static str {
        "laplace"
    }

    fn source(&self) -> Value {
        let mut map = Object::new();
        map.insert("alpha".to_string(), float(self.alpha));
        Value::Object(map)
    }
}

/// Weighted sum of the unigram, bigram and trigram probabilities
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearInterpolation {
    trigram_lambda: f64,
    bigram_lambda: f64,
    unigram_lambda: f64,
}

impl LinearInterpolation {
    pub fn new(trigram_lambda: f64, bigram_lambda: f64, unigram_lambda: f64) -> Self {
        Self {
            trigram_lambda,
            bigram_lambda,
            unigram_lambda,
        }
    }
}

impl SmoothingModel for LinearInterpolation {
    fn name(&self) -> &'static str {
        "linear_interpolation"
    }

    fn source(&self) -> Value {
        let mut map = Object::new();
        map.insert("trigram_lambda".to_string(), float(self.trigram_lambda));
        map.insert("bigram_lambda".to_string(), float(self.bigram_lambda));
        map.insert("unigram_lambda".to_string(), float(self.unigram_lambda));
        Value::Object(map)
    }
}
