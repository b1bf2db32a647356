//! Option types shared by several query variants

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::json::Object;

/// Operator for combining terms in a match query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOperator {
    /// All terms must match (AND)
    And,
    /// At least one term must match (OR)
    #[default]
    Or,
}

impl MatchOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperator::And => "and",
            MatchOperator::Or => "or",
        }
    }
}

/// How a match query analyzes its input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    #[default]
    Boolean,
    Phrase,
    PhrasePrefix,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Boolean => "boolean",
            MatchType::Phrase => "phrase",
            MatchType::PhrasePrefix => "phrase_prefix",
        }
    }
}

/// Execution strategy of a multi-match query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiMatchType {
    #[default]
    BestFields,
    MostFields,
    CrossFields,
    Phrase,
    PhrasePrefix,
}

impl MultiMatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MultiMatchType::BestFields => "best_fields",
            MultiMatchType::MostFields => "most_fields",
            MultiMatchType::CrossFields => "cross_fields",
            MultiMatchType::Phrase => "phrase",
            MultiMatchType::PhrasePrefix => "phrase_prefix",
        }
    }
}

/// What a match query does when the analyzer removes every token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroTermsQuery {
    None,
    All,
}

impl ZeroTermsQuery {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZeroTermsQuery::None => "none",
            ZeroTermsQuery::All => "all",
        }
    }
}

/// How the scores of several score functions are combined
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    Multiply,
    Sum,
    Avg,
    First,
    Max,
    Min,
}

impl ScoreMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreMode::Multiply => "multiply",
            ScoreMode::Sum => "sum",
            ScoreMode::Avg => "avg",
            ScoreMode::First => "first",
            ScoreMode::Max => "max",
            ScoreMode::Min => "min",
        }
    }
}

/// How the function score is combined with the query score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoostMode {
    Multiply,
    Replace,
    Sum,
    Avg,
    Max,
    Min,
}

impl BoostMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoostMode::Multiply => "multiply",
            BoostMode::Replace => "replace",
            BoostMode::Sum => "sum",
            BoostMode::Avg => "avg",
            BoostMode::Max => "max",
            BoostMode::Min => "min",
        }
    }
}

/// Minimum should match configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinimumShouldMatch {
    /// Exact count, negative values count from the total
    Count(i64),
    /// Percentage or combination spec (e.g. "75%", "3<90%")
    Percentage(String),
}

impl MinimumShouldMatch {
    pub fn to_value(&self) -> Value {
        match self {
            MinimumShouldMatch::Count(n) => Value::from(*n),
            MinimumShouldMatch::Percentage(s) => Value::from(s.clone()),
        }
    }
}

impl From<i64> for MinimumShouldMatch {
    fn from(n: i64) -> Self {
        MinimumShouldMatch::Count(n)
    }
}

impl From<i32> for MinimumShouldMatch {
    fn from(n: i32) -> Self {
        MinimumShouldMatch::Count(i64::from(n))
    }
}

impl From<&str> for MinimumShouldMatch {
    fn from(s: &str) -> Self {
        MinimumShouldMatch::Percentage(s.to_string())
    }
}

impl From<String> for MinimumShouldMatch {
    fn from(s: String) -> Self {
        MinimumShouldMatch::Percentage(s)
    }
}

impl From<MinimumShouldMatch> for Value {
    fn from(msm: MinimumShouldMatch) -> Self {
        msm.to_value()
    }
}

/// Bounds shared by the range query and the range filter
///
/// `from` and `to` are always emitted (as `null` when open) together with
/// both inclusion flags, which default to `true`.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeBounds {
    pub from: Value,
    pub to: Value,
    pub include_lower: bool,
    pub include_upper: bool,
}

impl Default for RangeBounds {
    fn default() -> Self {
        Self {
            from: Value::Null,
            to: Value::Null,
            include_lower: true,
            include_upper: true,
        }
    }
}

impl RangeBounds {
    pub(crate) fn gt(&mut self, from: Value) {
        self.from = from;
        self.include_lower = false;
    }

    pub(crate) fn gte(&mut self, from: Value) {
        self.from = from;
        self.include_lower = true;
    }

    pub(crate) fn lt(&mut self, to: Value) {
        self.to = to;
        self.include_upper = false;
    }

    pub(crate) fn lte(&mut self, to: Value) {
        self.to = to;
        self.include_upper = true;
    }

    /// Write `from`, `to` and both inclusion flags
    pub(crate) fn apply(&self, map: &mut Object) {
        map.insert("from".to_string(), self.from.clone());
        map.insert("to".to_string(), self.to.clone());
        map.insert("include_lower".to_string(), Value::Bool(self.include_lower));
        map.insert("include_upper".to_string(), Value::Bool(self.include_upper));
    }
}
