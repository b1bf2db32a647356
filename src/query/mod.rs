//! Query family
//!
//! Queries decide which documents match and how they are scored. Every node
//! implements [`Query`] and renders into the object the engine accepts
//! wherever a query is allowed, composites rendering their children
//! recursively.
//!
//! # Example
//!
//! ```json
//! {
//!   "bool": {
//!     "must": { "match": { "content": { "query": "rust programming" } } },
//!     "filter": { "range": { "created_at": {
//!       "from": "2024-01-01", "to": null, "include_lower": true, "include_upper": true
//!     } } }
//!   }
//! }
//! ```

pub mod ast;
pub mod nodes;
pub mod score_functions;
pub mod types;

pub use ast::{BoxedQuery, Query, QueryOrFilter};
pub use nodes::*;
pub use score_functions::{
    BoostFactorFunction, BoxedScoreFunction, DecayFunction, DecayKind, FieldValueFactorFunction,
    RandomFunction, ScoreFunction, ScriptFunction, WeightFactorFunction,
};
pub use types::*;
