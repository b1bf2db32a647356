//! Suggester family
//!
//! Suggesters render under their own name inside the `suggest` section of
//! a search request:
//!
//! ```json
//! {
//!   "song-suggest": { "text": "n", "completion": { "field": "suggest" } }
//! }
//! ```

pub mod ast;
pub mod completion;
pub mod context;
pub mod phrase;
pub mod smoothing;
pub mod term;

pub use ast::{BoxedSuggester, SuggestOptions, Suggester};
pub use completion::{CompletionSuggester, FuzzyCompletionSuggester};
pub use context::{
    CategoryContextMapping, CategoryContextQuery, ContextQuery, GeoContextMapping, GeoContextQuery,
};
pub use phrase::{DirectCandidateGenerator, PhraseSuggester};
pub use smoothing::{Laplace, LinearInterpolation, SmoothingModel, StupidBackoff};
pub use term::TermSuggester;
