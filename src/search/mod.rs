//! Search request assembly

pub mod highlight;
pub mod rescore;
pub mod search_source;

pub use highlight::{Highlight, HighlighterField};
pub use rescore::{BoxedRescorer, QueryRescorer, Rescore, Rescorer};
pub use search_source::SearchSource;
