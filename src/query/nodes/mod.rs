//! Concrete query node implementations

mod bool_query;
mod boosting_query;
mod common_terms_query;
mod custom_score_query;
mod dis_max_query;
mod filtered_query;
mod function_score_query;
mod fuzzy_like_this_query;
mod fuzzy_query;
mod has_child_query;
mod ids_query;
mod match_all_query;
mod match_query;
mod more_like_this_query;
mod multi_match_query;
mod nested_query;
mod prefix_query;
mod query_string_query;
mod range_query;
mod regexp_query;
mod template_query;
mod term_query;
mod terms_query;
mod wildcard_query;

pub use bool_query::BoolQuery;
pub use boosting_query::BoostingQuery;
pub use common_terms_query::CommonTermsQuery;
pub use custom_score_query::{CustomFiltersScoreQuery, CustomScoreQuery, FilterScore};
pub use dis_max_query::DisMaxQuery;
pub use filtered_query::FilteredQuery;
pub use function_score_query::FunctionScoreQuery;
pub use fuzzy_like_this_query::{FuzzyLikeThisFieldQuery, FuzzyLikeThisQuery};
pub use fuzzy_query::FuzzyQuery;
pub use has_child_query::{HasChildQuery, HasParentQuery};
pub use ids_query::IdsQuery;
pub use match_all_query::MatchAllQuery;
pub use match_query::MatchQuery;
pub use more_like_this_query::{MoreLikeThisFieldQuery, MoreLikeThisItem, MoreLikeThisQuery};
pub use multi_match_query::MultiMatchQuery;
pub use nested_query::NestedQuery;
pub use prefix_query::PrefixQuery;
pub use query_string_query::{QueryStringQuery, SimpleQueryStringQuery};
pub use range_query::RangeQuery;
pub use regexp_query::RegexpQuery;
pub use template_query::{TemplateKind, TemplateQuery};
pub use term_query::TermQuery;
pub use terms_query::TermsQuery;
pub use wildcard_query::WildcardQuery;
