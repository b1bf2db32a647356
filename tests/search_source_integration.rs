//! Integration tests for request assembly
//!
//! Each reference body below is compared by JSON object equality, except
//! the completion suggester whose key order is part of the wire contract.

use elastic_dsl::aggregation::{
    Aggregation, AvgAggregation, DateRangeAggregation, FiltersAggregation, TermsAggregation,
    TopHitsAggregation,
};
use elastic_dsl::facet::{RangeFacet, TermsFacet};
use elastic_dsl::filter::{
    AndFilter, BoolFilter, Filter, NestedFilter, PrefixFilter, RangeFilter, TermFilter,
};
use elastic_dsl::query::score_functions::BoostFactorFunction;
use elastic_dsl::query::{
    BoolQuery, FunctionScoreQuery, MatchAllQuery, MatchQuery, Query, RangeQuery, ScoreMode,
    TermQuery,
};
use elastic_dsl::search::{Highlight, QueryRescorer, Rescore, SearchSource};
use elastic_dsl::sort::{FieldSort, GeoDistanceSort};
use elastic_dsl::suggest::{CompletionSuggester, Suggester};
use elastic_dsl::{InnerHit, SearchDefaults};
use serde_json::{json, Value};

fn parse(expected: &str) -> Value {
    serde_json::from_str(expected).unwrap()
}

#[test]
fn test_and_filter_with_range_and_prefix() {
    let filter = AndFilter::new()
        .add(RangeFilter::new("postDate").from("2010-03-01").to("2010-04-01"))
        .add(PrefixFilter::new("name.second", "ba"))
        .cache(true)
        .cache_key("MyAndFilter")
        .filter_name("MyFilterName");
    assert_eq!(
        filter.source(),
        parse(
            r#"{"and":{"_cache":true,"_cache_key":"MyAndFilter","_name":"MyFilterName","filters":[{"range":{"postDate":{"from":"2010-03-01","include_lower":true,"include_upper":true,"to":"2010-04-01"}}},{"prefix":{"name.second":"ba"}}]}}"#
        )
    );
}

#[test]
fn test_function_score_with_boost_factors() {
    let query = FunctionScoreQuery::new()
        .query(TermQuery::new("name.last", "banon"))
        .add(
            TermFilter::new("name.last", "banon"),
            BoostFactorFunction::new(3.0),
        )
        .add_score_function(BoostFactorFunction::new(3.0))
        .add_score_function(BoostFactorFunction::new(3.0))
        .boost(3.0)
        .max_boost(10.0)
        .score_mode(ScoreMode::Avg);
    assert_eq!(
        query.source(),
        parse(
            r#"{"function_score":{"boost":3,"functions":[{"boost_factor":3,"filter":{"term":{"name.last":"banon"}}},{"boost_factor":3},{"boost_factor":3}],"max_boost":10,"query":{"term":{"name.last":"banon"}},"score_mode":"avg"}}"#
        )
    );
}

#[test]
fn test_date_range_with_unbounded_ends() {
    let agg = DateRangeAggregation::new()
        .field("created_at")
        .add_unbounded_from("2012-12-31")
        .add_range("2013-01-01", "2013-12-31")
        .add_unbounded_to("2014-01-01");
    assert_eq!(
        agg.source(),
        parse(
            r#"{"date_range":{"field":"created_at","ranges":[{"to":"2012-12-31"},{"from":"2013-01-01","to":"2013-12-31"},{"from":"2014-01-01"}]}}"#
        )
    );
}

#[test]
fn test_completion_suggester_key_order() {
    let suggester = CompletionSuggester::new("song-suggest")
        .text("n")
        .field("suggest");
    assert_eq!(
        serde_json::to_string(&suggester.named_source()).unwrap(),
        r#"{"song-suggest":{"text":"n","completion":{"field":"suggest"}}}"#
    );
}

#[test]
fn test_nested_filter_with_inner_hits() {
    let filter = NestedFilter::new("obj1")
        .query(
            BoolQuery::new()
                .must(TermQuery::new("obj1.name", "blue"))
                .must(RangeQuery::new("obj1.count").gt(5)),
        )
        .cache(true)
        .inner_hit(
            InnerHit::new()
                .name("comments")
                .query(TermQuery::new("user", "olivere")),
        );
    assert_eq!(
        filter.source(),
        parse(
            r#"{"nested":{"_cache":true,"inner_hits":{"name":"comments","query":{"term":{"user":"olivere"}}},"path":"obj1","query":{"bool":{"must":[{"term":{"obj1.name":"blue"}},{"range":{"obj1.count":{"from":5,"include_lower":false,"include_upper":true,"to":null}}}]}}}}"#
        )
    );
}

#[test]
fn test_search_source_with_post_filter_and_highlight() {
    let source = SearchSource::new()
        .query(MatchAllQuery::new())
        .post_filter(TermFilter::new("tag", "important"))
        .highlight(Highlight::new().field("content"));
    assert_eq!(
        source.source(),
        parse(
            r#"{"highlight":{"fields":{"content":{}}},"post_filter":{"term":{"tag":"important"}},"query":{"match_all":{}}}"#
        )
    );
}

#[test]
fn test_full_request_assembly() {
    let source = SearchSource::new()
        .query(
            BoolQuery::new()
                .must(MatchQuery::new("title", "rust"))
                .filter(RangeFilter::new("year").from(2015)),
        )
        .post_filter(BoolFilter::new().must_not(TermFilter::new("status", "draft")))
        .from(0)
        .size(20)
        .timeout_in_millis(300)
        .fetch_source(false)
        .sorter(FieldSort::new("year").desc())
        .sorter(GeoDistanceSort::new("pin").point(40.0, -70.0).unit("km"))
        .facet("years", RangeFacet::new().field("year").lt(2000).gt(2000))
        .facet("tags", TermsFacet::new().field("tags").size(5))
        .aggregation(
            "authors",
            TermsAggregation::new()
                .field("author")
                .order_by_aggregation("avg_score", false)
                .sub_aggregation("avg_score", AvgAggregation::new().field("score"))
                .sub_aggregation(
                    "latest",
                    TopHitsAggregation::new().size(1).sort("year", false),
                ),
        )
        .aggregation(
            "kinds",
            FiltersAggregation::new()
                .filter(TermFilter::new("kind", "book"))
                .filter(TermFilter::new("kind", "paper")),
        )
        .rescorer(
            Rescore::new()
                .window_size(50)
                .rescorer(QueryRescorer::new(MatchQuery::new("body", "rust")).query_weight(0.7)),
        );

    let body = source.source();
    assert_eq!(body["from"], json!(0));
    assert_eq!(body["size"], json!(20));
    assert_eq!(body["timeout"], json!("300ms"));
    assert_eq!(body["_source"], json!(false));
    assert_eq!(
        body["query"]["bool"]["filter"],
        json!({"range": {"year": {
            "from": 2015, "to": null, "include_lower": true, "include_upper": true
        }}})
    );
    assert_eq!(
        body["sort"],
        json!([
            {"year": {"order": "desc"}},
            {"_geo_distance": {"pin": [{"lat": 40, "lon": -70}], "unit": "km"}}
        ])
    );
    assert_eq!(
        body["facets"]["years"],
        json!({"range": {"field": "year", "ranges": [{"to": 2000}, {"from": 2000}]}})
    );
    assert_eq!(
        body["aggregations"]["authors"]["terms"],
        json!({"field": "author", "order": {"avg_score": "desc"}})
    );
    assert_eq!(
        body["aggregations"]["authors"]["aggregations"]["latest"],
        json!({"top_hits": {"size": 1, "sort": [{"year": {"order": "desc"}}]}})
    );
    assert_eq!(
        body["aggregations"]["kinds"],
        json!({"filters": {"filters": [
            {"term": {"kind": "book"}},
            {"term": {"kind": "paper"}}
        ]}})
    );
    assert_eq!(body["rescore"]["window_size"], json!(50));
    assert_eq!(body["rescore"]["query"]["query_weight"], json!(0.7));

    let text = source.to_json_string().unwrap();
    assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), body);
    let pretty = source.to_json_string_pretty().unwrap();
    assert!(pretty.contains('\n'));
}

#[test]
fn test_rendering_is_deterministic_and_pure() {
    let query = BoolQuery::new()
        .should(TermQuery::new("tag", "a"))
        .should(TermQuery::new("tag", "b"))
        .minimum_should_match(1);
    let first = query.source();
    let _ = TermQuery::new("other", "x").source();
    assert_eq!(first, query.source());
    assert_eq!(first["bool"]["should"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_defaults_fill_unset_options() {
    let defaults = SearchDefaults::new()
        .with_size(50)
        .with_rescore_window_size(100)
        .with_track_scores(true);
    let source = SearchSource::new()
        .query(MatchAllQuery::new())
        .rescorer(Rescore::new().rescorer(QueryRescorer::new(MatchQuery::new("body", "x"))))
        .with_defaults(&defaults);
    let body = source.source();
    assert_eq!(body["size"], json!(50));
    assert_eq!(body["track_scores"], json!(true));
    assert_eq!(body["rescore"]["window_size"], json!(100));
}

#[test]
fn test_cloned_request_renders_equal() {
    let source = SearchSource::new()
        .query(
            BoolQuery::new()
                .must(MatchQuery::new("title", "rust"))
                .filter(AndFilter::new().add(TermFilter::new("lang", "en"))),
        )
        .post_filter(NestedFilter::new("comments").query(TermQuery::new("comments.user", "a")))
        .sorter(FieldSort::new("year").desc())
        .facet("tags", TermsFacet::new().field("tags"))
        .aggregation(
            "authors",
            TermsAggregation::new()
                .field("author")
                .sub_aggregation("avg_score", AvgAggregation::new().field("score")),
        )
        .highlight(Highlight::new().field("title"))
        .suggester(CompletionSuggester::new("complete").text("ru").field("suggest"))
        .default_rescore_window_size(50)
        .rescorer(Rescore::new().rescorer(QueryRescorer::new(TermQuery::new("a", 1))));

    let copy = source.clone();
    let body = source.source();
    assert_eq!(copy.source(), body);
    assert_eq!(body["rescore"]["window_size"], json!(50));
    assert_eq!(
        body["rescore"]["query"]["rescore_query"],
        json!({"term": {"a": 1}})
    );

    let boxed: Box<dyn Query> = Box::new(MatchAllQuery::new());
    assert_eq!(boxed.clone().source(), json!({"match_all": {}}));
}
