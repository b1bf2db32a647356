//! Integration tests for the aggregation response decoder

use elastic_dsl::response::{Aggregations, FiltersBuckets};
use elastic_dsl::DslError;
use serde_json::{json, Value};

const RESPONSE: &str = r#"{
    "took": 3,
    "timed_out": false,
    "hits": {"total": 3, "max_score": 1.0, "hits": []},
    "aggregations": {
        "users": {
            "doc_count_error_upper_bound": 0,
            "sum_other_doc_count": 0,
            "buckets": [
                {
                    "key": "olivere",
                    "doc_count": 2,
                    "retweets": {"value": 108},
                    "per_year": {"buckets": [
                        {"key_as_string": "2012-01-01", "key": 1325376000000, "doc_count": 1},
                        {"key_as_string": "2014-01-01", "key": 1388534400000, "doc_count": 1}
                    ]}
                },
                {
                    "key": "sandrae",
                    "doc_count": 1,
                    "retweets": {"value": 12},
                    "per_year": {"buckets": [
                        {"key_as_string": "2011-01-01", "key": 1293840000000, "doc_count": 1}
                    ]}
                }
            ]
        },
        "retweets_stats": {"count": 3, "min": 0, "max": 108, "avg": 40, "sum": 120},
        "no_docs": {"count": 0, "min": null, "max": null, "avg": null, "sum": null},
        "global_count": {"doc_count": 3, "meta": {"owner": "reports"}},
        "kinds": {"buckets": {"books": {"doc_count": 2}, "papers": {"doc_count": 1}}},
        "top_tweet": {"hits": {"total": 3, "max_score": null, "hits": [
            {"_index": "twitter", "_type": "tweet", "_id": "1", "_score": null,
             "_source": {"user": "olivere", "retweets": 108}, "sort": [108]}
        ]}},
        "empty": null
    }
}"#;

fn aggregations() -> Aggregations {
    let response: serde_json::Value = serde_json::from_str(RESPONSE).unwrap();
    Aggregations::from_value(response["aggregations"].clone()).unwrap()
}

#[test]
fn test_recursive_descent_through_buckets() {
    let aggs = aggregations();
    let users = aggs.terms("users").unwrap();
    assert_eq!(users.buckets.len(), 2);

    let olivere = &users.buckets[0];
    assert_eq!(olivere.key, json!("olivere"));
    assert_eq!(olivere.sum("retweets").unwrap().value, Some(108.0));

    let per_year = olivere.date_histogram("per_year").unwrap();
    assert_eq!(per_year.buckets.len(), 2);
    assert_eq!(per_year.buckets[1].key_as_string.as_deref(), Some("2014-01-01"));
    assert_eq!(per_year.buckets[1].key, 1388534400000.0);

    let sandrae = users.buckets[1].date_histogram("per_year").unwrap();
    assert_eq!(sandrae.buckets[0].doc_count, 1);
}

#[test]
fn test_metric_values() {
    let aggs = aggregations();
    let stats = aggs.stats("retweets_stats").unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.max, Some(108.0));
    assert_eq!(stats.avg, Some(40.0));

    let empty = aggs.stats("no_docs").unwrap();
    assert_eq!(empty.count, 0);
    assert_eq!(empty.min, None);
    assert_eq!(empty.sum, None);
}

#[test]
fn test_meta_is_exposed() {
    let aggs = aggregations();
    let global = aggs.global("global_count").unwrap();
    assert_eq!(global.doc_count, 3);
    assert_eq!(global.meta.unwrap()["owner"], json!("reports"));
}

#[test]
fn test_named_filters_buckets() {
    let aggs = aggregations();
    let kinds = aggs.filters("kinds").unwrap();
    match &kinds.buckets {
        FiltersBuckets::Named(named) => {
            assert_eq!(named["books"].doc_count, 2);
            assert_eq!(named["papers"].doc_count, 1);
        }
        FiltersBuckets::List(_) => panic!("expected named buckets"),
    }
}

#[test]
fn test_top_hits() {
    let aggs = aggregations();
    let top = aggs.top_hits("top_tweet").unwrap();
    let hits = top.hits.unwrap();
    assert_eq!(hits.total, 3);
    assert_eq!(hits.hits[0].source.as_ref().unwrap()["retweets"], json!(108));
    assert_eq!(hits.hits[0].sort, vec![json!(108)]);
}

#[test]
fn test_absent_null_and_mismatched_fragments() {
    let aggs = aggregations();
    assert!(aggs.terms("missing").is_none());

    let empty = aggs.terms("empty").unwrap();
    assert!(empty.buckets.is_empty());

    // named filter buckets are not a bucket list
    assert!(aggs.terms("kinds").is_none());
    // a stats payload has no bucket list, so it still decodes as empty terms
    assert!(aggs.terms("retweets_stats").unwrap().buckets.is_empty());

    // string keys do not decode as histogram buckets, the fragment stays usable
    assert!(aggs.histogram("users").is_none());
    assert!(aggs.terms("users").is_some());
}

#[test]
fn test_invalid_text() {
    assert!(matches!(
        "\"users\"".parse::<Aggregations>(),
        Err(DslError::InvalidResponse(_))
    ));
    let aggs: Aggregations = "null".parse().unwrap();
    assert!(aggs.is_empty());
}

#[test]
fn test_sampler_and_pipeline_results() {
    let aggs: Aggregations = r#"{
        "sample": {
            "doc_count": 200,
            "keywords": {"buckets": [{"key": "elasticsearch", "doc_count": 120}]}
        },
        "sales_per_month": {"buckets": [
            {"key_as_string": "2015/01/01", "key": 1420070400000, "doc_count": 3,
             "sales": {"value": 550.0}},
            {"key_as_string": "2015/02/01", "key": 1422748800000, "doc_count": 2,
             "sales": {"value": 60.0},
             "sales_deriv": {"value": -490.0, "normalized_value": -15.8},
             "cumulative_sales": {"value": 610.0}}
        ]},
        "max_monthly_sales": {"keys": ["2015/01/01"], "value": 550.0},
        "avg_monthly_sales": {"value": 305.0},
        "stats_monthly_sales": {"count": 2, "min": 60.0, "max": 550.0, "avg": 305.0, "sum": 610.0},
        "percentiles_monthly_sales": {"values": {"50.0": 60.0, "99.0": 550.0}},
        "income": {"doc_count": 2, "fields": [
            {"name": "income", "count": 2, "mean": 50.0, "variance": 2.0,
             "skewness": 0.0, "kurtosis": 1.0,
             "covariance": {"income": 2.0}, "correlation": {"income": 1.0}}
        ]}
    }"#
    .parse()
    .unwrap();

    let sample = aggs.sampler("sample").unwrap();
    assert_eq!(sample.doc_count, 200);
    assert_eq!(sample.terms("keywords").unwrap().buckets[0].doc_count, 120);

    let months = aggs.date_histogram("sales_per_month").unwrap();
    assert!(months.buckets[0].derivative("sales_deriv").is_none());
    let february = &months.buckets[1];
    let deriv = february.derivative("sales_deriv").unwrap();
    assert_eq!(deriv.value, Some(-490.0));
    assert_eq!(deriv.normalized_value, Some(-15.8));
    assert_eq!(february.cumulative_sum("cumulative_sales").unwrap().value, Some(610.0));

    let max = aggs.max_bucket("max_monthly_sales").unwrap();
    assert_eq!(max.keys, vec![json!("2015/01/01")]);
    assert_eq!(max.value, Some(550.0));
    assert_eq!(aggs.avg_bucket("avg_monthly_sales").unwrap().value, Some(305.0));
    assert_eq!(aggs.stats_bucket("stats_monthly_sales").unwrap().sum, Some(610.0));
    assert_eq!(
        aggs.percentiles_bucket("percentiles_monthly_sales")
            .unwrap()
            .percentile(99.0),
        Some(550.0)
    );

    let matrix = aggs.matrix_stats("income").unwrap();
    assert_eq!(matrix.field("income").unwrap().mean, Some(50.0));
    assert!(matrix.field("poverty").is_none());
}

/// Every number of `original` is present in `encoded` with the same value;
/// keys added on re-encoding may only carry `null`
fn assert_same_numbers(original: &Value, encoded: &Value) {
    match (original, encoded) {
        (Value::Number(a), Value::Number(b)) => assert_eq!(a.as_f64(), b.as_f64()),
        (Value::Object(a), Value::Object(b)) => {
            for (key, value) in a {
                let other = b.get(key).unwrap_or_else(|| panic!("missing key {key}"));
                assert_same_numbers(value, other);
            }
            for (key, value) in b {
                if !a.contains_key(key) {
                    assert!(value.is_null(), "unexpected key {key}: {value}");
                }
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(b) {
                assert_same_numbers(x, y);
            }
        }
        (a, b) => assert_eq!(a, b),
    }
}

#[test]
fn test_metrics_reencode_to_the_same_numbers() {
    let fixtures = json!({
        "value": {"value": 108},
        "stats": {"count": 3, "min": 0, "max": 108, "avg": 40, "sum": 120},
        "extended": {
            "count": 6, "min": 72, "max": 117.6, "avg": 94.2, "sum": 565.2,
            "sum_of_squares": 54551.51999999999, "variance": 218.2799999999976,
            "std_deviation": 14.774302013969987
        },
        "percentiles": {"values": {"1.0": 15, "50.0": 25, "99.0": 150}},
        "bounds": {"bounds": {
            "top_left": {"lat": 80.45, "lon": -160.22},
            "bottom_right": {"lat": 40.65, "lon": 42.57}
        }}
    });
    let aggs = Aggregations::from_value(fixtures.clone()).unwrap();

    let encoded = [
        ("value", serde_json::to_value(aggs.avg("value").unwrap()).unwrap()),
        ("stats", serde_json::to_value(aggs.stats("stats").unwrap()).unwrap()),
        ("extended", serde_json::to_value(aggs.extended_stats("extended").unwrap()).unwrap()),
        ("percentiles", serde_json::to_value(aggs.percentiles("percentiles").unwrap()).unwrap()),
        ("bounds", serde_json::to_value(aggs.geo_bounds("bounds").unwrap()).unwrap()),
    ];
    for (name, value) in &encoded {
        assert_same_numbers(&fixtures[*name], value);
    }

    // a second decode of the encoded form yields the same result
    let again = Aggregations::from_value(json!({"stats": encoded[1].1})).unwrap();
    assert_eq!(again.stats("stats"), aggs.stats("stats"));
}
