use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use elastic_dsl::aggregation::{AvgAggregation, DateHistogramAggregation, TermsAggregation};
use elastic_dsl::filter::RangeFilter;
use elastic_dsl::query::{BoolQuery, MatchQuery, TermQuery};
use elastic_dsl::response::Aggregations;
use elastic_dsl::search::SearchSource;

fn build_source(clauses: usize) -> SearchSource {
    let mut query = BoolQuery::new().filter(RangeFilter::new("retweets").gte(10));
    for i in 0..clauses {
        query = query.should(TermQuery::new("tags", format!("tag{}", i)));
    }
    query = query.must(MatchQuery::new("message", "rust search engine"));

    let users = TermsAggregation::new()
        .field("user")
        .size(10)
        .sub_aggregation("avg_retweets", AvgAggregation::new().field("retweets"))
        .sub_aggregation(
            "per_month",
            DateHistogramAggregation::new().field("created").interval("month"),
        );

    SearchSource::new()
        .query(query)
        .size(20)
        .sort("created", false)
        .aggregation("users", users)
}

fn build_response(buckets: usize) -> String {
    let items: Vec<serde_json::Value> = (0..buckets)
        .map(|i| {
            serde_json::json!({
                "key": format!("user{}", i),
                "doc_count": i + 1,
                "avg_retweets": {"value": i as f64 * 1.5},
                "per_month": {"buckets": [
                    {"key_as_string": "2015-01-01", "key": 1420070400000_i64, "doc_count": 1}
                ]}
            })
        })
        .collect();
    serde_json::json!({"users": {"buckets": items}}).to_string()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_search_source");
    for clauses in [1, 10, 100] {
        let source = build_source(clauses);
        group.bench_with_input(BenchmarkId::from_parameter(clauses), &source, |b, source| {
            b.iter(|| black_box(source.source()))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_aggregations");
    for buckets in [10, 100, 1000] {
        let text = build_response(buckets);
        group.bench_with_input(BenchmarkId::from_parameter(buckets), &text, |b, text| {
            b.iter(|| {
                let aggs: Aggregations = text.parse().unwrap();
                let users = aggs.terms("users").unwrap();
                black_box(users.buckets.iter().filter_map(|b| b.avg("avg_retweets")).count())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_decode);
criterion_main!(benches);
