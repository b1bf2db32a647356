//! Search hits, as embedded in top-hits results

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The `hits` object of a response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHits {
    pub total: i64,
    pub max_score: Option<f64>,
    pub hits: Vec<SearchHit>,
}

/// A single hit
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_version")]
    pub version: Option<i64>,
    #[serde(rename = "_source")]
    pub source: Option<Value>,
    pub fields: Option<Map<String, Value>>,
    pub highlight: Option<BTreeMap<String, Vec<String>>>,
    pub sort: Vec<Value>,
    pub matched_queries: Vec<String>,
    #[serde(rename = "_explanation")]
    pub explanation: Option<Value>,
    pub inner_hits: Option<BTreeMap<String, InnerHitResult>>,
}

/// Inner hits of a hit, by inner hit name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InnerHitResult {
    pub hits: SearchHits,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_hit() {
        let hits: SearchHits = serde_json::from_value(json!({
            "total": 1,
            "max_score": null,
            "hits": [{
                "_index": "twitter",
                "_type": "tweet",
                "_id": "1",
                "_score": null,
                "_source": {"user": "olivere"},
                "highlight": {"message": ["<em>Welcome</em> to Golang"]},
                "sort": [1407237600000u64],
                "inner_hits": {"comments": {"hits": {"total": 2, "hits": []}}}
            }]
        }))
        .unwrap();
        let hit = &hits.hits[0];
        assert_eq!(hits.max_score, None);
        assert_eq!(hit.doc_type, "tweet");
        assert_eq!(hit.score, None);
        assert_eq!(hit.highlight.as_ref().unwrap()["message"].len(), 1);
        assert_eq!(hit.sort, vec![json!(1407237600000u64)]);
        assert_eq!(hit.inner_hits.as_ref().unwrap()["comments"].hits.total, 2);
    }
}
