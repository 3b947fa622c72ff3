use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::kind::ResourceKind;

/// One entry in a federated result page: an ephemeral projection of the
/// underlying resource at query time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchResult {
	pub id: String,
	#[serde(rename = "type")]
	pub kind: ResourceKind,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub href: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub metadata: Option<Map<String, Value>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub score: Option<f32>,
}

/// Count of all permission-visible matches for one kind, independent of the
/// page actually returned.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FacetCount {
	#[serde(rename = "type")]
	pub kind: ResourceKind,
	pub count: u64,
}

/// The wire-level search payload. `facets` is omitted from the JSON object,
/// not serialized as an empty array, when the caller did not request facets.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub results: Vec<SearchResult>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub facets: Option<Vec<FacetCount>>,
	pub total: u64,
}

/// Descending score order with absent scores sorted last. NaN ranks below
/// every real score so the order stays total.
pub fn cmp_score_desc(a: Option<f32>, b: Option<f32>) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Greater,
		(Some(_), None) => Ordering::Less,
		(Some(a), Some(b)) => match (a.is_nan(), b.is_nan()) {
			(true, true) => Ordering::Equal,
			(true, false) => Ordering::Greater,
			(false, true) => Ordering::Less,
			(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
		},
	}
}

/// The single deterministic total order over merged results: score desc, then
/// kind, then id. Repeated identical queries against unchanged data reproduce
/// identical pages.
pub fn cmp_results(a: &SearchResult, b: &SearchResult) -> Ordering {
	cmp_score_desc(a.score, b.score)
		.then_with(|| a.kind.cmp(&b.kind))
		.then_with(|| a.id.cmp(&b.id))
}
