use std::collections::BTreeSet;

use crate::kind::ResourceKind;

pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 100;
pub const DEFAULT_LIMIT: usize = 20;

/// The raw search payload as the caller sent it. Everything except `q` is
/// optional; normalization fills the gaps.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub q: String,
	pub types: Option<Vec<String>>,
	pub limit: Option<i64>,
	pub offset: Option<i64>,
	pub facets: Option<bool>,
}

/// A validated, canonical query. Constructing one never fails; out-of-range
/// inputs are clamped and unknown type tags are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
	pub q: String,
	pub kinds: Vec<ResourceKind>,
	pub limit: usize,
	pub offset: usize,
	pub facets: bool,
}

pub fn normalize(req: SearchRequest) -> NormalizedQuery {
	let q = req.q.trim().to_string();
	let kinds = match req.types {
		None => ResourceKind::ALL.to_vec(),
		Some(tags) => {
			// BTreeSet deduplicates and keeps the fixed kind order.
			let kinds: BTreeSet<ResourceKind> =
				tags.iter().filter_map(|tag| ResourceKind::from_tag(tag)).collect();

			kinds.into_iter().collect()
		},
	};
	let limit = match req.limit {
		None => DEFAULT_LIMIT,
		Some(limit) if limit < MIN_LIMIT as i64 => MIN_LIMIT,
		Some(limit) => (limit as usize).min(MAX_LIMIT),
	};
	let offset = match req.offset {
		None => 0,
		Some(offset) => offset.max(0) as usize,
	};
	let facets = req.facets.unwrap_or(true);

	NormalizedQuery { q, kinds, limit, offset, facets }
}

impl SearchRequest {
	pub fn new(q: impl Into<String>) -> Self {
		Self { q: q.into(), types: None, limit: None, offset: None, facets: None }
	}
}
