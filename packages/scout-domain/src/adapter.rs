use std::{future::Future, pin::Pin};

use uuid::Uuid;

use crate::{kind::ResourceKind, principal::Principal, result::SearchResult};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub type AdapterResult<T> = Result<T, AdapterError>;

/// A scored match paired with the ownership metadata the visibility policy
/// needs. The owner never leaves the adapter pipeline; only the projected
/// [`SearchResult`] reaches the caller.
#[derive(Debug, Clone)]
pub struct Candidate {
	pub result: SearchResult,
	pub owner_id: Option<Uuid>,
}

impl Candidate {
	pub fn open(result: SearchResult) -> Self {
		Self { result, owner_id: None }
	}

	pub fn owned(result: SearchResult, owner_id: Uuid) -> Self {
		Self { result, owner_id: Some(owner_id) }
	}
}

/// One adapter's contribution to a federated query.
///
/// `raw_count` counts every permission-visible match before truncation, so
/// facet totals are never capped by page size.
#[derive(Debug, Clone, Default)]
pub struct AdapterPage {
	pub candidates: Vec<Candidate>,
	pub raw_count: u64,
}

impl AdapterPage {
	pub fn empty() -> Self {
		Self::default()
	}
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
	#[error("Backing store unavailable: {message}")]
	Unavailable { message: String },
}

/// The per-resource-kind search capability. Each implementation queries one
/// backing catalog and must:
///
/// - return at most `limit` candidates, deterministically ordered by score
///   descending then id, while reporting the full post-filter match count;
/// - fail independently: an error here degrades that kind only, never the
///   whole federated request.
pub trait ResourceAdapter
where
	Self: Send + Sync,
{
	fn kind(&self) -> ResourceKind;

	fn search<'a>(
		&'a self,
		principal: Option<&'a Principal>,
		query: &'a str,
		limit: usize,
	) -> BoxFuture<'a, AdapterResult<AdapterPage>>;
}
