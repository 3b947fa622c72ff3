pub mod agents;
pub mod artifacts;
pub mod logs;
pub mod memory;
pub mod models;
pub mod runs;

mod error;

pub use agents::AgentSearchAdapter;
pub use artifacts::ArtifactSearchAdapter;
pub use error::{Error, Result};
pub use logs::LogSearchAdapter;
pub use memory::MemoryCatalog;
pub use runs::RunSearchAdapter;

use uuid::Uuid;

use scout_domain::{
	AdapterPage, AdapterResult, BoxFuture, Candidate, Principal, VisibilityPolicy, cmp_score_desc,
};

use crate::models::{AgentRecord, ArtifactRecord, LogRecord, RunRecord};

/// Backing store for the agent directory. Owner-scoped: callers fetch only
/// the agents a given principal owns, so the store itself never leaks across
/// tenants.
pub trait AgentDirectory
where
	Self: Send + Sync,
{
	fn agents_owned_by<'a>(
		&'a self,
		owner_id: Uuid,
	) -> BoxFuture<'a, AdapterResult<Vec<AgentRecord>>>;
}

pub trait RunRegistry
where
	Self: Send + Sync,
{
	fn runs<'a>(&'a self) -> BoxFuture<'a, AdapterResult<Vec<RunRecord>>>;
}

pub trait ArtifactIndex
where
	Self: Send + Sync,
{
	fn artifacts<'a>(&'a self) -> BoxFuture<'a, AdapterResult<Vec<ArtifactRecord>>>;
}

pub trait LogIndex
where
	Self: Send + Sync,
{
	fn entries<'a>(&'a self) -> BoxFuture<'a, AdapterResult<Vec<LogRecord>>>;
}

/// Shared tail of every adapter: apply the visibility policy to the raw
/// matches, count what survives, then order and truncate. Filtering runs
/// before counting so `raw_count` reflects post-filter state, and the
/// per-adapter order (score desc, id asc) matches the global merge order so
/// federated pages stay prefix-consistent.
pub(crate) fn rank_and_page(
	mut matches: Vec<Candidate>,
	policy: &dyn VisibilityPolicy,
	principal: Option<&Principal>,
	limit: usize,
) -> AdapterPage {
	matches.retain(|candidate| policy.visible(candidate, principal));

	let raw_count = matches.len() as u64;

	matches.sort_unstable_by(|a, b| {
		cmp_score_desc(a.result.score, b.result.score).then_with(|| a.result.id.cmp(&b.result.id))
	});
	matches.truncate(limit);

	AdapterPage { candidates: matches, raw_count }
}
