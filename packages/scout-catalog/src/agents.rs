use std::sync::Arc;

use scout_domain::{
	AdapterPage, AdapterResult, BoxFuture, Candidate, OwnerOnly, Principal, ResourceAdapter,
	ResourceKind, SearchResult, VisibilityPolicy, matching,
};

use crate::{AgentDirectory, models::AgentRecord, rank_and_page};

/// Searches the caller's own agents. Owner-scoped: an absent principal yields
/// an empty contribution without touching the directory. That is policy, not
/// a fault.
pub struct AgentSearchAdapter {
	directory: Arc<dyn AgentDirectory>,
	policy: Arc<dyn VisibilityPolicy>,
}

impl AgentSearchAdapter {
	pub fn new(directory: Arc<dyn AgentDirectory>) -> Self {
		Self { directory, policy: Arc::new(OwnerOnly) }
	}

	pub fn with_policy(directory: Arc<dyn AgentDirectory>, policy: Arc<dyn VisibilityPolicy>) -> Self {
		Self { directory, policy }
	}
}

impl ResourceAdapter for AgentSearchAdapter {
	fn kind(&self) -> ResourceKind {
		ResourceKind::Agent
	}

	fn search<'a>(
		&'a self,
		principal: Option<&'a Principal>,
		query: &'a str,
		limit: usize,
	) -> BoxFuture<'a, AdapterResult<AdapterPage>> {
		Box::pin(async move {
			let Some(principal) = principal else {
				tracing::debug!("Skipping owner-scoped agent search for anonymous caller.");

				return Ok(AdapterPage::empty());
			};

			let records = self.directory.agents_owned_by(principal.user_id).await?;
			let matches = records
				.into_iter()
				.filter_map(|record| {
					let score =
						matching::match_score(query, &record.name, record.description.as_deref())?;
					let owner_id = record.owner_id;

					Some(Candidate::owned(project(record, score), owner_id))
				})
				.collect();

			Ok(rank_and_page(matches, self.policy.as_ref(), Some(principal), limit))
		})
	}
}

fn project(record: AgentRecord, score: f32) -> SearchResult {
	SearchResult {
		href: format!("/agents/{}", record.id),
		id: record.id,
		kind: ResourceKind::Agent,
		title: record.name,
		description: record.description,
		metadata: None,
		score: Some(score),
	}
}
