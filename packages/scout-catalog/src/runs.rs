use std::sync::Arc;

use serde_json::Map;

use scout_domain::{
	AdapterPage, AdapterResult, BoxFuture, Candidate, Open, Principal, ResourceAdapter,
	ResourceKind, SearchResult, VisibilityPolicy, matching,
};

use crate::{RunRegistry, models::RunRecord, rank_and_page};

pub struct RunSearchAdapter {
	registry: Arc<dyn RunRegistry>,
	policy: Arc<dyn VisibilityPolicy>,
}

impl RunSearchAdapter {
	pub fn new(registry: Arc<dyn RunRegistry>) -> Self {
		Self { registry, policy: Arc::new(Open) }
	}

	pub fn with_policy(registry: Arc<dyn RunRegistry>, policy: Arc<dyn VisibilityPolicy>) -> Self {
		Self { registry, policy }
	}
}

impl ResourceAdapter for RunSearchAdapter {
	fn kind(&self) -> ResourceKind {
		ResourceKind::Run
	}

	fn search<'a>(
		&'a self,
		principal: Option<&'a Principal>,
		query: &'a str,
		limit: usize,
	) -> BoxFuture<'a, AdapterResult<AdapterPage>> {
		Box::pin(async move {
			let records = self.registry.runs().await?;
			let matches = records
				.into_iter()
				.filter_map(|record| {
					let score = matching::match_score(query, &record.title, None)?;

					Some(Candidate::open(project(record, score)))
				})
				.collect();

			Ok(rank_and_page(matches, self.policy.as_ref(), principal, limit))
		})
	}
}

fn project(record: RunRecord, score: f32) -> SearchResult {
	let mut metadata = Map::new();

	metadata.insert("status".to_string(), record.status.into());

	SearchResult {
		href: format!("/runs/{}", record.id),
		id: record.id,
		kind: ResourceKind::Run,
		title: record.title,
		description: None,
		metadata: Some(metadata),
		score: Some(score),
	}
}
