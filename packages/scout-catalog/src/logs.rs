use std::sync::Arc;

use serde_json::Map;

use scout_domain::{
	AdapterPage, AdapterResult, BoxFuture, Candidate, Open, Principal, ResourceAdapter,
	ResourceKind, SearchResult, VisibilityPolicy, matching,
};

use crate::{LogIndex, models::LogRecord, rank_and_page};

pub struct LogSearchAdapter {
	index: Arc<dyn LogIndex>,
	policy: Arc<dyn VisibilityPolicy>,
}

impl LogSearchAdapter {
	pub fn new(index: Arc<dyn LogIndex>) -> Self {
		Self { index, policy: Arc::new(Open) }
	}

	pub fn with_policy(index: Arc<dyn LogIndex>, policy: Arc<dyn VisibilityPolicy>) -> Self {
		Self { index, policy }
	}
}

impl ResourceAdapter for LogSearchAdapter {
	fn kind(&self) -> ResourceKind {
		ResourceKind::Log
	}

	fn search<'a>(
		&'a self,
		principal: Option<&'a Principal>,
		query: &'a str,
		limit: usize,
	) -> BoxFuture<'a, AdapterResult<AdapterPage>> {
		Box::pin(async move {
			let records = self.index.entries().await?;
			let matches = records
				.into_iter()
				.filter_map(|record| {
					let score = matching::match_score(query, &record.message, None)?;

					Some(Candidate::open(project(record, score)))
				})
				.collect();

			Ok(rank_and_page(matches, self.policy.as_ref(), principal, limit))
		})
	}
}

fn project(record: LogRecord, score: f32) -> SearchResult {
	let mut metadata = Map::new();

	metadata.insert("run_id".to_string(), record.run_id.clone().into());
	metadata.insert("level".to_string(), record.level.into());

	SearchResult {
		href: format!("/runs/{}/logs/{}", record.run_id, record.id),
		id: record.id,
		kind: ResourceKind::Log,
		title: record.message,
		description: None,
		metadata: Some(metadata),
		score: Some(score),
	}
}
