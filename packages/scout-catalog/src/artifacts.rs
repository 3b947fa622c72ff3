use std::sync::Arc;

use serde_json::Map;

use scout_domain::{
	AdapterPage, AdapterResult, BoxFuture, Candidate, Open, Principal, ResourceAdapter,
	ResourceKind, SearchResult, VisibilityPolicy, matching,
};

use crate::{ArtifactIndex, models::ArtifactRecord, rank_and_page};

pub struct ArtifactSearchAdapter {
	index: Arc<dyn ArtifactIndex>,
	policy: Arc<dyn VisibilityPolicy>,
}

impl ArtifactSearchAdapter {
	pub fn new(index: Arc<dyn ArtifactIndex>) -> Self {
		Self { index, policy: Arc::new(Open) }
	}

	pub fn with_policy(index: Arc<dyn ArtifactIndex>, policy: Arc<dyn VisibilityPolicy>) -> Self {
		Self { index, policy }
	}
}

impl ResourceAdapter for ArtifactSearchAdapter {
	fn kind(&self) -> ResourceKind {
		ResourceKind::Artifact
	}

	fn search<'a>(
		&'a self,
		principal: Option<&'a Principal>,
		query: &'a str,
		limit: usize,
	) -> BoxFuture<'a, AdapterResult<AdapterPage>> {
		Box::pin(async move {
			let records = self.index.artifacts().await?;
			let matches = records
				.into_iter()
				.filter_map(|record| {
					let score =
						matching::match_score(query, &record.name, record.description.as_deref())?;

					Some(Candidate::open(project(record, score)))
				})
				.collect();

			Ok(rank_and_page(matches, self.policy.as_ref(), principal, limit))
		})
	}
}

fn project(record: ArtifactRecord, score: f32) -> SearchResult {
	let mut metadata = Map::new();

	metadata.insert("content_type".to_string(), record.content_type.into());
	metadata.insert("size_bytes".to_string(), record.size_bytes.into());

	SearchResult {
		href: format!("/artifacts/{}", record.id),
		id: record.id,
		kind: ResourceKind::Artifact,
		title: record.name,
		description: record.description,
		metadata: Some(metadata),
		score: Some(score),
	}
}
