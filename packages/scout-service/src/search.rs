use std::collections::BTreeMap;

use tokio::{task::JoinSet, time::timeout};
use tracing::warn;

use scout_domain::{
	AdapterPage, FacetCount, NormalizedQuery, Principal, ResourceKind, SearchRequest,
	SearchResponse, SearchResult, cmp_results, normalize,
};

use crate::{Result, SearchService};

impl SearchService {
	/// Runs one federated query: fan out to the adapters for the requested
	/// kinds in parallel, absorb per-source failures, then merge, page, and
	/// facet. Idempotent for a fixed backing snapshot.
	pub async fn search(
		&self,
		principal: Option<&Principal>,
		req: SearchRequest,
	) -> Result<SearchResponse> {
		let query = normalize(req);

		// An empty query never means "match everything".
		if query.q.is_empty() {
			return Ok(SearchResponse {
				results: Vec::new(),
				facets: zero_facets(&query),
				total: 0,
			});
		}

		let pages = self.fan_out(principal, &query).await;

		Ok(assemble(&query, pages))
	}

	async fn fan_out(
		&self,
		principal: Option<&Principal>,
		query: &NormalizedQuery,
	) -> BTreeMap<ResourceKind, AdapterPage> {
		// Every source is asked for enough candidates to cover the page end,
		// so the merged order can be sliced at [offset, offset + limit).
		let fetch_limit = query.offset + query.limit;
		let mut tasks = JoinSet::new();

		for kind in query.kinds.iter().copied() {
			let Some(adapter) = self.adapters.get(kind) else {
				warn!(kind = %kind, "No adapter registered for requested kind.");

				continue;
			};
			let adapter = adapter.clone();
			let principal = principal.cloned();
			let q = query.q.clone();
			let deadline = self.adapter_timeout;

			tasks.spawn(async move {
				let outcome =
					timeout(deadline, adapter.search(principal.as_ref(), &q, fetch_limit)).await;

				(kind, outcome)
			});
		}

		let mut pages = BTreeMap::new();

		while let Some(joined) = tasks.join_next().await {
			let (kind, outcome) = match joined {
				Ok(task_output) => task_output,
				Err(err) => {
					warn!(error = %err, "Adapter task failed; dropping its contribution.");

					continue;
				},
			};
			let page = match outcome {
				Ok(Ok(page)) => page,
				Ok(Err(err)) => {
					warn!(
						kind = %kind,
						error = %err,
						"Adapter degraded to an empty contribution."
					);

					AdapterPage::empty()
				},
				Err(_) => {
					warn!(kind = %kind, "Adapter timed out; degrading to an empty contribution.");

					AdapterPage::empty()
				},
			};

			pages.insert(kind, page);
		}

		pages
	}
}

fn assemble(
	query: &NormalizedQuery,
	mut pages: BTreeMap<ResourceKind, AdapterPage>,
) -> SearchResponse {
	// Counts come from the full post-filter match sets, never from the
	// truncated page, so they are fixed before merging consumes the pages.
	let counts: Vec<(ResourceKind, u64)> = query
		.kinds
		.iter()
		.map(|kind| (*kind, pages.get(kind).map(|page| page.raw_count).unwrap_or(0)))
		.collect();
	let total = counts.iter().map(|(_, count)| count).sum();

	let mut merged: Vec<SearchResult> = Vec::new();

	for kind in &query.kinds {
		let Some(page) = pages.remove(kind) else {
			continue;
		};

		merged.extend(page.candidates.into_iter().map(|candidate| candidate.result));
	}

	merged.sort_unstable_by(cmp_results);

	let results: Vec<SearchResult> =
		merged.into_iter().skip(query.offset).take(query.limit).collect();
	let facets = query
		.facets
		.then(|| counts.into_iter().map(|(kind, count)| FacetCount { kind, count }).collect());

	SearchResponse { results, facets, total }
}

fn zero_facets(query: &NormalizedQuery) -> Option<Vec<FacetCount>> {
	query
		.facets
		.then(|| query.kinds.iter().map(|kind| FacetCount { kind: *kind, count: 0 }).collect())
}
