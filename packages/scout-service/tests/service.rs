use std::{sync::Arc, time::Duration};

use scout_catalog::{
	AgentSearchAdapter, ArtifactSearchAdapter, LogSearchAdapter, MemoryCatalog, RunSearchAdapter,
};
use scout_config::{Catalog, Config, Search, Service};
use scout_domain::{Principal, ResourceKind, SearchRequest, SearchResponse};
use scout_service::{AdapterSet, SearchService};
use scout_testkit::{SlowRunRegistry, UnavailableStore, agent, fixture_catalog, owner, run};

fn test_config(adapter_timeout_ms: u64) -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		search: Search { adapter_timeout_ms },
		catalog: Catalog { fixtures: None },
	}
}

fn federated(catalog: MemoryCatalog) -> SearchService {
	let catalog = Arc::new(catalog);
	let adapters = AdapterSet::new()
		.register(Arc::new(AgentSearchAdapter::new(catalog.clone())))
		.register(Arc::new(RunSearchAdapter::new(catalog.clone())))
		.register(Arc::new(ArtifactSearchAdapter::new(catalog.clone())))
		.register(Arc::new(LogSearchAdapter::new(catalog)));

	SearchService::new(&test_config(200), adapters)
}

fn triage_catalog() -> MemoryCatalog {
	MemoryCatalog {
		agents: vec![agent("agent-triage", "PR Triage Agent", owner())],
		runs: vec![run("run-triage", "PR Triage", "succeeded")],
		artifacts: Vec::new(),
		logs: Vec::new(),
	}
}

fn triage_request() -> SearchRequest {
	let mut req = SearchRequest::new("triage");

	req.types = Some(vec!["agent".to_string(), "run".to_string()]);
	req.limit = Some(10);
	req.facets = Some(true);

	req
}

fn facet(response: &SearchResponse, kind: ResourceKind) -> u64 {
	response
		.facets
		.as_ref()
		.expect("Facets must be present.")
		.iter()
		.find(|facet| facet.kind == kind)
		.map(|facet| facet.count)
		.expect("Requested kind must have a facet entry.")
}

#[tokio::test]
async fn empty_query_short_circuits_with_zero_facets() {
	let service = federated(fixture_catalog());
	let principal = Principal::new(owner());
	let response = service.search(Some(&principal), SearchRequest::new("   ")).await.unwrap();

	assert!(response.results.is_empty());
	assert_eq!(response.total, 0);

	let facets = response.facets.expect("Facets default to requested.");

	assert_eq!(facets.len(), ResourceKind::ALL.len());
	assert!(facets.iter().all(|facet| facet.count == 0));
}

#[tokio::test]
async fn facets_are_omitted_when_not_requested() {
	let service = federated(fixture_catalog());

	let mut req = SearchRequest::new("triage");

	req.facets = Some(false);

	let response = service.search(None, req).await.unwrap();

	assert!(response.facets.is_none());
}

#[tokio::test]
async fn triage_scenario_returns_owned_agent_and_run() {
	let service = federated(triage_catalog());
	let principal = Principal::new(owner());
	let response = service.search(Some(&principal), triage_request()).await.unwrap();

	assert_eq!(response.total, 2);
	assert_eq!(facet(&response, ResourceKind::Agent), 1);
	assert_eq!(facet(&response, ResourceKind::Run), 1);

	let ids: Vec<&str> = response.results.iter().map(|result| result.id.as_str()).collect();

	// Equal scores: the agent kind sorts before run.
	assert_eq!(ids, vec!["agent-triage", "run-triage"]);
}

#[tokio::test]
async fn anonymous_caller_loses_exactly_the_owner_scoped_matches() {
	let service = federated(triage_catalog());
	let response = service.search(None, triage_request()).await.unwrap();

	assert_eq!(response.total, 1);
	assert_eq!(facet(&response, ResourceKind::Agent), 0);
	assert_eq!(facet(&response, ResourceKind::Run), 1);
	assert_eq!(response.results.len(), 1);
	assert_eq!(response.results[0].id, "run-triage");
}

#[tokio::test]
async fn failing_run_source_degrades_without_failing_the_request() {
	let catalog = Arc::new(fixture_catalog());
	let adapters = AdapterSet::new()
		.register(Arc::new(AgentSearchAdapter::new(catalog.clone())))
		.register(Arc::new(RunSearchAdapter::new(Arc::new(UnavailableStore))))
		.register(Arc::new(ArtifactSearchAdapter::new(catalog.clone())))
		.register(Arc::new(LogSearchAdapter::new(catalog)));
	let service = SearchService::new(&test_config(200), adapters);

	let principal = Principal::new(owner());
	let response =
		service.search(Some(&principal), SearchRequest::new("triage")).await.unwrap();

	assert_eq!(facet(&response, ResourceKind::Run), 0);
	assert_eq!(facet(&response, ResourceKind::Agent), 1);
	assert_eq!(facet(&response, ResourceKind::Artifact), 1);
	assert_eq!(facet(&response, ResourceKind::Log), 2);
	assert_eq!(response.total, 4);
}

#[tokio::test]
async fn slow_run_source_is_timed_out_and_absorbed() {
	let catalog = Arc::new(fixture_catalog());
	let slow = SlowRunRegistry {
		delay: Duration::from_millis(300),
		runs: vec![run("run-slow", "triage backlog", "running")],
	};
	let adapters = AdapterSet::new()
		.register(Arc::new(AgentSearchAdapter::new(catalog.clone())))
		.register(Arc::new(RunSearchAdapter::new(Arc::new(slow))))
		.register(Arc::new(ArtifactSearchAdapter::new(catalog.clone())))
		.register(Arc::new(LogSearchAdapter::new(catalog)));
	let service = SearchService::new(&test_config(25), adapters);

	let response = service.search(None, SearchRequest::new("triage")).await.unwrap();

	assert_eq!(facet(&response, ResourceKind::Run), 0);
	assert_eq!(facet(&response, ResourceKind::Artifact), 1);
	assert_eq!(facet(&response, ResourceKind::Log), 2);
}

#[tokio::test]
async fn merged_order_is_deterministic_and_total() {
	let service = federated(fixture_catalog());
	let principal = Principal::new(owner());

	let mut req = SearchRequest::new("triage");

	req.limit = Some(100);

	let first = service.search(Some(&principal), req.clone()).await.unwrap();
	let second = service.search(Some(&principal), req).await.unwrap();

	assert_eq!(first, second);

	let ids: Vec<&str> = first.results.iter().map(|result| result.id.as_str()).collect();

	// Score desc, then kind (agent < artifact < log < run), then id.
	assert_eq!(ids, vec!["artifact-1", "log-1", "log-2", "agent-triage", "run-1", "run-2"]);
}

#[tokio::test]
async fn facet_counts_are_independent_of_pagination() {
	let service = federated(fixture_catalog());
	let principal = Principal::new(owner());

	let mut req = SearchRequest::new("triage");

	req.limit = Some(2);

	let response = service.search(Some(&principal), req).await.unwrap();
	let facet_sum: u64 =
		response.facets.as_ref().unwrap().iter().map(|facet| facet.count).sum();

	assert_eq!(response.total, 6);
	assert_eq!(facet_sum, response.total);
	assert_eq!(response.results.len(), 2);
}

#[tokio::test]
async fn page_length_matches_the_contract() {
	let service = federated(fixture_catalog());
	let principal = Principal::new(owner());

	for (limit, offset) in [(2_i64, 0_i64), (2, 5), (2, 10), (100, 0)] {
		let mut req = SearchRequest::new("triage");

		req.limit = Some(limit);
		req.offset = Some(offset);

		let response = service.search(Some(&principal), req).await.unwrap();
		let expected =
			(limit as u64).min(response.total.saturating_sub(offset as u64)) as usize;

		assert_eq!(response.results.len(), expected);
	}
}

#[tokio::test]
async fn successive_pages_reconstruct_the_full_order() {
	let service = federated(fixture_catalog());
	let principal = Principal::new(owner());

	let mut full = SearchRequest::new("triage");

	full.limit = Some(100);

	let full = service.search(Some(&principal), full).await.unwrap();

	let mut paged: Vec<String> = Vec::new();
	let mut offset = 0_i64;

	while (paged.len() as u64) < full.total {
		let mut req = SearchRequest::new("triage");

		req.limit = Some(2);
		req.offset = Some(offset);

		let page = service.search(Some(&principal), req).await.unwrap();

		paged.extend(page.results.into_iter().map(|result| result.id));

		offset += 2;
	}

	let expected: Vec<String> =
		full.results.into_iter().map(|result| result.id).collect();

	assert_eq!(paged, expected);
}

#[tokio::test]
async fn unknown_requested_type_is_dropped_silently() {
	let service = federated(fixture_catalog());

	let mut req = SearchRequest::new("triage");

	req.types = Some(vec!["widget".to_string(), "run".to_string()]);

	let response = service.search(None, req).await.unwrap();
	let facets = response.facets.expect("Facets default to requested.");

	assert_eq!(facets.len(), 1);
	assert_eq!(facets[0].kind, ResourceKind::Run);
	assert!(response.results.iter().all(|result| result.kind == ResourceKind::Run));
}

#[tokio::test]
async fn empty_type_intersection_searches_nothing() {
	let service = federated(fixture_catalog());

	let mut req = SearchRequest::new("triage");

	req.types = Some(vec!["widget".to_string()]);

	let response = service.search(None, req).await.unwrap();

	assert!(response.results.is_empty());
	assert_eq!(response.total, 0);
	// Computed-but-empty, distinct from the omitted field.
	assert_eq!(response.facets, Some(Vec::new()));
}
