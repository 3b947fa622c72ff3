use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use scout_api::{routes, state::AppState};
use scout_config::{Catalog, Config, Search, Service};
use scout_testkit::owner;

fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		search: Search { adapter_timeout_ms: 200 },
		catalog: Catalog { fixtures: None },
	}
}

fn test_router() -> Router {
	let fixtures_path = std::env::temp_dir()
		.join(format!("scout_api_fixtures_{}.json", uuid::Uuid::new_v4().simple()));
	let fixtures = serde_json::to_string(&scout_testkit::fixture_catalog())
		.expect("Fixture catalog must serialize.");

	std::fs::write(&fixtures_path, fixtures).expect("Failed to write fixture file.");

	let mut config = test_config();

	config.catalog.fixtures = Some(fixtures_path);

	let state = AppState::new(config).expect("App state must build.");

	routes::router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");

	serde_json::from_slice(&bytes).expect("Response body must be JSON.")
}

fn search_request(payload: &Value, principal: Option<String>) -> Request<Body> {
	let mut builder = Request::builder()
		.method("POST")
		.uri("/v1/search")
		.header("content-type", "application/json");

	if let Some(user_id) = principal {
		builder = builder.header("x-user-id", user_id);
	}

	builder.body(Body::from(payload.to_string())).expect("Failed to build request.")
}

#[tokio::test]
async fn health_returns_ok() {
	let router = test_router();
	let response = router
		.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_returns_federated_page_for_authenticated_caller() {
	let router = test_router();
	let payload = json!({
		"q": "triage",
		"types": ["agent", "run"],
		"limit": 10,
		"facets": true,
	});
	let response = router
		.oneshot(search_request(&payload, Some(owner().to_string())))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;

	assert_eq!(body["total"], 3);
	assert_eq!(body["facets"], json!([{"type": "agent", "count": 1}, {"type": "run", "count": 2}]));
	assert_eq!(body["results"][0]["type"], "agent");
	assert_eq!(body["results"][0]["href"], "/agents/agent-triage");
}

#[tokio::test]
async fn anonymous_search_omits_owner_scoped_matches() {
	let router = test_router();
	let payload = json!({"q": "triage", "types": ["agent", "run"]});
	let response = router.oneshot(search_request(&payload, None)).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;

	assert_eq!(body["total"], 2);
	assert_eq!(body["facets"][0], json!({"type": "agent", "count": 0}));
}

#[tokio::test]
async fn facets_key_is_absent_when_not_requested() {
	let router = test_router();
	let payload = json!({"q": "triage", "facets": false});
	let response = router.oneshot(search_request(&payload, None)).await.unwrap();
	let body = body_json(response).await;

	assert!(body.as_object().unwrap().get("facets").is_none());
}

#[tokio::test]
async fn malformed_body_is_rejected_before_the_core_runs() {
	let router = test_router();
	let request = Request::builder()
		.method("POST")
		.uri("/v1/search")
		.header("content-type", "application/json")
		.body(Body::from("{not json"))
		.unwrap();
	let response = router.oneshot(request).await.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
	let router = test_router();
	let response = router
		.oneshot(Request::builder().uri("/v1/search").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
