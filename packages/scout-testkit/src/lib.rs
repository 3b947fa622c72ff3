//! Shared fixtures for federated-search tests: a deterministic seeded
//! catalog plus degraded backing stores (always failing, artificially slow).

use std::time::Duration;

use uuid::Uuid;

use scout_catalog::{
	AgentDirectory, ArtifactIndex, LogIndex, MemoryCatalog, RunRegistry,
	models::{AgentRecord, ArtifactRecord, LogRecord, RunRecord},
};
use scout_domain::{AdapterError, AdapterResult, BoxFuture};

/// The principal owning every fixture agent.
pub fn owner() -> Uuid {
	Uuid::from_u128(0x5c07_u128)
}

/// A principal owning nothing in the fixture catalog.
pub fn stranger() -> Uuid {
	Uuid::from_u128(0xdead_u128)
}

pub fn agent(id: &str, name: &str, owner_id: Uuid) -> AgentRecord {
	AgentRecord { id: id.to_string(), name: name.to_string(), description: None, owner_id }
}

pub fn run(id: &str, title: &str, status: &str) -> RunRecord {
	RunRecord { id: id.to_string(), title: title.to_string(), status: status.to_string() }
}

pub fn artifact(id: &str, name: &str, content_type: &str) -> ArtifactRecord {
	ArtifactRecord {
		id: id.to_string(),
		name: name.to_string(),
		description: None,
		content_type: content_type.to_string(),
		size_bytes: 1_024,
	}
}

pub fn log(id: &str, run_id: &str, message: &str) -> LogRecord {
	LogRecord {
		id: id.to_string(),
		run_id: run_id.to_string(),
		level: "info".to_string(),
		message: message.to_string(),
	}
}

/// A catalog seeded with the canonical "triage" scenario plus enough spread
/// across kinds to exercise pagination and tie-breaking.
pub fn fixture_catalog() -> MemoryCatalog {
	MemoryCatalog {
		agents: vec![
			agent("agent-triage", "PR Triage Agent", owner()),
			agent("agent-deploy", "Deploy Agent", owner()),
			agent("agent-foreign", "Foreign Triage Agent", stranger()),
		],
		runs: vec![
			run("run-1", "PR Triage", "succeeded"),
			run("run-2", "PR Triage nightly", "failed"),
			run("run-3", "Deploy to staging", "running"),
		],
		artifacts: vec![
			artifact("artifact-1", "triage-report.html", "text/html"),
			artifact("artifact-2", "deploy-manifest.json", "application/json"),
		],
		logs: vec![
			log("log-1", "run-1", "triage completed without findings"),
			log("log-2", "run-2", "triage aborted: upstream timeout"),
			log("log-3", "run-3", "deploy started"),
		],
	}
}

/// A backing store that always fails, for graceful-degradation tests.
pub struct UnavailableStore;

impl UnavailableStore {
	fn refuse<T>() -> BoxFuture<'static, AdapterResult<T>>
	where
		T: Send + 'static,
	{
		Box::pin(async {
			Err(AdapterError::Unavailable { message: "Fixture store is offline.".to_string() })
		})
	}
}

impl AgentDirectory for UnavailableStore {
	fn agents_owned_by<'a>(
		&'a self,
		_owner_id: Uuid,
	) -> BoxFuture<'a, AdapterResult<Vec<AgentRecord>>> {
		Self::refuse()
	}
}

impl RunRegistry for UnavailableStore {
	fn runs<'a>(&'a self) -> BoxFuture<'a, AdapterResult<Vec<RunRecord>>> {
		Self::refuse()
	}
}

impl ArtifactIndex for UnavailableStore {
	fn artifacts<'a>(&'a self) -> BoxFuture<'a, AdapterResult<Vec<ArtifactRecord>>> {
		Self::refuse()
	}
}

impl LogIndex for UnavailableStore {
	fn entries<'a>(&'a self) -> BoxFuture<'a, AdapterResult<Vec<LogRecord>>> {
		Self::refuse()
	}
}

/// A run registry that answers only after `delay`, for adapter-timeout tests.
pub struct SlowRunRegistry {
	pub delay: Duration,
	pub runs: Vec<RunRecord>,
}

impl RunRegistry for SlowRunRegistry {
	fn runs<'a>(&'a self) -> BoxFuture<'a, AdapterResult<Vec<RunRecord>>> {
		Box::pin(async move {
			tokio::time::sleep(self.delay).await;

			Ok(self.runs.clone())
		})
	}
}
