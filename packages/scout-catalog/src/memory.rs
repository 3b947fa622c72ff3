//! In-memory catalog implementing every backing-store trait. Serves as the
//! fixture substrate for tests and as the dev deployment's data source;
//! production stores substitute behind the same traits without touching the
//! adapters.

use std::{fs, path::Path};

use uuid::Uuid;

use scout_domain::{AdapterResult, BoxFuture};

use crate::{
	AgentDirectory, ArtifactIndex, Error, LogIndex, Result, RunRegistry,
	models::{AgentRecord, ArtifactRecord, LogRecord, RunRecord},
};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MemoryCatalog {
	#[serde(default)]
	pub agents: Vec<AgentRecord>,
	#[serde(default)]
	pub runs: Vec<RunRecord>,
	#[serde(default)]
	pub artifacts: Vec<ArtifactRecord>,
	#[serde(default)]
	pub logs: Vec<LogRecord>,
}

impl MemoryCatalog {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadFixtures { path: path.to_path_buf(), source: err })?;
		let catalog = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseFixtures { path: path.to_path_buf(), source: err })?;

		Ok(catalog)
	}
}

impl AgentDirectory for MemoryCatalog {
	fn agents_owned_by<'a>(
		&'a self,
		owner_id: Uuid,
	) -> BoxFuture<'a, AdapterResult<Vec<AgentRecord>>> {
		Box::pin(async move {
			Ok(self.agents.iter().filter(|agent| agent.owner_id == owner_id).cloned().collect())
		})
	}
}

impl RunRegistry for MemoryCatalog {
	fn runs<'a>(&'a self) -> BoxFuture<'a, AdapterResult<Vec<RunRecord>>> {
		Box::pin(async move { Ok(self.runs.clone()) })
	}
}

impl ArtifactIndex for MemoryCatalog {
	fn artifacts<'a>(&'a self) -> BoxFuture<'a, AdapterResult<Vec<ArtifactRecord>>> {
		Box::pin(async move { Ok(self.artifacts.clone()) })
	}
}

impl LogIndex for MemoryCatalog {
	fn entries<'a>(&'a self) -> BoxFuture<'a, AdapterResult<Vec<LogRecord>>> {
		Box::pin(async move { Ok(self.logs.clone()) })
	}
}
