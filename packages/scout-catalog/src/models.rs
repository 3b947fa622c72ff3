//! Catalog record shapes. Each backing store keeps its own schema; the
//! adapters project them into the uniform search-result shape at query time.

use uuid::Uuid;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AgentRecord {
	pub id: String,
	pub name: String,
	pub description: Option<String>,
	pub owner_id: Uuid,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RunRecord {
	pub id: String,
	pub title: String,
	pub status: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ArtifactRecord {
	pub id: String,
	pub name: String,
	pub description: Option<String>,
	pub content_type: String,
	pub size_bytes: u64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LogRecord {
	pub id: String,
	pub run_id: String,
	pub level: String,
	pub message: String,
}
