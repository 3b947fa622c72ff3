use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub search: Search,
	pub catalog: Catalog,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	/// Deadline for each backing-store lookup. A source that misses it
	/// contributes nothing to that request; it never fails the request.
	pub adapter_timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
	/// Optional JSON fixture file seeding the in-memory catalog. Absent means
	/// an empty catalog; production deployments wire real stores instead.
	pub fixtures: Option<PathBuf>,
}
