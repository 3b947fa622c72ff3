pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read fixture file at {path:?}.")]
	ReadFixtures { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse fixture file at {path:?}.")]
	ParseFixtures { path: std::path::PathBuf, source: serde_json::Error },
}
