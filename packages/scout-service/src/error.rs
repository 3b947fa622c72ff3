pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The caller-visible failure surface. Degraded backing stores and
/// missing visibility never appear here; they are absorbed into reduced
/// result and facet counts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Internal error: {message}")]
	Internal { message: String },
}
