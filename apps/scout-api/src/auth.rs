use axum::http::HeaderMap;
use uuid::Uuid;

use scout_domain::Principal;

/// Carries the already-resolved caller identity. Exchanging a bearer
/// credential for this value is the auth gateway's job, not ours.
pub const PRINCIPAL_HEADER: &str = "x-user-id";

/// A missing or unparsable header is an anonymous caller, never an error;
/// owner-scoped kinds then simply contribute nothing.
pub fn resolve_principal(headers: &HeaderMap) -> Option<Principal> {
	let raw = headers.get(PRINCIPAL_HEADER)?.to_str().ok()?;

	match raw.trim().parse::<Uuid>() {
		Ok(user_id) => Some(Principal::new(user_id)),
		Err(err) => {
			tracing::debug!(error = %err, "Ignoring unparsable principal header.");

			None
		},
	}
}
