use uuid::Uuid;

/// The resolved identity of the caller. Anonymous callers are represented as
/// `Option::<Principal>::None` at every seam, never as a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Principal {
	pub user_id: Uuid,
}

impl Principal {
	pub fn new(user_id: Uuid) -> Self {
		Self { user_id }
	}
}
