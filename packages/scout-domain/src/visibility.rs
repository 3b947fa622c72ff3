//! Pluggable per-adapter permission policy. The reference policies are
//! binary (owner-only vs. open); richer role/action/resource rules slot in
//! behind the same trait without touching the aggregator.

use crate::{adapter::Candidate, principal::Principal};

pub trait VisibilityPolicy
where
	Self: Send + Sync,
{
	fn visible(&self, candidate: &Candidate, principal: Option<&Principal>) -> bool;
}

/// Owner-scoped resources are visible only to their owning principal.
/// Candidates without an owner are hidden outright rather than leaked.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerOnly;

impl VisibilityPolicy for OwnerOnly {
	fn visible(&self, candidate: &Candidate, principal: Option<&Principal>) -> bool {
		match (candidate.owner_id, principal) {
			(Some(owner), Some(principal)) => owner == principal.user_id,
			_ => false,
		}
	}
}

/// Catalog-style resources are visible whenever the adapter returned them;
/// their data access already encodes the appropriate scoping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Open;

impl VisibilityPolicy for Open {
	fn visible(&self, _candidate: &Candidate, _principal: Option<&Principal>) -> bool {
		true
	}
}
