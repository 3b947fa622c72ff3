pub mod search;

mod error;

pub use error::{Error, Result};

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use scout_config::Config;
use scout_domain::{ResourceAdapter, ResourceKind};

/// Registry of search adapters keyed by the resource kind they serve.
///
/// Adding a searchable kind means registering one more adapter; the
/// aggregator never branches on concrete resource types.
#[derive(Clone, Default)]
pub struct AdapterSet {
	adapters: BTreeMap<ResourceKind, Arc<dyn ResourceAdapter>>,
}

impl AdapterSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(mut self, adapter: Arc<dyn ResourceAdapter>) -> Self {
		self.adapters.insert(adapter.kind(), adapter);

		self
	}

	pub fn get(&self, kind: ResourceKind) -> Option<&Arc<dyn ResourceAdapter>> {
		self.adapters.get(&kind)
	}
}

pub struct SearchService {
	pub(crate) adapters: AdapterSet,
	pub(crate) adapter_timeout: Duration,
}

impl SearchService {
	pub fn new(cfg: &Config, adapters: AdapterSet) -> Self {
		Self { adapters, adapter_timeout: Duration::from_millis(cfg.search.adapter_timeout_ms) }
	}
}
