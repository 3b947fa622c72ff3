use std::sync::Arc;

use scout_catalog::{
	AgentSearchAdapter, ArtifactSearchAdapter, LogSearchAdapter, MemoryCatalog, RunSearchAdapter,
};
use scout_config::Config;
use scout_service::{AdapterSet, SearchService};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SearchService>,
}

impl AppState {
	pub fn new(config: Config) -> color_eyre::Result<Self> {
		let catalog = match config.catalog.fixtures.as_deref() {
			Some(path) => MemoryCatalog::load(path)?,
			None => MemoryCatalog::default(),
		};
		let catalog = Arc::new(catalog);
		let adapters = AdapterSet::new()
			.register(Arc::new(AgentSearchAdapter::new(catalog.clone())))
			.register(Arc::new(RunSearchAdapter::new(catalog.clone())))
			.register(Arc::new(ArtifactSearchAdapter::new(catalog.clone())))
			.register(Arc::new(LogSearchAdapter::new(catalog)));
		let service = SearchService::new(&config, adapters);

		Ok(Self { service: Arc::new(service) })
	}
}
