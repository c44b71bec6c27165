use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::telemetry::install_prometheus;
use items::{ItemStore, StoreConfig};
use matcher::Matcher;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Item store (shared with the matcher)
    pub store: Arc<dyn ItemStore>,

    /// Matcher instance (shared across requests)
    pub matcher: Arc<Matcher>,

    /// Prometheus handle when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state, seeding the store from `seed_path` when set.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store_config = match &config.seed_path {
            Some(path) => StoreConfig::seeded(path.clone()),
            None => StoreConfig::in_memory(),
        };
        let store: Arc<dyn ItemStore> = Arc::from(store_config.build()?);
        Self::with_store(config, store)
    }

    /// Create server state over an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn ItemStore>) -> ServerResult<Self> {
        let matcher = Arc::new(Matcher::new(store.clone(), config.matching.clone())?);
        let metrics = if config.metrics_enabled {
            Some(install_prometheus()?)
        } else {
            None
        };

        Ok(Self {
            config: Arc::new(config),
            store,
            matcher,
            metrics,
        })
    }
}
