//! Workspace umbrella crate for Recovr lost-and-found matching.
//!
//! Re-exports the item model and the matcher so callers can depend on a
//! single crate, and adds YAML configuration loading that assembles both.
//!
//! ```
//! use recovr::{build_matcher, Item, ItemId, ItemStatus, RecovrConfig};
//!
//! let config = RecovrConfig::from_yaml("version: \"1.0\"\nmatching:\n  match_threshold: 0.5\n")
//!     .expect("config");
//! let matcher = build_matcher(&config).expect("matcher");
//!
//! matcher
//!     .store()
//!     .upsert(Item::new(1, "Red scarf", ItemStatus::Lost))
//!     .expect("upsert");
//! assert!(matcher.find_matches_for_item(ItemId(1)).expect("query").is_empty());
//! ```

pub mod config;

use std::sync::Arc;

pub use config::{ConfigLoadError, RecovrConfig, StoreBackend, StoreYamlConfig};
pub use items::{
    InMemoryItemStore, Item, ItemCategory, ItemId, ItemStatus, ItemStore, NewItem, StoreConfig,
    StoreError, UserId,
};
pub use matcher::{
    set_match_metrics, Confidence, MatchConfig, MatchError, MatchMetrics, MatchOperation,
    MatchResult, MatchScorer, Matcher, ScoreBreakdown, SignalScores, SignalWeights,
};

#[cfg(feature = "server")]
pub use server;

/// Build the store described by `config` and a matcher over it.
pub fn build_matcher(config: &RecovrConfig) -> Result<Matcher, MatchError> {
    let store: Arc<dyn ItemStore> = Arc::from(config.store_config().build()?);
    let matcher = Matcher::new(store, config.match_config())?;
    tracing::debug!(
        name = config.name.as_deref().unwrap_or("unnamed"),
        threshold = matcher.config().match_threshold,
        "matcher assembled from config"
    );
    Ok(matcher)
}
