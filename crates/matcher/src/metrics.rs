// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then every `Matcher` reports per-query latency, candidate counts and hit
// counts. This keeps instrumentation decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Which matcher query produced an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOperation {
    /// Suggestions for every LOST item of a user.
    Suggestions,
    /// Matches for a single item.
    ItemMatches,
}

impl MatchOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchOperation::Suggestions => "suggestions",
            MatchOperation::ItemMatches => "item_matches",
        }
    }
}

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of a query.
    ///
    /// `pairs_scored` is the number of pairwise scores computed, `hit_count`
    /// the number of results returned after threshold filtering and truncation.
    fn record_match(
        &self,
        operation: MatchOperation,
        latency: Duration,
        pairs_scored: usize,
        hit_count: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// This is typically called once during service startup so all `Matcher`
/// instances share the same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
