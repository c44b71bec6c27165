//! Prometheus wiring for the matcher's metrics hook.
//!
//! The exporter is installed at most once per process; every `ServerState`
//! built afterwards shares the same handle.

use std::sync::Arc;
use std::time::Duration;

use matcher::{set_match_metrics, MatchMetrics, MatchOperation};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::error::{ServerError, ServerResult};

/// Forwards matcher observations to the `metrics` facade.
pub struct PrometheusMatchMetrics;

impl MatchMetrics for PrometheusMatchMetrics {
    fn record_match(
        &self,
        operation: MatchOperation,
        latency: Duration,
        pairs_scored: usize,
        hit_count: usize,
    ) {
        let op = operation.as_str();
        metrics::counter!("recovr_match_queries_total", "operation" => op).increment(1);
        metrics::counter!("recovr_match_pairs_scored_total", "operation" => op)
            .increment(pairs_scored as u64);
        metrics::histogram!("recovr_match_latency_seconds", "operation" => op)
            .record(latency.as_secs_f64());
        metrics::histogram!("recovr_match_hits", "operation" => op).record(hit_count as f64);
    }
}

/// Install the Prometheus recorder and the matcher hook, or return the
/// handle installed earlier.
pub fn install_prometheus() -> ServerResult<PrometheusHandle> {
    static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

    HANDLE
        .get_or_try_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .map_err(|err| ServerError::Internal(format!("metrics recorder: {err}")))?;
            set_match_metrics(Some(Arc::new(PrometheusMatchMetrics)));
            tracing::info!("prometheus metrics recorder installed");
            Ok(handle)
        })
        .cloned()
}

/// Count a served request by method and status.
pub fn record_request(method: &str, status: u16) {
    metrics::counter!(
        "recovr_http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
