// Metrics hooks for the matching engine.
//
// Callers install a global `SweepMetrics` implementation via
// [`set_sweep_metrics`]; `MatchEngine` then reports per-sweep latency,
// candidate counts, and match counts. This keeps instrumentation decoupled
// from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::ReportKind;

/// Metrics observer for match sweeps.
pub trait SweepMetrics: Send + Sync {
    /// Record the outcome of one sweep.
    ///
    /// `kind` is the side of the triggering report, `latency` is the
    /// wall-clock duration of the whole sweep including side effects,
    /// `candidates` is the number of pending opposite-kind items examined,
    /// and `matches` is the number of match records returned to the caller.
    fn record_sweep(&self, kind: ReportKind, latency: Duration, candidates: usize, matches: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SweepMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn SweepMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn SweepMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global sweep metrics recorder.
///
/// Typically called once during service startup so every `MatchEngine`
/// shares the same metrics backend.
pub fn set_sweep_metrics(recorder: Option<Arc<dyn SweepMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("sweep metrics lock poisoned");
    *guard = recorder;
}
