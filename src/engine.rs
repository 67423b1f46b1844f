use std::sync::Arc;
use std::time::Instant;

use crate::config::MatchConfig;
use crate::metrics::metrics_recorder;
use crate::notify::Notifier;
use crate::scoring::match_confidence;
use crate::store::{ItemStore, MatchSink};
use crate::types::{
    FoundItem, ItemMatch, LostItem, MatchError, MatchSweep, PairFailure, ReportedItem,
};


/// Matching engine: sweeps pending opposite-kind items for a new report,
/// persists qualifying pairs, and notifies the lost-item owners.
///
/// One engine instance is shared by the reporting endpoints; each call to
/// [`MatchEngine::find_potential_matches`] is one self-contained sweep.
pub struct MatchEngine {
    store: Arc<dyn ItemStore>,
    sink: Arc<dyn MatchSink>,
    notifier: Notifier,
    config: MatchConfig,
}

/// A candidate pair that cleared the category gate and the threshold,
/// produced by the pure score stage and consumed by the commit stage.
struct QualifyingPair {
    lost: LostItem,
    found: FoundItem,
    confidence: f64,
}

impl MatchEngine {
    /// Construct an engine with an explicit scoring configuration.
    pub fn new(
        store: Arc<dyn ItemStore>,
        sink: Arc<dyn MatchSink>,
        notifier: Notifier,
        config: MatchConfig,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(MatchEngine {
            store,
            sink,
            notifier,
            config,
        })
    }

    /// Construct an engine with the contract default weights and threshold.
    pub fn with_defaults(
        store: Arc<dyn ItemStore>,
        sink: Arc<dyn MatchSink>,
        notifier: Notifier,
    ) -> Self {
        MatchEngine {
            store,
            sink,
            notifier,
            config: MatchConfig::default(),
        }
    }

    /// Run one matching sweep for a newly reported item.
    ///
    /// Stage one scores every pending opposite-kind candidate (category gate
    /// first, so cross-category pairs are never scored). Stage two persists
    /// each qualifying pair and notifies the lost-item owner, in candidate
    /// order. A persist failure for one pair is recorded in the sweep and
    /// does not stop the remaining pairs; only a failure to read the
    /// candidate set aborts the sweep. Replayed sweeps lean on the sink's
    /// idempotence: an already-existing match is returned without a second
    /// notification.
    pub async fn find_potential_matches(
        &self,
        item: ReportedItem<'_>,
    ) -> Result<MatchSweep, MatchError> {
        let kind = item.kind();
        let start = Instant::now();

        let (pairs, evaluated) = match item {
            ReportedItem::Lost(lost) => {
                let candidates = self.store.pending_found_items().await?;
                let evaluated = candidates.len();
                (score_lost_report(lost, candidates, &self.config), evaluated)
            }
            ReportedItem::Found(found) => {
                let candidates = self.store.pending_lost_items().await?;
                let evaluated = candidates.len();
                (score_found_report(found, candidates, &self.config), evaluated)
            }
        };

        let mut sweep = MatchSweep {
            candidates_evaluated: evaluated,
            ..MatchSweep::default()
        };
        for pair in pairs {
            self.commit_pair(pair, &mut sweep).await;
        }

        let latency = start.elapsed();
        if let Some(recorder) = metrics_recorder() {
            recorder.record_sweep(kind, latency, evaluated, sweep.matches.len());
        }
        tracing::info!(
            kind = kind.as_str(),
            candidates = evaluated,
            matches = sweep.matches.len(),
            failures = sweep.failures.len(),
            "match sweep complete"
        );

        Ok(sweep)
    }

    async fn commit_pair(&self, pair: QualifyingPair, sweep: &mut MatchSweep) {
        let record = ItemMatch::pending(&pair.lost, &pair.found, pair.confidence);
        match self.sink.create_match(record).await {
            Ok(stored) => {
                if stored.newly_created {
                    let outcome = self
                        .notifier
                        .notify_match(&stored.record, &pair.lost, &pair.found)
                        .await;
                    tracing::debug!(
                        match_id = %stored.record.id,
                        email = ?outcome.email,
                        sms = ?outcome.sms,
                        "notification outcome"
                    );
                } else {
                    tracing::debug!(
                        match_id = %stored.record.id,
                        "match already recorded, skipping notification"
                    );
                }
                sweep.matches.push(stored.record);
            }
            Err(error) => {
                let match_id = ItemMatch::pair_id(&pair.lost.id, &pair.found.id);
                tracing::warn!(
                    match_id = %match_id,
                    error = %error,
                    "failed to persist match, continuing sweep"
                );
                sweep.failures.push(PairFailure {
                    match_id,
                    lost_item_id: pair.lost.id.clone(),
                    found_item_id: pair.found.id.clone(),
                    error,
                });
            }
        }
    }
}

fn score_lost_report(
    lost: &LostItem,
    candidates: Vec<FoundItem>,
    config: &MatchConfig,
) -> Vec<QualifyingPair> {
    candidates
        .into_iter()
        .filter(|found| found.category == lost.category)
        .filter_map(|found| {
            let confidence = match_confidence(lost, &found, config);
            tracing::debug!(
                lost_id = %lost.id,
                found_id = %found.id,
                confidence,
                "scored candidate pair"
            );
            (confidence >= config.confidence_threshold).then(|| QualifyingPair {
                lost: lost.clone(),
                found,
                confidence,
            })
        })
        .collect()
}

fn score_found_report(
    found: &FoundItem,
    candidates: Vec<LostItem>,
    config: &MatchConfig,
) -> Vec<QualifyingPair> {
    candidates
        .into_iter()
        .filter(|lost| lost.category == found.category)
        .filter_map(|lost| {
            let confidence = match_confidence(&lost, found, config);
            tracing::debug!(
                lost_id = %lost.id,
                found_id = %found.id,
                confidence,
                "scored candidate pair"
            );
            (confidence >= config.confidence_threshold).then(|| QualifyingPair {
                lost,
                found: found.clone(),
                confidence,
            })
        })
        .collect()
}
