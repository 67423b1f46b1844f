//! # Campus Lost & Found Matcher (`lostfound-matcher`)
//!
//! ## Purpose
//!
//! `lostfound-matcher` is the matching core of a campus lost & found service.
//! Given one newly reported item, it scores the report against every pending
//! item of the opposite kind, decides which pairs are probable matches, and
//! drives the one-shot side effects for each qualifying pair: persisting a
//! match record and notifying the lost-item owner.
//!
//! HTTP wiring, persistence schema, authentication, and concrete email/SMS
//! transports stay outside this crate. The engine talks to them through the
//! traits in [`store`], injected at construction, so deployments plug in
//! their backends and tests plug in fakes.
//!
//! ## Core Types
//!
//! - [`LostItem`] / [`FoundItem`]: the two report kinds, wrapped in
//!   [`ReportedItem`] when handed to the engine.
//! - [`MatchConfig`]: scoring weights and the acceptance threshold. Defaults
//!   are the contract constants (0.35 title, 0.25 description, 0.20 location,
//!   0.20 characteristics, threshold 0.6).
//! - [`ItemMatch`]: the record created for each qualifying pair, with an
//!   identity derived deterministically from the (lost, found) ids.
//! - [`MatchSweep`]: one sweep's outcome, created matches plus per-pair
//!   persist failures.
//! - [`MatchEngine`]: ties store, sink, and [`Notifier`] together and exposes
//!   [`MatchEngine::find_potential_matches`].
//!
//! Scoring is a two-stage pipeline: a pure score stage (category gate, then
//! bigram-Dice similarity per field combined into one weighted confidence)
//! and a side-effecting commit stage (persist, then notify). A pair whose
//! categories differ is never scored; a pair below the threshold triggers no
//! side effects at all.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use lostfound_matcher::{
//!     EmailChannel, FoundItem, ItemMatch, ItemStore, LostItem, MatchConfig, MatchEngine,
//!     MatchSink, NotificationPreferences, Notifier, PreferencesLookup, ReportedItem,
//!     SmsChannel, StoreError, StoredMatch, TransportError,
//! };
//!
//! struct Database;
//!
//! #[async_trait]
//! impl ItemStore for Database {
//!     async fn pending_lost_items(&self) -> Result<Vec<LostItem>, StoreError> {
//!         Ok(Vec::new())
//!     }
//!     async fn pending_found_items(&self) -> Result<Vec<FoundItem>, StoreError> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! #[async_trait]
//! impl MatchSink for Database {
//!     async fn create_match(&self, record: ItemMatch) -> Result<StoredMatch, StoreError> {
//!         Ok(StoredMatch { record, newly_created: true })
//!     }
//! }
//!
//! #[async_trait]
//! impl PreferencesLookup for Database {
//!     async fn user_preferences(
//!         &self,
//!         _user_id: &str,
//!     ) -> Result<Option<NotificationPreferences>, StoreError> {
//!         Ok(None)
//!     }
//! }
//!
//! struct Mailer;
//!
//! #[async_trait]
//! impl EmailChannel for Mailer {
//!     async fn send_email(&self, _to: &str, _subject: &str, _html: &str) -> Result<(), TransportError> {
//!         Ok(())
//!     }
//! }
//!
//! struct SmsGateway;
//!
//! #[async_trait]
//! impl SmsChannel for SmsGateway {
//!     async fn send_sms(&self, _to: &str, _message: &str) -> Result<(), TransportError> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn run(new_report: LostItem) -> Result<(), lostfound_matcher::MatchError> {
//! let db = Arc::new(Database);
//! let notifier = Notifier::new(db.clone(), Arc::new(Mailer), Arc::new(SmsGateway));
//! let engine = MatchEngine::new(db.clone(), db, notifier, MatchConfig::default())?;
//!
//! let sweep = engine
//!     .find_potential_matches(ReportedItem::Lost(&new_report))
//!     .await?;
//! println!("{} potential matches", sweep.matches.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Observability
//!
//! The engine logs through `tracing`: sweep summaries at `info`, per-pair
//! scores at `debug`, transport and persist failures at `warn`. Install a
//! [`SweepMetrics`] implementation via [`set_sweep_metrics`] to additionally
//! record per-sweep latency, candidate counts, and match counts; this is
//! typically done once during service startup.

pub mod config;
pub mod engine;
pub mod metrics;
pub mod notify;
pub mod scoring;
pub mod similarity;
pub mod store;
pub mod types;

pub use crate::config::MatchConfig;
pub use crate::engine::MatchEngine;
pub use crate::metrics::{set_sweep_metrics, SweepMetrics};
pub use crate::notify::{
    match_email_html, match_sms_text, ChannelStatus, NotificationOutcome, Notifier,
    MATCH_EMAIL_SUBJECT,
};
pub use crate::scoring::{characteristics_similarity, match_confidence};
pub use crate::similarity::similarity;
pub use crate::store::{
    EmailChannel, ItemStore, MatchSink, PreferencesLookup, SmsChannel, StoredMatch,
};
pub use crate::types::{
    FoundItem, FoundItemStatus, ItemCategory, ItemCharacteristics, ItemMatch, LostItem,
    LostItemStatus, MatchError, MatchStatus, MatchSweep, NotificationPreferences, PairFailure,
    ReportKind, ReportedItem, StoreError, TransportError,
};
