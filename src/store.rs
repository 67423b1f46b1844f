//! Collaborator seams the engine calls through.
//!
//! The core never talks to a database or a delivery provider directly; it
//! receives these traits as injected dependencies so deployments wire in real
//! backends and tests wire in fakes.

use async_trait::async_trait;

use crate::types::{
    FoundItem, ItemMatch, LostItem, NotificationPreferences, StoreError, TransportError,
};

/// Read access to the pending candidate sets.
///
/// Both queries return only items in `Pending` status, with all matching
/// fields populated (the data-model invariant is enforced at write time).
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn pending_lost_items(&self) -> Result<Vec<LostItem>, StoreError>;
    async fn pending_found_items(&self) -> Result<Vec<FoundItem>, StoreError>;
}

/// Result of persisting a match.
#[derive(Debug, Clone)]
pub struct StoredMatch {
    /// The durable record, with lost/found payloads denormalized onto it.
    pub record: ItemMatch,
    /// False when a record with the same pair identity already existed.
    /// Replayed sweeps use this to skip re-notification.
    pub newly_created: bool,
}

/// Durable sink for match records.
#[async_trait]
pub trait MatchSink: Send + Sync {
    /// Persist a match. Must be idempotent by (lost_item_id, found_item_id):
    /// writing the same pair twice yields one stored record, and the second
    /// write reports `newly_created: false` instead of erroring.
    async fn create_match(&self, record: ItemMatch) -> Result<StoredMatch, StoreError>;
}

/// Notification settings lookup, owned by the account subsystem.
#[async_trait]
pub trait PreferencesLookup: Send + Sync {
    /// `None` for unknown users; the notifier treats that as "nothing
    /// configured", not an error.
    async fn user_preferences(
        &self,
        user_id: &str,
    ) -> Result<Option<NotificationPreferences>, StoreError>;
}

/// Email delivery channel.
#[async_trait]
pub trait EmailChannel: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<(), TransportError>;
}

/// SMS delivery channel.
#[async_trait]
pub trait SmsChannel: Send + Sync {
    async fn send_sms(&self, to: &str, message: &str) -> Result<(), TransportError>;
}
