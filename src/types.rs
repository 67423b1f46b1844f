use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of reporting categories.
///
/// Category acts as a hard gate in the match engine: pairs whose categories
/// differ are skipped before any similarity scoring happens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Electronics,
    Books,
    Clothing,
    Accessories,
    Documents,
    Others,
}

/// Optional structured attributes supplementing the free-text description.
///
/// `color`, `brand`, and `size` participate in confidence scoring; `markings`
/// and `additional_details` are carried for display only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemCharacteristics {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub markings: Option<String>,
    #[serde(default)]
    pub additional_details: Option<String>,
}

/// Lifecycle of a lost-item report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LostItemStatus {
    Pending,
    Found,
    Closed,
}

/// Lifecycle of a found-item report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FoundItemStatus {
    Pending,
    Claimed,
    Closed,
}

/// An item a user reported as lost.
///
/// `category`, `title`, `description`, and `last_seen_location` are validated
/// non-empty upstream before the item enters matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LostItem {
    pub id: String,
    pub user_id: String,
    pub category: ItemCategory,
    pub title: String,
    pub description: String,
    pub last_seen_location: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub characteristics: ItemCharacteristics,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub reward: Option<f64>,
    pub status: LostItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An item a user reported as found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoundItem {
    pub id: String,
    pub user_id: String,
    pub category: ItemCategory,
    pub title: String,
    pub description: String,
    pub found_location: String,
    /// Where the finder left the item (front desk, security office, ...).
    #[serde(default)]
    pub where_stored: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub characteristics: ItemCharacteristics,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: FoundItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The newly reported item handed to the engine.
///
/// Both sides go through the same entry point; the engine picks the opposite
/// pending set as candidates.
#[derive(Debug, Clone, Copy)]
pub enum ReportedItem<'a> {
    Lost(&'a LostItem),
    Found(&'a FoundItem),
}

impl ReportedItem<'_> {
    /// Which side of the pairing this report is on. Used for logging and metrics.
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportedItem::Lost(_) => ReportKind::Lost,
            ReportedItem::Found(_) => ReportKind::Found,
        }
    }
}

/// Side of a report, for observability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Lost,
    Found,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Lost => "lost",
            ReportKind::Found => "found",
        }
    }
}

/// Lifecycle of a match record. The engine only creates `Pending` matches;
/// confirmation and rejection happen downstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Confirmed,
    Rejected,
}

/// A scored link between one lost item and one found item.
///
/// Identity is derived from the pair, so re-discovering the same pair can
/// never mint a second match record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemMatch {
    pub id: String,
    pub lost_item_id: String,
    pub found_item_id: String,
    /// Weighted confidence in [0, 1], rounded to two decimal places.
    pub confidence: f64,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Full item payloads, denormalized onto the record for the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_item: Option<LostItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_item: Option<FoundItem>,
}

impl ItemMatch {
    /// Deterministic identity for a (lost, found) pair.
    pub fn pair_id(lost_item_id: &str, found_item_id: &str) -> String {
        format!("{lost_item_id}-{found_item_id}")
    }

    /// Build a fresh pending match for a qualifying pair.
    pub fn pending(lost: &LostItem, found: &FoundItem, confidence: f64) -> Self {
        let now = Utc::now();
        ItemMatch {
            id: Self::pair_id(&lost.id, &found.id),
            lost_item_id: lost.id.clone(),
            found_item_id: found.id.clone(),
            confidence,
            status: MatchStatus::Pending,
            created_at: now,
            updated_at: now,
            lost_item: Some(lost.clone()),
            found_item: Some(found.clone()),
        }
    }

    /// Confidence as a whole percentage for user-facing messages.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Per-user notification settings, resolved by the account subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationPreferences {
    pub user_id: String,
    pub email: bool,
    pub sms: bool,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Errors from the pending-item store and match sink.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Candidate query failed.
    #[error("store query failed: {0}")]
    Query(String),
    /// Match write failed.
    #[error("store write failed: {0}")]
    Write(String),
}

/// Errors from the email/SMS delivery channels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("email dispatch failed: {0}")]
    Email(String),
    #[error("sms dispatch failed: {0}")]
    Sms(String),
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid scoring configuration (weights or threshold).
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Reading the pending candidate set failed; the sweep cannot start.
    #[error("failed to load pending candidates: {0}")]
    Store(#[from] StoreError),
}

/// A qualifying pair whose persist call failed during the commit stage.
///
/// Failures are isolated per pair: later candidates are still processed and
/// the sweep reports these alongside the matches it did create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairFailure {
    pub match_id: String,
    pub lost_item_id: String,
    pub found_item_id: String,
    pub error: StoreError,
}

/// Outcome of one matching sweep.
#[derive(Debug, Clone, Default)]
pub struct MatchSweep {
    /// Matches created (or re-found, on replays), in candidate evaluation order.
    pub matches: Vec<ItemMatch>,
    /// Pairs that qualified but could not be persisted.
    pub failures: Vec<PairFailure>,
    /// How many pending candidates were examined, including gated-out ones.
    pub candidates_evaluated: usize,
}

impl MatchSweep {
    /// Discard the failure detail and keep the ordered match list.
    pub fn into_matches(self) -> Vec<ItemMatch> {
        self.matches
    }
}
