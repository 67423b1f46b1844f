//! Best-effort owner notification for a newly created match.
//!
//! Resolves the lost-item owner's preferences and dispatches a match summary
//! over every configured channel. Channels run concurrently and fail
//! independently; nothing in here aborts the enclosing sweep.

use std::sync::Arc;

use crate::store::{EmailChannel, PreferencesLookup, SmsChannel};
use crate::types::{FoundItem, ItemMatch, LostItem, NotificationPreferences};

pub const MATCH_EMAIL_SUBJECT: &str = "Potential Match Found - Campus Item Finder";

/// Per-channel delivery result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStatus {
    /// Dispatch handed to the transport successfully.
    Sent,
    /// Transport reported a failure; logged, not propagated.
    Failed,
    /// Channel disabled, address missing, or preferences unavailable.
    Skipped,
}

/// What happened on each channel for one match notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationOutcome {
    pub email: ChannelStatus,
    pub sms: ChannelStatus,
}

impl NotificationOutcome {
    fn skipped() -> Self {
        NotificationOutcome {
            email: ChannelStatus::Skipped,
            sms: ChannelStatus::Skipped,
        }
    }
}

/// Dispatches match summaries according to the owner's preferences.
pub struct Notifier {
    preferences: Arc<dyn PreferencesLookup>,
    email: Arc<dyn EmailChannel>,
    sms: Arc<dyn SmsChannel>,
}

impl Notifier {
    pub fn new(
        preferences: Arc<dyn PreferencesLookup>,
        email: Arc<dyn EmailChannel>,
        sms: Arc<dyn SmsChannel>,
    ) -> Self {
        Notifier {
            preferences,
            email,
            sms,
        }
    }

    /// Notify the lost-item owner about `record`.
    ///
    /// Unknown users and users with neither channel configured are a silent
    /// no-op. Email and SMS are attempted concurrently; one channel's failure
    /// never suppresses the other's attempt.
    pub async fn notify_match(
        &self,
        record: &ItemMatch,
        lost: &LostItem,
        found: &FoundItem,
    ) -> NotificationOutcome {
        let prefs = match self.preferences.user_preferences(&lost.user_id).await {
            Ok(Some(prefs)) => prefs,
            Ok(None) => {
                tracing::debug!(
                    user_id = %lost.user_id,
                    match_id = %record.id,
                    "no notification preferences for user, skipping"
                );
                return NotificationOutcome::skipped();
            }
            Err(err) => {
                tracing::warn!(
                    user_id = %lost.user_id,
                    match_id = %record.id,
                    error = %err,
                    "preferences lookup failed, skipping notification"
                );
                return NotificationOutcome::skipped();
            }
        };

        let email_to = email_target(&prefs);
        let sms_to = sms_target(&prefs);

        let email_task = async {
            let Some(to) = email_to else {
                return ChannelStatus::Skipped;
            };
            let html = match_email_html(record, lost, found);
            match self.email.send_email(to, MATCH_EMAIL_SUBJECT, &html).await {
                Ok(()) => {
                    tracing::info!(match_id = %record.id, to = %to, "match email sent");
                    ChannelStatus::Sent
                }
                Err(err) => {
                    tracing::warn!(match_id = %record.id, error = %err, "match email failed");
                    ChannelStatus::Failed
                }
            }
        };

        let sms_task = async {
            let Some(to) = sms_to else {
                return ChannelStatus::Skipped;
            };
            let message = match_sms_text(record, lost, found);
            match self.sms.send_sms(to, &message).await {
                Ok(()) => {
                    tracing::info!(match_id = %record.id, to = %to, "match sms sent");
                    ChannelStatus::Sent
                }
                Err(err) => {
                    tracing::warn!(match_id = %record.id, error = %err, "match sms failed");
                    ChannelStatus::Failed
                }
            }
        };

        let (email, sms) = tokio::join!(email_task, sms_task);
        NotificationOutcome { email, sms }
    }
}

fn email_target(prefs: &NotificationPreferences) -> Option<&str> {
    if !prefs.email {
        return None;
    }
    prefs.email_address.as_deref().filter(|a| !a.is_empty())
}

fn sms_target(prefs: &NotificationPreferences) -> Option<&str> {
    if !prefs.sms {
        return None;
    }
    prefs.phone_number.as_deref().filter(|n| !n.is_empty())
}

/// HTML body for the match-summary email.
pub fn match_email_html(record: &ItemMatch, lost: &LostItem, found: &FoundItem) -> String {
    let percent = record.confidence_percent();
    format!(
        "<h2>Potential Match Found!</h2>\n\
         <p>We've found a potential match for your lost item with {percent}% confidence.</p>\n\
         <h3>Your Lost Item</h3>\n\
         <ul>\n\
         <li><strong>Title:</strong> {lost_title}</li>\n\
         <li><strong>Category:</strong> {category}</li>\n\
         <li><strong>Description:</strong> {lost_description}</li>\n\
         <li><strong>Last Seen:</strong> {last_seen}</li>\n\
         <li><strong>Date Lost:</strong> {lost_date}</li>\n\
         </ul>\n\
         <h3>Found Item Details</h3>\n\
         <ul>\n\
         <li><strong>Title:</strong> {found_title}</li>\n\
         <li><strong>Location Found:</strong> {found_location}</li>\n\
         <li><strong>Date Found:</strong> {found_date}</li>\n\
         <li><strong>Description:</strong> {found_description}</li>\n\
         </ul>\n\
         <p>Please log in to your account to view more details and confirm if this is your item.</p>",
        lost_title = lost.title,
        category = category_label(lost),
        lost_description = lost.description,
        last_seen = lost.last_seen_location,
        lost_date = lost.date.format("%Y-%m-%d"),
        found_title = found.title,
        found_location = found.found_location,
        found_date = found.date.format("%Y-%m-%d"),
        found_description = found.description,
    )
}

/// Short-form SMS body for the match summary.
pub fn match_sms_text(record: &ItemMatch, lost: &LostItem, found: &FoundItem) -> String {
    format!(
        "Potential match found for your lost {title}! Confidence: {percent}%. Found at: {location}. Log in to view details.",
        title = lost.title,
        percent = record.confidence_percent(),
        location = found.found_location,
    )
}

fn category_label(lost: &LostItem) -> &'static str {
    use crate::types::ItemCategory::*;
    match lost.category {
        Electronics => "Electronics",
        Books => "Books",
        Clothing => "Clothing",
        Accessories => "Accessories",
        Documents => "Documents",
        Others => "Others",
    }
}
