//! Fire-and-forget notification dispatcher.
//!
//! The engine calls `notify()` after each relevant state transition. Delivery
//! is best-effort: failures are logged and never propagated, so a lost message
//! can never undo a committed registration transition.

use sea_orm::ActiveEnum;
use serde_json::json;

/// Kind of message being dispatched for a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Confirmation,
    Cancellation,
    WaitlistPromotion,
    ReminderWeek,
    ReminderDay,
    ReminderDayOf,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmation => "confirmation",
            Self::Cancellation => "cancellation",
            Self::WaitlistPromotion => "waitlist_promotion",
            Self::ReminderWeek => "reminder_week",
            Self::ReminderDay => "reminder_day",
            Self::ReminderDayOf => "reminder_day_of",
        }
    }
}

/// Dispatches registration notifications to a configured webhook endpoint.
///
/// When no endpoint is configured the dispatcher runs in log-only mode and
/// reports messages as delivered, so write-once sent flags still flip exactly
/// once.
#[derive(Clone)]
pub struct NotificationService {
    http_client: reqwest::Client,
    webhook_url: Option<String>,
}

impl NotificationService {
    pub fn new(http_client: reqwest::Client, webhook_url: Option<String>) -> Self {
        Self {
            http_client,
            webhook_url,
        }
    }

    /// Creates a log-only dispatcher. Used by tests and by deployments that
    /// have not configured a webhook endpoint.
    pub fn disabled() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            webhook_url: None,
        }
    }

    /// Sends one notification. Best-effort.
    ///
    /// # Returns
    /// - `true` - The message was delivered (or logged in log-only mode)
    /// - `false` - Delivery failed; the failure has been logged
    pub async fn notify(
        &self,
        kind: NotificationKind,
        registration: &entity::registration::Model,
        event: &entity::event::Model,
    ) -> bool {
        let Some(ref url) = self.webhook_url else {
            tracing::info!(
                kind = kind.as_str(),
                registration_number = %registration.registration_number,
                event_id = event.id,
                "No notification endpoint configured, logging only"
            );
            return true;
        };

        let payload = json!({
            "kind": kind.as_str(),
            "registration_id": registration.id,
            "registration_number": registration.registration_number,
            "status": registration.status.to_value(),
            "first_name": registration.first_name,
            "last_name": registration.last_name,
            "email": registration.email,
            "event_id": event.id,
            "event_title": event.title,
            "event_start_time": event.start_time.to_rfc3339(),
        });

        match self.http_client.post(url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(
                    kind = kind.as_str(),
                    registration_id = registration.id,
                    "Notification dispatched"
                );
                true
            }
            Ok(response) => {
                tracing::warn!(
                    kind = kind.as_str(),
                    registration_id = registration.id,
                    status = %response.status(),
                    "Notification endpoint rejected the message"
                );
                false
            }
            Err(e) => {
                tracing::warn!(
                    kind = kind.as_str(),
                    registration_id = registration.id,
                    error = %e,
                    "Failed to dispatch notification"
                );
                false
            }
        }
    }
}
