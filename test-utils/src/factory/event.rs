//! Event factory for creating test events.
//!
//! Defaults produce a published event a week out with unlimited capacity,
//! open registration, and cancellation allowed without a deadline.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::event::EventStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity::event::EventStatus;
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db)
///     .title("Integration Weekend")
///     .max_participants(Some(2))
///     .status(EventStatus::Published)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    status: EventStatus,
    requires_registration: bool,
    max_participants: Option<i32>,
    current_participants: i32,
    registration_opens_at: Option<DateTime<Utc>>,
    registration_closes_at: Option<DateTime<Utc>>,
    allow_cancellation: bool,
    cancellation_deadline_hours: Option<i32>,
    start_time: DateTime<Utc>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"` where id is auto-incremented
    /// - status: `Published`
    /// - requires_registration: `true`
    /// - max_participants: `None` (unlimited)
    /// - registration window: unbounded
    /// - allow_cancellation: `true`, no deadline
    /// - start_time: 7 days from now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Event {}", id),
            description: Some("Test event description".to_string()),
            status: EventStatus::Published,
            requires_registration: true,
            max_participants: None,
            current_participants: 0,
            registration_opens_at: None,
            registration_closes_at: None,
            allow_cancellation: true,
            cancellation_deadline_hours: None,
            start_time: Utc::now() + Duration::days(7),
        }
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event status.
    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets whether registration is required for the event.
    pub fn requires_registration(mut self, requires_registration: bool) -> Self {
        self.requires_registration = requires_registration;
        self
    }

    /// Sets the maximum participant count (`None` = unlimited).
    pub fn max_participants(mut self, max_participants: Option<i32>) -> Self {
        self.max_participants = max_participants;
        self
    }

    /// Sets the current participant count.
    pub fn current_participants(mut self, current_participants: i32) -> Self {
        self.current_participants = current_participants;
        self
    }

    /// Sets the registration open/close window.
    pub fn registration_window(
        mut self,
        opens_at: Option<DateTime<Utc>>,
        closes_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.registration_opens_at = opens_at;
        self.registration_closes_at = closes_at;
        self
    }

    /// Sets whether participants may cancel their registration.
    pub fn allow_cancellation(mut self, allow_cancellation: bool) -> Self {
        self.allow_cancellation = allow_cancellation;
        self
    }

    /// Sets the cancellation deadline in hours before the event start.
    pub fn cancellation_deadline_hours(mut self, hours: Option<i32>) -> Self {
        self.cancellation_deadline_hours = hours;
        self
    }

    /// Sets the event start time.
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Inserts the event into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            requires_registration: ActiveValue::Set(self.requires_registration),
            max_participants: ActiveValue::Set(self.max_participants),
            current_participants: ActiveValue::Set(self.current_participants),
            registration_opens_at: ActiveValue::Set(self.registration_opens_at),
            registration_closes_at: ActiveValue::Set(self.registration_closes_at),
            allow_cancellation: ActiveValue::Set(self.allow_cancellation),
            cancellation_deadline_hours: ActiveValue::Set(self.cancellation_deadline_hours),
            start_time: ActiveValue::Set(self.start_time),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
