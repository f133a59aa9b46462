//! Domain models and DTOs for event operations.

use chrono::{DateTime, Utc};
use entity::event::EventStatus;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

/// Request body for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventDto {
    pub title: String,
    pub description: Option<String>,
    /// Lifecycle status as a string (`draft`, `published`, ...). Defaults to `draft`.
    pub status: Option<String>,
    pub requires_registration: Option<bool>,
    pub max_participants: Option<i32>,
    pub registration_opens_at: Option<DateTime<Utc>>,
    pub registration_closes_at: Option<DateTime<Utc>>,
    pub allow_cancellation: Option<bool>,
    pub cancellation_deadline_hours: Option<i32>,
    pub start_time: DateTime<Utc>,
}

/// Request body for updating an event. Only provided fields are changed.
///
/// `current_participants` is deliberately absent: the capacity counter is
/// mutated exclusively by the registration engine.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub requires_registration: Option<bool>,
    pub max_participants: Option<i32>,
    pub registration_opens_at: Option<DateTime<Utc>>,
    pub registration_closes_at: Option<DateTime<Utc>>,
    pub allow_cancellation: Option<bool>,
    pub cancellation_deadline_hours: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
}

/// Parameters for inserting a new event, with the status already parsed.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub description: Option<String>,
    pub status: EventStatus,
    pub requires_registration: bool,
    pub max_participants: Option<i32>,
    pub registration_opens_at: Option<DateTime<Utc>>,
    pub registration_closes_at: Option<DateTime<Utc>>,
    pub allow_cancellation: bool,
    pub cancellation_deadline_hours: Option<i32>,
    pub start_time: DateTime<Utc>,
}

/// Parameters for updating an event. Only `Some` fields are written.
#[derive(Debug, Clone)]
pub struct UpdateEventParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<EventStatus>,
    pub requires_registration: Option<bool>,
    pub max_participants: Option<i32>,
    pub registration_opens_at: Option<DateTime<Utc>>,
    pub registration_closes_at: Option<DateTime<Utc>>,
    pub allow_cancellation: Option<bool>,
    pub cancellation_deadline_hours: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
}

/// Event representation returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub requires_registration: bool,
    pub max_participants: Option<i32>,
    pub current_participants: i32,
    /// Remaining capacity, `None` when the event is unlimited.
    pub available_spots: Option<i32>,
    pub registration_opens_at: Option<DateTime<Utc>>,
    pub registration_closes_at: Option<DateTime<Utc>>,
    pub allow_cancellation: bool,
    pub cancellation_deadline_hours: Option<i32>,
    pub start_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl EventDto {
    /// Converts an entity model into the API representation.
    pub fn from_model(model: entity::event::Model) -> Self {
        let available_spots = model
            .max_participants
            .map(|max| (max - model.current_participants).max(0));

        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            status: model.status.to_value(),
            requires_registration: model.requires_registration,
            max_participants: model.max_participants,
            current_participants: model.current_participants,
            available_spots,
            registration_opens_at: model.registration_opens_at,
            registration_closes_at: model.registration_closes_at,
            allow_cancellation: model.allow_cancellation,
            cancellation_deadline_hours: model.cancellation_deadline_hours,
            start_time: model.start_time,
            created_at: model.created_at,
        }
    }
}

/// Paginated event list.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedEventsDto {
    pub events: Vec<EventDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Derived per-event registration statistics (read-only).
#[derive(Debug, Clone, Serialize)]
pub struct EventStatsDto {
    pub event_id: i32,
    pub total_registrations: u64,
    pub confirmed: u64,
    pub waitlisted: u64,
    pub cancelled: u64,
    pub present: u64,
    pub absent: u64,
    /// `current_participants / max_participants`, `None` for unlimited events.
    pub fill_rate: Option<f64>,
    /// `present / (present + absent)`, `None` before any check-in data exists.
    pub attendance_rate: Option<f64>,
}
