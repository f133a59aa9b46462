//! Domain models and DTOs for registration operations.

use chrono::{DateTime, Utc};
use entity::registration::RegistrationStatus;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::model::event::EventDto;

/// Participant-supplied fields for `POST /api/events/{id}/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub university: Option<String>,
    pub academic_unit: Option<String>,
    pub level: Option<String>,
    pub dietary_requirements: Option<String>,
    pub accessibility_needs: Option<String>,
    /// Answers to event-specific custom questions, keyed by question label.
    pub custom_answers: Option<serde_json::Value>,
}

/// Optional request body for `DELETE /api/registrations/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelDto {
    pub reason: Option<String>,
}

/// Parameters for inserting a registration row, assembled by the engine.
#[derive(Debug, Clone)]
pub struct CreateRegistrationParams {
    pub event_id: i32,
    pub user_id: Option<i32>,
    pub registration_number: String,
    pub status: RegistrationStatus,
    pub participant: RegisterDto,
}

/// Parameters for the event registration listing.
#[derive(Debug, Clone)]
pub struct ListRegistrationsByEventParams {
    pub event_id: i32,
    pub status: Option<RegistrationStatus>,
    /// Free-text search across first name, last name, email, and phone.
    pub search: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

/// Registration representation returned by the API.
///
/// Carries the derived view values (`full_name`, `is_confirmed`, ...) computed
/// from stored state at the boundary; they are never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: Option<i32>,
    pub registration_number: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub university: Option<String>,
    pub academic_unit: Option<String>,
    pub level: Option<String>,
    pub dietary_requirements: Option<String>,
    pub accessibility_needs: Option<String>,
    pub custom_answers: Option<serde_json::Value>,
    pub status: String,
    pub is_confirmed: bool,
    pub is_cancelled: bool,
    pub is_present: bool,
    pub checked_in: bool,
    pub checked_in_at: Option<DateTime<Utc>>,
    pub checked_in_by: Option<i32>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RegistrationDto {
    /// Converts an entity model into the API representation.
    pub fn from_model(model: entity::registration::Model) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            user_id: model.user_id,
            registration_number: model.registration_number,
            full_name: format!("{} {}", model.first_name, model.last_name),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            university: model.university,
            academic_unit: model.academic_unit,
            level: model.level,
            dietary_requirements: model.dietary_requirements,
            accessibility_needs: model.accessibility_needs,
            custom_answers: model.custom_answers,
            is_confirmed: model.status == RegistrationStatus::Confirmed,
            is_cancelled: model.status == RegistrationStatus::Cancelled,
            is_present: model.status == RegistrationStatus::Present,
            checked_in: model.checked_in_at.is_some(),
            status: model.status.to_value(),
            checked_in_at: model.checked_in_at,
            checked_in_by: model.checked_in_by,
            cancelled_at: model.cancelled_at,
            cancellation_reason: model.cancellation_reason,
            created_at: model.created_at,
        }
    }
}

/// Minimal identity-user summary embedded in registration detail responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummaryDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserSummaryDto {
    pub fn from_model(model: entity::app_user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }
}

/// Single registration with its event and user associations.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationDetailDto {
    #[serde(flatten)]
    pub registration: RegistrationDto,
    pub event: Option<EventDto>,
    pub user: Option<UserSummaryDto>,
}

/// Paginated registration list.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedRegistrationsDto {
    pub registrations: Vec<RegistrationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Reminder waves swept by the scheduler.
///
/// Each wave has a write-once sent flag on the registration row; a wave is
/// sent at most once per registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderWave {
    /// Seven days before the event.
    Week,
    /// One day before the event.
    Day,
    /// The day of the event.
    DayOf,
}
