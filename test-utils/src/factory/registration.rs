//! Registration factory for creating test registrations.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::registration::RegistrationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test registrations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity::registration::RegistrationStatus;
/// use test_utils::factory::registration::RegistrationFactory;
///
/// let registration = RegistrationFactory::new(&db, event.id)
///     .email("p1@x.com")
///     .status(RegistrationStatus::Waitlist)
///     .build()
///     .await?;
/// ```
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    user_id: Option<i32>,
    registration_number: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    status: RegistrationStatus,
    created_at: DateTime<Utc>,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new RegistrationFactory with default values.
    ///
    /// Defaults:
    /// - registration_number: `"AEM-2026-TST-{id:06}"` where id is auto-incremented
    /// - email: `"participant{id}@example.com"`
    /// - status: `Confirmed`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            event_id,
            user_id: None,
            registration_number: format!("AEM-2026-TST-{:06}", id),
            first_name: "Participant".to_string(),
            last_name: format!("Number {}", id),
            email: format!("participant{}@example.com", id),
            phone: None,
            status: RegistrationStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    /// Sets the identity user the registration is attributed to.
    pub fn user_id(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the registration number.
    pub fn registration_number(mut self, registration_number: impl Into<String>) -> Self {
        self.registration_number = registration_number.into();
        self
    }

    /// Sets the participant first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the participant last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the participant email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the participant phone number.
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the registration status.
    pub fn status(mut self, status: RegistrationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp (drives waitlist ordering).
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the registration into the database.
    pub async fn build(self) -> Result<entity::registration::Model, DbErr> {
        entity::registration::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.user_id),
            registration_number: ActiveValue::Set(self.registration_number),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            address: ActiveValue::Set(None),
            university: ActiveValue::Set(None),
            academic_unit: ActiveValue::Set(None),
            level: ActiveValue::Set(None),
            dietary_requirements: ActiveValue::Set(None),
            accessibility_needs: ActiveValue::Set(None),
            custom_answers: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            checked_in_at: ActiveValue::Set(None),
            checked_in_by: ActiveValue::Set(None),
            cancelled_at: ActiveValue::Set(None),
            cancellation_reason: ActiveValue::Set(None),
            confirmation_sent: ActiveValue::Set(false),
            reminder_week_sent: ActiveValue::Set(false),
            reminder_day_sent: ActiveValue::Set(false),
            reminder_day_of_sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registration with default values for the given event.
pub async fn create_registration(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db, event_id).build().await
}
