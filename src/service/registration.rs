//! The registration engine.
//!
//! All state transitions for registrations live here: creation with the
//! capacity decision, cancellation with waitlist promotion, and check-in.
//! Each mutating operation runs inside a single transaction so the capacity
//! counter, the registration rows, and the promotion decision can never drift
//! apart under concurrent requests.

use chrono::{Datelike, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use entity::registration::RegistrationStatus;

use crate::data::event::EventRepository;
use crate::data::registration::RegistrationRepository;
use crate::data::user::UserRepository;
use crate::error::AppError;
use crate::model::event::EventDto;
use crate::model::registration::{
    CreateRegistrationParams, ListRegistrationsByEventParams, PaginatedRegistrationsDto,
    RegisterDto, RegistrationDetailDto, RegistrationDto, UserSummaryDto,
};
use crate::service::notification::{NotificationKind, NotificationService};
use crate::util::registration_number;

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    notifier: NotificationService,
}

impl<'a> RegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: NotificationService) -> Self {
        Self { db, notifier }
    }

    /// Registers a participant for an event.
    ///
    /// The status decision is made by an atomic conditional increment of the
    /// event's capacity counter: if a spot was claimed the registration is
    /// CONFIRMED, otherwise it joins the WAITLIST. Everything up to the commit
    /// runs in one transaction; the confirmation notification is dispatched
    /// afterwards and can never undo the registration.
    ///
    /// # Returns
    /// - `Ok(RegistrationDto)` - The created registration
    /// - `Err(AppError::NotFound)` - No such event
    /// - `Err(AppError::BadRequest)` - Event not open for registration
    /// - `Err(AppError::Conflict)` - Email already registered for this event
    pub async fn register(
        &self,
        event_id: i32,
        participant: RegisterDto,
        acting_user: Option<i32>,
    ) -> Result<RegistrationDto, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let event_repo = EventRepository::new(&txn);
        let registration_repo = RegistrationRepository::new(&txn);

        let event = event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        if !event.requires_registration {
            return Err(AppError::BadRequest(
                "Event does not take registrations".to_string(),
            ));
        }

        match event.status {
            entity::event::EventStatus::Cancelled => {
                return Err(AppError::BadRequest("Event is cancelled".to_string()));
            }
            entity::event::EventStatus::Completed => {
                return Err(AppError::BadRequest(
                    "Event has already taken place".to_string(),
                ));
            }
            _ => {}
        }

        if let Some(opens_at) = event.registration_opens_at {
            if now < opens_at {
                return Err(AppError::BadRequest(
                    "Registration has not opened yet".to_string(),
                ));
            }
        }

        if let Some(closes_at) = event.registration_closes_at {
            if now > closes_at {
                return Err(AppError::BadRequest("Registration has closed".to_string()));
            }
        }

        if registration_repo
            .find_by_event_and_email(event_id, &participant.email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "This email is already registered for the event".to_string(),
            ));
        }

        let sequence = registration_repo.count_by_event(event_id).await? + 1;
        let number = registration_number::registration_number(&event.title, now.year(), sequence);

        let status = if event_repo.claim_spot(event_id).await? {
            RegistrationStatus::Confirmed
        } else {
            RegistrationStatus::Waitlist
        };

        let registration = registration_repo
            .create(CreateRegistrationParams {
                event_id,
                user_id: acting_user,
                registration_number: number,
                status,
                participant,
            })
            .await
            .map_err(map_unique_violation)?;

        txn.commit().await?;

        tracing::info!(
            registration_number = %registration.registration_number,
            event_id,
            status = ?registration.status,
            "Registration created"
        );

        // The registration is committed; everything from here is best-effort
        // and must never surface as a failure to the caller.
        if self
            .notifier
            .notify(NotificationKind::Confirmation, &registration, &event)
            .await
        {
            if let Err(e) = RegistrationRepository::new(self.db)
                .set_confirmation_sent(registration.id)
                .await
            {
                tracing::warn!(
                    registration_id = registration.id,
                    error = %e,
                    "Failed to record confirmation delivery"
                );
            }
        }

        Ok(RegistrationDto::from_model(registration))
    }

    /// Cancels a registration.
    ///
    /// When the cancelled registration held a confirmed spot, that spot is
    /// released and at most one waitlisted registration (oldest first) is
    /// promoted into it. Cancelled is terminal.
    ///
    /// # Returns
    /// - `Ok(RegistrationDto)` - The cancelled registration
    /// - `Err(AppError::NotFound)` - No such registration
    /// - `Err(AppError::BadRequest)` - Already cancelled, cancellation
    ///   disabled for the event, or the cancellation deadline has passed
    pub async fn cancel(
        &self,
        registration_id: i32,
        reason: Option<String>,
    ) -> Result<RegistrationDto, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let event_repo = EventRepository::new(&txn);
        let registration_repo = RegistrationRepository::new(&txn);

        let registration = registration_repo
            .get_by_id(registration_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Registration {} not found", registration_id))
            })?;

        if registration.status == RegistrationStatus::Cancelled {
            return Err(AppError::BadRequest(
                "Registration is already cancelled".to_string(),
            ));
        }

        let event = event_repo
            .get_by_id(registration.event_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Event {} not found", registration.event_id))
            })?;

        if !event.allow_cancellation {
            return Err(AppError::BadRequest(
                "Event does not allow cancellation".to_string(),
            ));
        }

        if let Some(hours) = event.cancellation_deadline_hours {
            let deadline = event.start_time - Duration::hours(hours as i64);
            if now > deadline {
                return Err(AppError::BadRequest(
                    "Cancellation deadline has passed".to_string(),
                ));
            }
        }

        let held_spot = registration.status == RegistrationStatus::Confirmed;
        let cancelled = registration_repo
            .mark_cancelled(registration, reason, now)
            .await?;

        let mut promoted = None;
        if held_spot {
            event_repo.release_spot(event.id).await?;

            // One promotion per cancellation; the claim re-checks capacity so
            // a concurrent direct registration cannot be double-counted.
            if let Some(next) = registration_repo.find_oldest_waitlisted(event.id).await? {
                if event_repo.claim_spot(event.id).await? {
                    promoted = Some(registration_repo.mark_confirmed(next).await?);
                }
            }
        }

        txn.commit().await?;

        tracing::info!(
            registration_number = %cancelled.registration_number,
            event_id = event.id,
            promoted = promoted.is_some(),
            "Registration cancelled"
        );

        self.notifier
            .notify(NotificationKind::Cancellation, &cancelled, &event)
            .await;

        if let Some(ref promoted) = promoted {
            self.notifier
                .notify(NotificationKind::WaitlistPromotion, promoted, &event)
                .await;
        }

        Ok(RegistrationDto::from_model(cancelled))
    }

    /// Checks a participant in, marking them PRESENT.
    ///
    /// # Returns
    /// - `Ok(RegistrationDto)` - The checked-in registration
    /// - `Err(AppError::NotFound)` - No such registration
    /// - `Err(AppError::BadRequest)` - Cancelled or already checked in
    pub async fn check_in(
        &self,
        registration_id: i32,
        acting_user: Option<i32>,
    ) -> Result<RegistrationDto, AppError> {
        let registration_repo = RegistrationRepository::new(self.db);

        let registration = registration_repo
            .get_by_id(registration_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Registration {} not found", registration_id))
            })?;

        if registration.status == RegistrationStatus::Cancelled {
            return Err(AppError::BadRequest(
                "Cannot check in a cancelled registration".to_string(),
            ));
        }

        if registration.status == RegistrationStatus::Present {
            return Err(AppError::BadRequest(
                "Registration is already checked in".to_string(),
            ));
        }

        let checked_in = registration_repo
            .mark_checked_in(registration, acting_user, Utc::now())
            .await?;

        tracing::info!(
            registration_number = %checked_in.registration_number,
            "Participant checked in"
        );

        Ok(RegistrationDto::from_model(checked_in))
    }

    /// Gets a single registration with its event and identity-user data.
    pub async fn get_by_id(
        &self,
        registration_id: i32,
    ) -> Result<RegistrationDetailDto, AppError> {
        let registration = RegistrationRepository::new(self.db)
            .get_by_id(registration_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Registration {} not found", registration_id))
            })?;

        let event = EventRepository::new(self.db)
            .get_by_id(registration.event_id)
            .await?;

        let user = match registration.user_id {
            Some(user_id) => UserRepository::new(self.db).find_by_id(user_id).await?,
            None => None,
        };

        Ok(RegistrationDetailDto {
            registration: RegistrationDto::from_model(registration),
            event: event.map(EventDto::from_model),
            user: user.map(UserSummaryDto::from_model),
        })
    }

    /// Lists registrations for an event, oldest first.
    pub async fn list_by_event(
        &self,
        params: ListRegistrationsByEventParams,
    ) -> Result<PaginatedRegistrationsDto, AppError> {
        EventRepository::new(self.db)
            .get_by_id(params.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", params.event_id)))?;

        let (registrations, total) = RegistrationRepository::new(self.db)
            .get_paginated_by_event(&params)
            .await?;

        Ok(paginate(registrations, total, params.page, params.per_page))
    }

    /// Lists registrations attributed to an identity user, newest first.
    pub async fn list_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedRegistrationsDto, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let (registrations, total) = RegistrationRepository::new(self.db)
            .get_paginated_by_user(user_id, page, per_page)
            .await?;

        Ok(paginate(registrations, total, page, per_page))
    }
}

fn paginate(
    registrations: Vec<entity::registration::Model>,
    total: u64,
    page: u64,
    per_page: u64,
) -> PaginatedRegistrationsDto {
    PaginatedRegistrationsDto {
        registrations: registrations
            .into_iter()
            .map(RegistrationDto::from_model)
            .collect(),
        total,
        page,
        per_page,
        total_pages: total.div_ceil(per_page.max(1)),
    }
}

/// Maps a unique-constraint violation from the (event_id, email) index to the
/// duplicate-registration conflict. Racing inserts that slip past the
/// pre-check land here.
///
/// The driver message names the violated index or columns, so a collision on
/// another unique column (the registration number, under concurrent inserts)
/// is not misreported as a duplicate email and stays a database error.
fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("email") => {
            AppError::Conflict("This email is already registered for the event".to_string())
        }
        _ => AppError::from(err),
    }
}
