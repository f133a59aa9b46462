use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::registration::{self, RegistrationStatus};

use crate::model::registration::{
    CreateRegistrationParams, ListRegistrationsByEventParams, ReminderWave,
};

pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new registration row.
    ///
    /// The status and registration number are decided by the engine before
    /// this call; notification flags start unset.
    pub async fn create(
        &self,
        params: CreateRegistrationParams,
    ) -> Result<registration::Model, DbErr> {
        let participant = params.participant;

        registration::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            user_id: ActiveValue::Set(params.user_id),
            registration_number: ActiveValue::Set(params.registration_number),
            first_name: ActiveValue::Set(participant.first_name),
            last_name: ActiveValue::Set(participant.last_name),
            email: ActiveValue::Set(participant.email),
            phone: ActiveValue::Set(participant.phone),
            address: ActiveValue::Set(participant.address),
            university: ActiveValue::Set(participant.university),
            academic_unit: ActiveValue::Set(participant.academic_unit),
            level: ActiveValue::Set(participant.level),
            dietary_requirements: ActiveValue::Set(participant.dietary_requirements),
            accessibility_needs: ActiveValue::Set(participant.accessibility_needs),
            custom_answers: ActiveValue::Set(participant.custom_answers),
            status: ActiveValue::Set(params.status),
            checked_in_at: ActiveValue::Set(None),
            checked_in_by: ActiveValue::Set(None),
            cancelled_at: ActiveValue::Set(None),
            cancellation_reason: ActiveValue::Set(None),
            confirmation_sent: ActiveValue::Set(false),
            reminder_week_sent: ActiveValue::Set(false),
            reminder_day_sent: ActiveValue::Set(false),
            reminder_day_of_sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a registration by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<registration::Model>, DbErr> {
        entity::prelude::Registration::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds the registration for a given event and participant email, if any.
    ///
    /// Used as the duplicate pre-check; the composite unique index on
    /// (event_id, email) backs it at the storage layer.
    pub async fn find_by_event_and_email(
        &self,
        event_id: i32,
        email: &str,
    ) -> Result<Option<registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(registration::Column::EventId.eq(event_id))
            .filter(registration::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Counts all registrations for an event (any status).
    ///
    /// The next registration-number sequence is this count plus one.
    pub async fn count_by_event(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Registration::find()
            .filter(registration::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    /// Counts registrations for an event with the given status.
    pub async fn count_by_event_and_status(
        &self,
        event_id: i32,
        status: RegistrationStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::Registration::find()
            .filter(registration::Column::EventId.eq(event_id))
            .filter(registration::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Gets paginated registrations for an event, oldest first, with an
    /// optional status filter and free-text search across name/email/phone.
    ///
    /// # Returns
    /// - `Ok((registrations, total))` - Page of rows and the total item count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated_by_event(
        &self,
        params: &ListRegistrationsByEventParams,
    ) -> Result<(Vec<registration::Model>, u64), DbErr> {
        let mut query = entity::prelude::Registration::find()
            .filter(registration::Column::EventId.eq(params.event_id))
            .order_by_asc(registration::Column::CreatedAt)
            .order_by_asc(registration::Column::Id);

        if let Some(status) = params.status {
            query = query.filter(registration::Column::Status.eq(status));
        }

        if let Some(ref search) = params.search {
            query = query.filter(
                Condition::any()
                    .add(registration::Column::FirstName.contains(search))
                    .add(registration::Column::LastName.contains(search))
                    .add(registration::Column::Email.contains(search))
                    .add(registration::Column::Phone.contains(search)),
            );
        }

        let paginator = query.paginate(self.db, params.per_page);
        let total = paginator.num_items().await?;
        let registrations = paginator.fetch_page(params.page).await?;

        Ok((registrations, total))
    }

    /// Gets paginated registrations attributed to an identity user, newest first.
    pub async fn get_paginated_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<registration::Model>, u64), DbErr> {
        let paginator = entity::prelude::Registration::find()
            .filter(registration::Column::UserId.eq(user_id))
            .order_by_desc(registration::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let registrations = paginator.fetch_page(page).await?;

        Ok((registrations, total))
    }

    /// Finds the oldest waitlisted registration for an event.
    ///
    /// Waitlist FIFO order: `created_at` ascending, ties broken by ID.
    pub async fn find_oldest_waitlisted(
        &self,
        event_id: i32,
    ) -> Result<Option<registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(registration::Column::EventId.eq(event_id))
            .filter(registration::Column::Status.eq(RegistrationStatus::Waitlist))
            .order_by_asc(registration::Column::CreatedAt)
            .order_by_asc(registration::Column::Id)
            .one(self.db)
            .await
    }

    /// Marks a registration as cancelled, recording the timestamp and reason.
    pub async fn mark_cancelled(
        &self,
        model: registration::Model,
        reason: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<registration::Model, DbErr> {
        let mut active: registration::ActiveModel = model.into();
        active.status = ActiveValue::Set(RegistrationStatus::Cancelled);
        active.cancelled_at = ActiveValue::Set(Some(now));
        active.cancellation_reason = ActiveValue::Set(reason);
        active.update(self.db).await
    }

    /// Marks a registration as present, recording the check-in actor.
    pub async fn mark_checked_in(
        &self,
        model: registration::Model,
        actor: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<registration::Model, DbErr> {
        let mut active: registration::ActiveModel = model.into();
        active.status = ActiveValue::Set(RegistrationStatus::Present);
        active.checked_in_at = ActiveValue::Set(Some(now));
        active.checked_in_by = ActiveValue::Set(actor);
        active.update(self.db).await
    }

    /// Flips a waitlisted registration to confirmed (waitlist promotion).
    pub async fn mark_confirmed(
        &self,
        model: registration::Model,
    ) -> Result<registration::Model, DbErr> {
        let mut active: registration::ActiveModel = model.into();
        active.status = ActiveValue::Set(RegistrationStatus::Confirmed);
        active.update(self.db).await
    }

    /// Sets the confirmation-sent flag. Write-once, never reset.
    pub async fn set_confirmation_sent(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Registration::update_many()
            .col_expr(
                registration::Column::ConfirmationSent,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(registration::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the sent flag for a reminder wave. Write-once, never reset.
    pub async fn set_reminder_sent(&self, id: i32, wave: ReminderWave) -> Result<(), DbErr> {
        let column = match wave {
            ReminderWave::Week => registration::Column::ReminderWeekSent,
            ReminderWave::Day => registration::Column::ReminderDaySent,
            ReminderWave::DayOf => registration::Column::ReminderDayOfSent,
        };

        entity::prelude::Registration::update_many()
            .col_expr(column, sea_orm::sea_query::Expr::value(true))
            .filter(registration::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets non-cancelled registrations for an event whose reminder flag for
    /// the given wave is still unset.
    pub async fn find_unsent_for_wave(
        &self,
        event_id: i32,
        wave: ReminderWave,
    ) -> Result<Vec<registration::Model>, DbErr> {
        let column = match wave {
            ReminderWave::Week => registration::Column::ReminderWeekSent,
            ReminderWave::Day => registration::Column::ReminderDaySent,
            ReminderWave::DayOf => registration::Column::ReminderDayOfSent,
        };

        entity::prelude::Registration::find()
            .filter(registration::Column::EventId.eq(event_id))
            .filter(registration::Column::Status.ne(RegistrationStatus::Cancelled))
            .filter(column.eq(false))
            .order_by_asc(registration::Column::Id)
            .all(self.db)
            .await
    }
}
