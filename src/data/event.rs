use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait}, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::event::{self, EventStatus};

use crate::model::event::{CreateEventParams, UpdateEventParams};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new event with an empty capacity counter.
    pub async fn create(&self, params: CreateEventParams) -> Result<event::Model, DbErr> {
        event::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status),
            requires_registration: ActiveValue::Set(params.requires_registration),
            max_participants: ActiveValue::Set(params.max_participants),
            current_participants: ActiveValue::Set(0),
            registration_opens_at: ActiveValue::Set(params.registration_opens_at),
            registration_closes_at: ActiveValue::Set(params.registration_closes_at),
            allow_cancellation: ActiveValue::Set(params.allow_cancellation),
            cancellation_deadline_hours: ActiveValue::Set(params.cancellation_deadline_hours),
            start_time: ActiveValue::Set(params.start_time),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an event by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Gets paginated events ordered by start time (upcoming first), with an
    /// optional status filter.
    ///
    /// # Returns
    /// - `Ok((events, total))` - Page of events and the total item count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        status: Option<EventStatus>,
    ) -> Result<(Vec<event::Model>, u64), DbErr> {
        let mut query = entity::prelude::Event::find().order_by_asc(event::Column::StartTime);

        if let Some(status) = status {
            query = query.filter(event::Column::Status.eq(status));
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let events = paginator.fetch_page(page).await?;

        Ok((events, total))
    }

    /// Updates an event. Only `Some` fields in the params are written.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated event
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: UpdateEventParams) -> Result<Option<event::Model>, DbErr> {
        let Some(model) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: event::ActiveModel = model.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(requires_registration) = params.requires_registration {
            active.requires_registration = ActiveValue::Set(requires_registration);
        }
        if let Some(max_participants) = params.max_participants {
            active.max_participants = ActiveValue::Set(Some(max_participants));
        }
        if let Some(opens_at) = params.registration_opens_at {
            active.registration_opens_at = ActiveValue::Set(Some(opens_at));
        }
        if let Some(closes_at) = params.registration_closes_at {
            active.registration_closes_at = ActiveValue::Set(Some(closes_at));
        }
        if let Some(allow_cancellation) = params.allow_cancellation {
            active.allow_cancellation = ActiveValue::Set(allow_cancellation);
        }
        if let Some(hours) = params.cancellation_deadline_hours {
            active.cancellation_deadline_hours = ActiveValue::Set(Some(hours));
        }
        if let Some(start_time) = params.start_time {
            active.start_time = ActiveValue::Set(start_time);
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Atomically claims one capacity spot for the event.
    ///
    /// Runs a single conditional UPDATE incrementing `current_participants`
    /// only while capacity remains (or the event is unlimited), so two racing
    /// claims can never both succeed for the last spot.
    ///
    /// # Returns
    /// - `Ok(true)` - A spot was claimed (counter incremented)
    /// - `Ok(false)` - Capacity exhausted, nothing changed
    pub async fn claim_spot(&self, event_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::update_many()
            .col_expr(
                event::Column::CurrentParticipants,
                Expr::col(event::Column::CurrentParticipants).add(1),
            )
            .filter(event::Column::Id.eq(event_id))
            .filter(
                Condition::any()
                    .add(event::Column::MaxParticipants.is_null())
                    .add(
                        Expr::col(event::Column::CurrentParticipants)
                            .lt(Expr::col(event::Column::MaxParticipants)),
                    ),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Releases one capacity spot, flooring the counter at zero.
    pub async fn release_spot(&self, event_id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::update_many()
            .col_expr(
                event::Column::CurrentParticipants,
                Expr::col(event::Column::CurrentParticipants).sub(1),
            )
            .filter(event::Column::Id.eq(event_id))
            .filter(event::Column::CurrentParticipants.gt(0))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets published or ongoing events requiring registration that start
    /// within `(now, horizon]`. Used by the reminder sweep.
    pub async fn find_upcoming_for_reminders(
        &self,
        now: DateTime<Utc>,
        horizon: DateTime<Utc>,
    ) -> Result<Vec<event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(event::Column::RequiresRegistration.eq(true))
            .filter(
                Condition::any()
                    .add(event::Column::Status.eq(EventStatus::Published))
                    .add(event::Column::Status.eq(EventStatus::Ongoing)),
            )
            .filter(event::Column::StartTime.gt(now))
            .filter(event::Column::StartTime.lte(horizon))
            .order_by_asc(event::Column::StartTime)
            .all(self.db)
            .await
    }
}
