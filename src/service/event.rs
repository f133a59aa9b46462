//! Event management: create, fetch, list, and update.
//!
//! The capacity counter (`current_participants`) is never touched here; only
//! the registration engine mutates it.

use sea_orm::{ActiveEnum, DatabaseConnection};

use entity::event::EventStatus;

use crate::data::event::EventRepository;
use crate::error::AppError;
use crate::model::event::{
    CreateEventDto, CreateEventParams, EventDto, PaginatedEventsDto, UpdateEventDto,
    UpdateEventParams,
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event. Status defaults to draft when omitted.
    pub async fn create(&self, dto: CreateEventDto) -> Result<EventDto, AppError> {
        let status = match dto.status {
            Some(ref value) => parse_status(value)?,
            None => EventStatus::Draft,
        };

        let event = EventRepository::new(self.db)
            .create(CreateEventParams {
                title: dto.title,
                description: dto.description,
                status,
                requires_registration: dto.requires_registration.unwrap_or(true),
                max_participants: dto.max_participants,
                registration_opens_at: dto.registration_opens_at,
                registration_closes_at: dto.registration_closes_at,
                allow_cancellation: dto.allow_cancellation.unwrap_or(true),
                cancellation_deadline_hours: dto.cancellation_deadline_hours,
                start_time: dto.start_time,
            })
            .await?;

        tracing::info!(event_id = event.id, title = %event.title, "Event created");

        Ok(EventDto::from_model(event))
    }

    /// Gets an event by ID.
    pub async fn get_by_id(&self, event_id: i32) -> Result<EventDto, AppError> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        Ok(EventDto::from_model(event))
    }

    /// Lists events ordered by start time, optionally filtered by status.
    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
        status: Option<String>,
    ) -> Result<PaginatedEventsDto, AppError> {
        let status = status.as_deref().map(parse_status).transpose()?;

        let (events, total) = EventRepository::new(self.db)
            .get_paginated(page, per_page, status)
            .await?;

        Ok(PaginatedEventsDto {
            events: events.into_iter().map(EventDto::from_model).collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Updates an event's mutable fields.
    pub async fn update(&self, event_id: i32, dto: UpdateEventDto) -> Result<EventDto, AppError> {
        let status = dto.status.as_deref().map(parse_status).transpose()?;

        let event = EventRepository::new(self.db)
            .update(UpdateEventParams {
                id: event_id,
                title: dto.title,
                description: dto.description,
                status,
                requires_registration: dto.requires_registration,
                max_participants: dto.max_participants,
                registration_opens_at: dto.registration_opens_at,
                registration_closes_at: dto.registration_closes_at,
                allow_cancellation: dto.allow_cancellation,
                cancellation_deadline_hours: dto.cancellation_deadline_hours,
                start_time: dto.start_time,
            })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        tracing::info!(event_id = event.id, "Event updated");

        Ok(EventDto::from_model(event))
    }
}

fn parse_status(value: &str) -> Result<EventStatus, AppError> {
    EventStatus::try_from_value(&value.to_string())
        .map_err(|_| AppError::BadRequest(format!("Unknown event status: {}", value)))
}
