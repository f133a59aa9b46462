//! Read-only per-event registration statistics.

use sea_orm::DatabaseConnection;

use entity::registration::RegistrationStatus;

use crate::data::event::EventRepository;
use crate::data::registration::RegistrationRepository;
use crate::error::AppError;
use crate::model::event::EventStatsDto;

pub struct EventStatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventStatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes registration counts and derived rates for one event.
    ///
    /// `fill_rate` is absent for unlimited events; `attendance_rate` is absent
    /// until at least one registration has been marked present or absent.
    pub async fn get_for_event(&self, event_id: i32) -> Result<EventStatsDto, AppError> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        let repo = RegistrationRepository::new(self.db);

        let total_registrations = repo.count_by_event(event_id).await?;
        let confirmed = repo
            .count_by_event_and_status(event_id, RegistrationStatus::Confirmed)
            .await?;
        let waitlisted = repo
            .count_by_event_and_status(event_id, RegistrationStatus::Waitlist)
            .await?;
        let cancelled = repo
            .count_by_event_and_status(event_id, RegistrationStatus::Cancelled)
            .await?;
        let present = repo
            .count_by_event_and_status(event_id, RegistrationStatus::Present)
            .await?;
        let absent = repo
            .count_by_event_and_status(event_id, RegistrationStatus::Absent)
            .await?;

        let fill_rate = event
            .max_participants
            .filter(|max| *max > 0)
            .map(|max| f64::from(event.current_participants) / f64::from(max));

        let attendance_rate = match present + absent {
            0 => None,
            checked => Some(present as f64 / checked as f64),
        };

        Ok(EventStatsDto {
            event_id,
            total_registrations,
            confirmed,
            waitlisted,
            cancelled,
            present,
            absent,
            fill_rate,
            attendance_rate,
        })
    }
}
