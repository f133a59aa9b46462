//! Periodic reminder sweep.
//!
//! Every five minutes, upcoming events are scanned and three reminder waves
//! are dispatched: one week before, one day before, and on the day of the
//! event. Each wave has a write-once flag per registration, so a reminder is
//! sent at most once no matter how often the sweep runs.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::data::event::EventRepository;
use crate::data::registration::RegistrationRepository;
use crate::error::AppError;
use crate::model::registration::ReminderWave;
use crate::service::notification::{NotificationKind, NotificationService};

const SWEEP_SCHEDULE: &str = "0 */5 * * * *";

/// Starts the reminder sweep scheduler. Runs until the process exits.
pub async fn start_scheduler(
    db: DatabaseConnection,
    notifier: NotificationService,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_notifier = notifier.clone();

    let job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _lock| {
        let db = job_db.clone();
        let notifier = job_notifier.clone();

        Box::pin(async move {
            if let Err(e) = sweep(&db, &notifier, Utc::now()).await {
                tracing::error!("Reminder sweep failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Reminder scheduler started");

    Ok(())
}

/// Runs one sweep pass: finds upcoming events and dispatches every due,
/// not-yet-sent reminder wave.
pub async fn sweep(
    db: &DatabaseConnection,
    notifier: &NotificationService,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let horizon = now + Duration::days(7);

    let events = EventRepository::new(db)
        .find_upcoming_for_reminders(now, horizon)
        .await?;

    for event in events {
        for wave in [ReminderWave::Week, ReminderWave::Day, ReminderWave::DayOf] {
            if wave_is_due(wave, now, event.start_time) {
                process_wave(db, notifier, &event, wave).await?;
            }
        }
    }

    Ok(())
}

fn wave_is_due(wave: ReminderWave, now: DateTime<Utc>, start_time: DateTime<Utc>) -> bool {
    match wave {
        ReminderWave::Week => start_time - now <= Duration::days(7),
        ReminderWave::Day => start_time - now <= Duration::days(1),
        ReminderWave::DayOf => start_time.date_naive() == now.date_naive(),
    }
}

async fn process_wave(
    db: &DatabaseConnection,
    notifier: &NotificationService,
    event: &entity::event::Model,
    wave: ReminderWave,
) -> Result<(), AppError> {
    let kind = match wave {
        ReminderWave::Week => NotificationKind::ReminderWeek,
        ReminderWave::Day => NotificationKind::ReminderDay,
        ReminderWave::DayOf => NotificationKind::ReminderDayOf,
    };

    let repo = RegistrationRepository::new(db);
    let pending = repo.find_unsent_for_wave(event.id, wave).await?;

    if pending.is_empty() {
        return Ok(());
    }

    tracing::info!(
        event_id = event.id,
        kind = kind.as_str(),
        count = pending.len(),
        "Dispatching reminders"
    );

    for registration in pending {
        if notifier.notify(kind, &registration, event).await {
            repo.set_reminder_sent(registration.id, wave).await?;
        }
    }

    Ok(())
}
