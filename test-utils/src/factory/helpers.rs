//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event together with one registration for it.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific fields.
pub async fn create_event_with_registration(
    db: &DatabaseConnection,
) -> Result<(entity::event::Model, entity::registration::Model), DbErr> {
    let event = super::event::create_event(db).await?;
    let registration = super::registration::create_registration(db, event.id).await?;

    Ok((event, registration))
}
