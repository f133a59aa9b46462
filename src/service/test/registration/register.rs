use super::*;
use chrono::Datelike;

/// Tests registering while capacity is available.
///
/// Verifies the registration is confirmed, the capacity counter is claimed,
/// and the registration number follows the expected format.
///
/// Expected: Ok with confirmed registration
#[tokio::test]
async fn confirms_when_capacity_available() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .title("Welcome Gala")
        .max_participants(Some(2))
        .build()
        .await?;

    let registration = service(db)
        .register(event.id, participant("alice@example.com"), None)
        .await?;

    assert!(registration.is_confirmed);
    assert_eq!(registration.status, "confirmed");
    assert_eq!(
        registration.registration_number,
        format!("AEM-{}-WEL-000001", Utc::now().year())
    );
    assert_eq!(registration.full_name, "Test Participant");
    assert_eq!(current_participants(db, event.id).await, 1);

    Ok(())
}

/// Tests registering once the event is full.
///
/// Verifies the registration is waitlisted and the counter stays at the
/// limit.
///
/// Expected: Ok with waitlisted registration
#[tokio::test]
async fn waitlists_when_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .max_participants(Some(1))
        .build()
        .await?;

    let engine = service(db);
    let first = engine
        .register(event.id, participant("first@example.com"), None)
        .await?;
    let second = engine
        .register(event.id, participant("second@example.com"), None)
        .await?;

    assert!(first.is_confirmed);
    assert_eq!(second.status, "waitlist");
    assert!(!second.is_confirmed);
    assert_eq!(current_participants(db, event.id).await, 1);

    Ok(())
}

/// Tests registering for an unlimited event.
///
/// Verifies every registration is confirmed and none are waitlisted when no
/// capacity limit is set.
///
/// Expected: Ok with all registrations confirmed
#[tokio::test]
async fn unlimited_event_always_confirms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .max_participants(None)
        .build()
        .await?;

    let engine = service(db);
    for i in 0..4 {
        let registration = engine
            .register(event.id, participant(&format!("p{}@example.com", i)), None)
            .await?;
        assert!(registration.is_confirmed);
    }

    assert_eq!(current_participants(db, event.id).await, 4);

    Ok(())
}

/// Tests registration numbers increase per event.
///
/// Verifies sequences are distinct and strictly increasing even when an
/// earlier registration was cancelled.
///
/// Expected: Ok with sequence 1, 2, 3
#[tokio::test]
async fn assigns_increasing_sequence_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .title("Hackathon")
        .build()
        .await?;

    let engine = service(db);
    let first = engine
        .register(event.id, participant("a@example.com"), None)
        .await?;
    let second = engine
        .register(event.id, participant("b@example.com"), None)
        .await?;

    engine.cancel(first.id, None).await?;

    let third = engine
        .register(event.id, participant("c@example.com"), None)
        .await?;

    assert!(first.registration_number.ends_with("-000001"));
    assert!(second.registration_number.ends_with("-000002"));
    assert!(third.registration_number.ends_with("-000003"));

    Ok(())
}

/// Tests duplicate registration for the same event and email.
///
/// Expected: Err(Conflict) with no second row created
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let engine = service(db);
    engine
        .register(event.id, participant("alice@example.com"), None)
        .await?;
    let result = engine
        .register(event.id, participant("alice@example.com"), None)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(
        RegistrationRepository::new(db).count_by_event(event.id).await?,
        1
    );

    Ok(())
}

/// Tests the same email may register for a different event.
///
/// Expected: Ok on the second event
#[tokio::test]
async fn allows_same_email_on_other_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;
    let other = factory::event::create_event(db).await?;

    let engine = service(db);
    engine
        .register(event.id, participant("alice@example.com"), None)
        .await?;
    let result = engine
        .register(other.id, participant("alice@example.com"), None)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests registering for a non-existent event.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_nonexistent_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = service(db)
        .register(999999, participant("alice@example.com"), None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests registering for completed and cancelled events.
///
/// Expected: Err(BadRequest) for both
#[tokio::test]
async fn rejects_completed_and_cancelled_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let completed = factory::event::EventFactory::new(db)
        .status(EventStatus::Completed)
        .build()
        .await?;
    let cancelled = factory::event::EventFactory::new(db)
        .status(EventStatus::Cancelled)
        .build()
        .await?;

    let engine = service(db);
    let result = engine
        .register(completed.id, participant("alice@example.com"), None)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = engine
        .register(cancelled.id, participant("alice@example.com"), None)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering for an event that does not take registrations.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_walk_in_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .requires_registration(false)
        .build()
        .await?;

    let result = service(db)
        .register(event.id, participant("alice@example.com"), None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering outside the registration window.
///
/// Expected: Err(BadRequest) before opening and after closing
#[tokio::test]
async fn rejects_outside_registration_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let not_yet_open = factory::event::EventFactory::new(db)
        .registration_window(Some(Utc::now() + Duration::days(1)), None)
        .build()
        .await?;
    let already_closed = factory::event::EventFactory::new(db)
        .registration_window(None, Some(Utc::now() - Duration::hours(1)))
        .build()
        .await?;

    let engine = service(db);
    let result = engine
        .register(not_yet_open.id, participant("alice@example.com"), None)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = engine
        .register(already_closed.id, participant("alice@example.com"), None)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests attributing a registration to an acting user.
///
/// Expected: Ok with user_id recorded
#[tokio::test]
async fn attributes_acting_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::app_user::create_user(db).await?;
    let event = factory::event::create_event(db).await?;

    let registration = service(db)
        .register(event.id, participant("alice@example.com"), Some(user.id))
        .await?;

    assert_eq!(registration.user_id, Some(user.id));

    Ok(())
}

/// Tests registration survives a failed confirmation delivery.
///
/// The dispatcher points at an unreachable endpoint, so delivery fails and
/// the flag bookkeeping is skipped. The registration is already committed at
/// that point and must be returned to the caller; a retry with the same email
/// would otherwise hit the duplicate conflict for a registration the caller
/// never saw.
///
/// Expected: Ok with the row stored and confirmation_sent false
#[tokio::test]
async fn succeeds_when_confirmation_delivery_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let notifier = NotificationService::new(
        reqwest::Client::new(),
        Some("http://127.0.0.1:1/webhook".to_string()),
    );
    let registration = RegistrationService::new(db, notifier)
        .register(event.id, participant("alice@example.com"), None)
        .await?;

    let stored = RegistrationRepository::new(db)
        .get_by_id(registration.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, RegistrationStatus::Confirmed);
    assert!(!stored.confirmation_sent);

    Ok(())
}

/// Tests a registration-number collision is not reported as a duplicate
/// email.
///
/// Two concurrent inserts can compute the same sequence; seeding a row that
/// already carries the next number reproduces the collision. The unique
/// column rejects the insert, and the failure must surface as a database
/// error rather than the duplicate-email conflict.
///
/// Expected: Err(DbErr), not Conflict, with no second row created
#[tokio::test]
async fn number_collision_is_not_a_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .title("Workshop")
        .build()
        .await?;
    factory::registration::RegistrationFactory::new(db, event.id)
        .registration_number(format!("AEM-{}-WOR-000002", Utc::now().year()))
        .email("seeded@example.com")
        .build()
        .await?;

    let result = service(db)
        .register(event.id, participant("alice@example.com"), None)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(
        RegistrationRepository::new(db).count_by_event(event.id).await?,
        1
    );

    Ok(())
}

/// Tests the confirmation flag is set after a delivered notification.
///
/// The log-only dispatcher reports success, so the write-once flag must be
/// set exactly as it would be after a real delivery.
///
/// Expected: confirmation_sent true on the stored row
#[tokio::test]
async fn sets_confirmation_flag_after_delivery() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let registration = service(db)
        .register(event.id, participant("alice@example.com"), None)
        .await?;

    let stored = RegistrationRepository::new(db)
        .get_by_id(registration.id)
        .await?
        .unwrap();
    assert!(stored.confirmation_sent);

    Ok(())
}
