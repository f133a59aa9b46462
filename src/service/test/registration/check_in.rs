use super::*;

/// Tests checking in a confirmed registration.
///
/// Expected: Ok with present status, timestamp, and acting user recorded
#[tokio::test]
async fn marks_present_with_actor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::app_user::create_user(db).await?;
    let event = factory::event::create_event(db).await?;

    let engine = service(db);
    let registration = engine
        .register(event.id, participant("alice@example.com"), None)
        .await?;

    let checked_in = engine.check_in(registration.id, Some(staff.id)).await?;

    assert!(checked_in.is_present);
    assert!(checked_in.checked_in);
    assert_eq!(checked_in.status, "present");
    assert!(checked_in.checked_in_at.is_some());
    assert_eq!(checked_in.checked_in_by, Some(staff.id));

    Ok(())
}

/// Tests checking in a waitlisted participant.
///
/// Walking up on the day still counts; only cancelled and already-present
/// registrations are refused.
///
/// Expected: Ok with present status
#[tokio::test]
async fn checks_in_waitlisted_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;
    let registration = factory::registration::RegistrationFactory::new(db, event.id)
        .status(RegistrationStatus::Waitlist)
        .build()
        .await?;

    let checked_in = service(db).check_in(registration.id, None).await?;

    assert!(checked_in.is_present);

    Ok(())
}

/// Tests double check-in.
///
/// Expected: Err(BadRequest) with the original check-in untouched
#[tokio::test]
async fn rejects_double_check_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let engine = service(db);
    let registration = engine
        .register(event.id, participant("alice@example.com"), None)
        .await?;
    let first = engine.check_in(registration.id, None).await?;

    let result = engine.check_in(registration.id, None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = RegistrationRepository::new(db)
        .get_by_id(registration.id)
        .await?
        .unwrap();
    assert_eq!(stored.checked_in_at, first.checked_in_at);

    Ok(())
}

/// Tests checking in a cancelled registration.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_cancelled_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let engine = service(db);
    let registration = engine
        .register(event.id, participant("alice@example.com"), None)
        .await?;
    engine.cancel(registration.id, None).await?;

    let result = engine.check_in(registration.id, None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests checking in a non-existent registration.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_nonexistent_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = service(db).check_in(999999, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
