use super::*;

/// Tests marking a registration cancelled.
///
/// Expected: Ok with status, timestamp, and reason recorded
#[tokio::test]
async fn marks_cancelled_with_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_event, registration) = factory::helpers::create_event_with_registration(db).await?;

    let now = Utc::now();
    let repo = RegistrationRepository::new(db);
    let cancelled = repo
        .mark_cancelled(registration, Some("Schedule conflict".to_string()), now)
        .await?;

    assert_eq!(cancelled.status, RegistrationStatus::Cancelled);
    assert_eq!(cancelled.cancelled_at, Some(now));
    assert_eq!(
        cancelled.cancellation_reason,
        Some("Schedule conflict".to_string())
    );

    Ok(())
}

/// Tests marking a registration as checked in.
///
/// Expected: Ok with present status, timestamp, and actor recorded
#[tokio::test]
async fn marks_checked_in_with_actor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::app_user::create_user(db).await?;
    let (_event, registration) = factory::helpers::create_event_with_registration(db).await?;

    let now = Utc::now();
    let repo = RegistrationRepository::new(db);
    let checked_in = repo
        .mark_checked_in(registration, Some(user.id), now)
        .await?;

    assert_eq!(checked_in.status, RegistrationStatus::Present);
    assert_eq!(checked_in.checked_in_at, Some(now));
    assert_eq!(checked_in.checked_in_by, Some(user.id));

    Ok(())
}

/// Tests promoting a waitlisted registration.
///
/// Expected: Ok with confirmed status and other fields untouched
#[tokio::test]
async fn marks_waitlisted_confirmed() -> Result<(), DbErr> {
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
    let number = registration.registration_number.clone();

    let repo = RegistrationRepository::new(db);
    let confirmed = repo.mark_confirmed(registration).await?;

    assert_eq!(confirmed.status, RegistrationStatus::Confirmed);
    assert_eq!(confirmed.registration_number, number);
    assert!(confirmed.cancelled_at.is_none());

    Ok(())
}
