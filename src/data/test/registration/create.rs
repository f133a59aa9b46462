use super::*;

/// Tests creating a registration.
///
/// Verifies that participant fields are stored and the notification flags
/// start unset.
///
/// Expected: Ok with registration created
#[tokio::test]
async fn creates_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let repo = RegistrationRepository::new(db);
    let result = repo
        .create(CreateRegistrationParams {
            event_id: event.id,
            user_id: None,
            registration_number: "AEM-2026-WEL-000001".to_string(),
            status: RegistrationStatus::Confirmed,
            participant: participant("Alice", "Martin", "alice@example.com"),
        })
        .await;

    assert!(result.is_ok());
    let registration = result.unwrap();
    assert_eq!(registration.event_id, event.id);
    assert_eq!(registration.registration_number, "AEM-2026-WEL-000001");
    assert_eq!(registration.first_name, "Alice");
    assert_eq!(registration.email, "alice@example.com");
    assert_eq!(registration.status, RegistrationStatus::Confirmed);
    assert!(!registration.confirmation_sent);
    assert!(!registration.reminder_week_sent);
    assert!(!registration.reminder_day_sent);
    assert!(!registration.reminder_day_of_sent);
    assert!(registration.checked_in_at.is_none());
    assert!(registration.cancelled_at.is_none());

    Ok(())
}

/// Tests storing custom question answers.
///
/// Expected: Ok with the JSON answers persisted
#[tokio::test]
async fn stores_custom_answers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let mut dto = participant("Bob", "Durand", "bob@example.com");
    dto.custom_answers = Some(serde_json::json!({ "t_shirt_size": "M" }));

    let repo = RegistrationRepository::new(db);
    let registration = repo
        .create(CreateRegistrationParams {
            event_id: event.id,
            user_id: None,
            registration_number: "AEM-2026-WEL-000002".to_string(),
            status: RegistrationStatus::Waitlist,
            participant: dto,
        })
        .await?;

    assert_eq!(
        registration.custom_answers,
        Some(serde_json::json!({ "t_shirt_size": "M" }))
    );

    Ok(())
}

/// Tests the unique constraint on the registration number.
///
/// Expected: Err(DbErr) on the second insert with the same number
#[tokio::test]
async fn rejects_duplicate_registration_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let repo = RegistrationRepository::new(db);
    repo.create(CreateRegistrationParams {
        event_id: event.id,
        user_id: None,
        registration_number: "AEM-2026-WEL-000001".to_string(),
        status: RegistrationStatus::Confirmed,
        participant: participant("Alice", "Martin", "alice@example.com"),
    })
    .await?;

    let result = repo
        .create(CreateRegistrationParams {
            event_id: event.id,
            user_id: None,
            registration_number: "AEM-2026-WEL-000001".to_string(),
            status: RegistrationStatus::Confirmed,
            participant: participant("Bob", "Durand", "bob@example.com"),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the foreign key constraint on event_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegistrationRepository::new(db);
    let result = repo
        .create(CreateRegistrationParams {
            event_id: 999999,
            user_id: None,
            registration_number: "AEM-2026-XXX-000001".to_string(),
            status: RegistrationStatus::Confirmed,
            participant: participant("Alice", "Martin", "alice@example.com"),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
