use super::*;

/// Tests retrieving an event by ID.
///
/// Expected: Ok(Some(event))
#[tokio::test]
async fn returns_event_when_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .title("Career Fair")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let result = repo.get_by_id(event.id).await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().title, "Career Fair");

    Ok(())
}

/// Tests retrieving a non-existent event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let result = repo.get_by_id(999999).await?;

    assert!(result.is_none());

    Ok(())
}
