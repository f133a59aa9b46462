use super::*;

/// Tests finding an identity user by ID.
///
/// Expected: Ok(Some) for an existing user, Ok(None) otherwise
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::app_user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    assert!(repo.find_by_id(999999).await?.is_none());

    Ok(())
}

/// Tests finding an identity user by email.
///
/// Expected: Ok(Some) for a known email, Ok(None) otherwise
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::app_user::UserFactory::new(db)
        .email("member@aem.example")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("member@aem.example").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    assert!(repo.find_by_email("ghost@aem.example").await?.is_none());

    Ok(())
}
