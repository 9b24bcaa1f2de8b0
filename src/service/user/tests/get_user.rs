use super::*;

/// Expect Ok(Some) with favorites listed as ids
#[tokio::test]
async fn returns_user_with_favorite_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user_model = test.user().insert_user(TEST_EMAIL, TEST_USER_NAME).await?;
    let pokemon_model = test.catalog().insert_pokemon("Pikachu").await?;
    let item_model = test.catalog().insert_item("Potion").await?;
    let first = test
        .favorite()
        .insert_pokemon_favorite(user_model.id, pokemon_model.id)
        .await?;
    let second = test
        .favorite()
        .insert_item_favorite(user_model.id, item_model.id)
        .await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.get_user(user_model.id).await;

    assert!(result.is_ok());
    let user = result.unwrap().expect("user should exist");
    assert_eq!(user.favorites, vec![first.id, second.id]);

    Ok(())
}

/// Expect Ok(None) for user ID that does not exist
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let nonexistent_user_id = 1;
    let user_service = UserService::new(&test.db);
    let result = user_service.get_user(nonexistent_user_id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}

/// Expect identical output when serializing the same unmutated record twice
#[tokio::test]
async fn serialization_is_repeatable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user_model = test.user().insert_user(TEST_EMAIL, TEST_USER_NAME).await?;

    let user_service = UserService::new(&test.db);
    let first: Option<UserDto> = user_service.get_user(user_model.id).await.unwrap();
    let second: Option<UserDto> = user_service.get_user(user_model.id).await.unwrap();

    assert_eq!(first, second);

    Ok(())
}

/// Expect Error when required tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.get_user(1).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
