use super::*;

use sea_orm::{EntityTrait, PaginatorTrait};

/// Expect Added then Removed when toggling the same subject twice
#[tokio::test]
async fn toggle_adds_then_removes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user_model = test.user().insert_user(TEST_EMAIL, TEST_USER_NAME).await?;
    let pokemon_model = test.catalog().insert_pokemon("Pikachu").await?;
    let subject = FavoriteSubject::Pokemon(pokemon_model.id);

    let favorite_service = FavoriteService::new(&test.db);

    let first = favorite_service
        .toggle_favorite(user_model.id, subject)
        .await
        .unwrap();
    let favorite = match first {
        FavoriteToggle::Added(favorite) => favorite,
        FavoriteToggle::Removed(_) => panic!("first toggle should add"),
    };

    let second = favorite_service
        .toggle_favorite(user_model.id, subject)
        .await
        .unwrap();
    assert_eq!(second, FavoriteToggle::Removed(favorite.id));

    let count = entity::prelude::Favorite::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Expect toggles on different subjects to be independent
#[tokio::test]
async fn toggle_is_per_subject() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user_model = test.user().insert_user(TEST_EMAIL, TEST_USER_NAME).await?;
    let pokemon_model = test.catalog().insert_pokemon("Pikachu").await?;
    let item_model = test.catalog().insert_item("Potion").await?;

    let favorite_service = FavoriteService::new(&test.db);

    let pokemon_toggle = favorite_service
        .toggle_favorite(user_model.id, FavoriteSubject::Pokemon(pokemon_model.id))
        .await
        .unwrap();
    let item_toggle = favorite_service
        .toggle_favorite(user_model.id, FavoriteSubject::Item(item_model.id))
        .await
        .unwrap();

    assert!(matches!(pokemon_toggle, FavoriteToggle::Added(_)));
    assert!(matches!(item_toggle, FavoriteToggle::Added(_)));

    let favorites = favorite_service
        .get_user_favorites(user_model.id)
        .await
        .unwrap();
    assert_eq!(favorites.len(), 2);

    Ok(())
}

/// Expect Unresolved when toggling on a subject that does not exist
#[tokio::test]
async fn toggle_fails_for_unresolvable_subject() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    let user_model = test.user().insert_user(TEST_EMAIL, TEST_USER_NAME).await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service
        .toggle_favorite(user_model.id, FavoriteSubject::Item(1))
        .await;

    assert!(matches!(
        result,
        Err(Error::Favorite(FavoriteError::Unresolved { .. }))
    ));

    Ok(())
}
