use chrono::Utc;
use entity::favorite::ObjectType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{error::TestError, model::FavoriteModel};

pub struct FavoriteFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteFixture<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a favorite pointing at a Pokémon row.
    ///
    /// The user must exist (the foreign key is enforced); the subject is not
    /// checked here, so tests can create dangling references on purpose.
    pub async fn insert_pokemon_favorite(
        &self,
        user_id: i32,
        pokemon_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert(user_id, ObjectType::Pokemon, pokemon_id).await
    }

    /// Inserts a favorite pointing at an item row.
    pub async fn insert_item_favorite(
        &self,
        user_id: i32,
        item_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert(user_id, ObjectType::Item, item_id).await
    }

    async fn insert(
        &self,
        user_id: i32,
        object_type: ObjectType,
        object_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            object_id: ActiveValue::Set(object_id),
            object_type: ActiveValue::Set(object_type),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(favorite.insert(self.db).await?)
    }
}
