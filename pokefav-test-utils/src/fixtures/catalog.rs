use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    error::TestError,
    model::{ItemModel, PokemonModel},
};

pub struct CatalogFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogFixture<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a Pokémon row with only the required name set.
    pub async fn insert_pokemon(&self, name: &str) -> Result<PokemonModel, TestError> {
        let pokemon = entity::pokemon::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(pokemon.insert(self.db).await?)
    }

    /// Inserts a Pokémon row with all optional fields populated.
    pub async fn insert_pokemon_full(
        &self,
        name: &str,
        ability: &str,
        base_experience: i32,
        generation: &str,
    ) -> Result<PokemonModel, TestError> {
        let pokemon = entity::pokemon::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ability: ActiveValue::Set(Some(ability.to_string())),
            base_experience: ActiveValue::Set(Some(base_experience)),
            generation: ActiveValue::Set(Some(generation.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(pokemon.insert(self.db).await?)
    }

    /// Inserts an item row with only the required name set.
    pub async fn insert_item(&self, name: &str) -> Result<ItemModel, TestError> {
        let item = entity::item::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(item.insert(self.db).await?)
    }
}
