use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::model::catalog::NewPokemon;

pub struct PokemonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokemonRepository<'a, C> {
    /// Creates a new instance of [`PokemonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_pokemon: NewPokemon) -> Result<entity::pokemon::Model, DbErr> {
        let pokemon = entity::pokemon::ActiveModel {
            name: ActiveValue::Set(new_pokemon.name),
            ability: ActiveValue::Set(new_pokemon.ability),
            base_experience: ActiveValue::Set(new_pokemon.base_experience),
            generation: ActiveValue::Set(new_pokemon.generation),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        pokemon.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        pokemon_id: i32,
    ) -> Result<Option<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find_by_id(pokemon_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .order_by_asc(entity::pokemon::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a Pokémon row.
    ///
    /// Restrict semantics against dangling favorites are enforced by the
    /// service layer before this is called.
    pub async fn delete(&self, pokemon_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pokemon::delete_by_id(pokemon_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use pokefav_test_utils::prelude::*;

        use crate::{data::catalog::pokemon::PokemonRepository, model::catalog::NewPokemon};

        /// Expect success when creating a Pokémon with only a name
        #[tokio::test]
        async fn creates_pokemon_with_optional_fields_absent() -> Result<(), TestError> {
            let test = TestBuilder::new().with_core_tables().build().await?;

            let pokemon_repo = PokemonRepository::new(&test.db);
            let result = pokemon_repo
                .create(NewPokemon {
                    name: "Pikachu".to_string(),
                    ..Default::default()
                })
                .await;

            assert!(result.is_ok());
            let pokemon = result.unwrap();
            assert_eq!(pokemon.name, "Pikachu");
            assert!(pokemon.ability.is_none());
            assert!(pokemon.base_experience.is_none());
            assert!(pokemon.generation.is_none());

            Ok(())
        }

        /// Expect Error when required tables have not been created
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let pokemon_repo = PokemonRepository::new(&test.db);
            let result = pokemon_repo
                .create(NewPokemon {
                    name: "Pikachu".to_string(),
                    ..Default::default()
                })
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get {
        use pokefav_test_utils::prelude::*;

        use crate::data::catalog::pokemon::PokemonRepository;

        /// Expect Ok(Some(_)) when existing Pokémon is found
        #[tokio::test]
        async fn finds_existing_pokemon() -> Result<(), TestError> {
            let test = TestBuilder::new().with_core_tables().build().await?;
            let pokemon_model = test.catalog().insert_pokemon("Pikachu").await?;

            let pokemon_repo = PokemonRepository::new(&test.db);
            let result = pokemon_repo.get_by_id(pokemon_model.id).await?;

            assert_eq!(result, Some(pokemon_model));

            Ok(())
        }

        /// Expect Ok(None) when Pokémon is not found
        #[tokio::test]
        async fn returns_none_for_nonexistent_pokemon() -> Result<(), TestError> {
            let test = TestBuilder::new().with_core_tables().build().await?;

            let pokemon_repo = PokemonRepository::new(&test.db);
            let result = pokemon_repo.get_by_id(1).await?;

            assert!(result.is_none());

            Ok(())
        }

        /// Expect all rows in insertion order
        #[tokio::test]
        async fn lists_all_pokemon() -> Result<(), TestError> {
            let test = TestBuilder::new().with_core_tables().build().await?;
            test.catalog().insert_pokemon("Bulbasaur").await?;
            test.catalog().insert_pokemon("Charmander").await?;

            let pokemon_repo = PokemonRepository::new(&test.db);
            let all = pokemon_repo.get_all().await?;

            assert_eq!(all.len(), 2);
            assert_eq!(all[0].name, "Bulbasaur");
            assert_eq!(all[1].name, "Charmander");

            Ok(())
        }
    }

    mod delete {
        use pokefav_test_utils::prelude::*;

        use crate::data::catalog::pokemon::PokemonRepository;

        /// Expect success when deleting Pokémon
        #[tokio::test]
        async fn deletes_existing_pokemon() -> Result<(), TestError> {
            let test = TestBuilder::new().with_core_tables().build().await?;
            let pokemon_model = test.catalog().insert_pokemon("Pikachu").await?;

            let pokemon_repo = PokemonRepository::new(&test.db);
            let result = pokemon_repo.delete(pokemon_model.id).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 1);

            Ok(())
        }

        /// Expect no rows affected when deleting Pokémon that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_pokemon() -> Result<(), TestError> {
            let test = TestBuilder::new().with_core_tables().build().await?;

            let pokemon_repo = PokemonRepository::new(&test.db);
            let result = pokemon_repo.delete(1).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 0);

            Ok(())
        }
    }
}
