use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::{
    data::{catalog::pokemon::PokemonRepository, favorite::FavoriteRepository},
    error::Error,
    model::{
        catalog::{NewPokemon, PokemonDto},
        favorite::FavoriteSubject,
    },
    service::catalog::validate_name,
};

/// Service for managing Pokémon reference data.
pub struct PokemonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokemonService<'a> {
    /// Creates a new instance of PokemonService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a Pokémon row; `name` is required, everything else optional.
    pub async fn create_pokemon(&self, new_pokemon: NewPokemon) -> Result<PokemonDto, Error> {
        validate_name("pokemon", &new_pokemon.name)?;

        let pokemon_repo = PokemonRepository::new(self.db);
        let pokemon = pokemon_repo.create(new_pokemon).await?;

        info!(pokemon_id = pokemon.id, name = %pokemon.name, "created pokemon");

        Ok(PokemonDto::from_model(pokemon, Vec::new()))
    }

    /// Retrieves a Pokémon in its serialized shape, favorites as ids.
    pub async fn get_pokemon(&self, pokemon_id: i32) -> Result<Option<PokemonDto>, Error> {
        let pokemon_repo = PokemonRepository::new(self.db);

        let pokemon = match pokemon_repo.get_by_id(pokemon_id).await? {
            Some(pokemon) => pokemon,
            None => return Ok(None),
        };

        let favorite_repo = FavoriteRepository::new(self.db);
        let favorite_ids = favorite_repo
            .get_by_subject(FavoriteSubject::Pokemon(pokemon.id))
            .await?
            .into_iter()
            .map(|favorite| favorite.id)
            .collect();

        Ok(Some(PokemonDto::from_model(pokemon, favorite_ids)))
    }

    /// Lists the whole Pokémon catalog in its serialized shape. Favorite
    /// ids are grouped from a single query rather than fetched per row.
    pub async fn get_all_pokemon(&self) -> Result<Vec<PokemonDto>, Error> {
        let pokemon_repo = PokemonRepository::new(self.db);
        let all = pokemon_repo.get_all().await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let mut favorites_by_subject: HashMap<i32, Vec<i32>> = HashMap::new();
        for favorite in favorite_repo
            .get_by_object_type(entity::favorite::ObjectType::Pokemon)
            .await?
        {
            favorites_by_subject
                .entry(favorite.object_id)
                .or_default()
                .push(favorite.id);
        }

        Ok(all
            .into_iter()
            .map(|pokemon| {
                let favorite_ids = favorites_by_subject
                    .remove(&pokemon.id)
                    .unwrap_or_default();
                PokemonDto::from_model(pokemon, favorite_ids)
            })
            .collect())
    }

    /// Deletes a Pokémon under restrict semantics.
    ///
    /// # Returns
    /// - `Ok(true)` - Pokémon deleted
    /// - `Ok(false)` - No Pokémon with this id
    /// - `Err(Error::ForeignKeyViolation)` - Favorites still reference the
    ///   row; nothing is deleted
    pub async fn delete_pokemon(&self, pokemon_id: i32) -> Result<bool, Error> {
        // Check and delete share one transaction so a favorite created in
        // between cannot be left dangling.
        let txn = self.db.begin().await?;

        let favorite_repo = FavoriteRepository::new(&txn);
        let references = favorite_repo
            .count_by_subject(FavoriteSubject::Pokemon(pokemon_id))
            .await?;

        if references > 0 {
            return Err(Error::ForeignKeyViolation(format!(
                "pokemon ID {} is still referenced by {} favorite(s)",
                pokemon_id, references
            )));
        }

        let pokemon_repo = PokemonRepository::new(&txn);
        let result = pokemon_repo.delete(pokemon_id).await?;
        txn.commit().await?;

        if result.rows_affected > 0 {
            info!(pokemon_id, "deleted pokemon");
        }

        Ok(result.rows_affected > 0)
    }
}
