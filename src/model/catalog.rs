use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Serialized Pokémon record, including the ids of favorites pointing at it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonDto {
    pub id: i32,
    pub name: String,
    pub ability: Option<String>,
    pub base_experience: Option<i32>,
    pub generation: Option<String>,
    pub created_at: NaiveDateTime,
    pub favorites: Vec<i32>,
}

impl PokemonDto {
    pub fn from_model(pokemon: entity::pokemon::Model, favorite_ids: Vec<i32>) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name,
            ability: pokemon.ability,
            base_experience: pokemon.base_experience,
            generation: pokemon.generation,
            created_at: pokemon.created_at,
            favorites: favorite_ids,
        }
    }
}

/// Serialized item record, including the ids of favorites pointing at it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub attributes: Option<String>,
    pub category: Option<String>,
    pub created_at: NaiveDateTime,
    pub favorites: Vec<i32>,
}

impl ItemDto {
    pub fn from_model(item: entity::item::Model, favorite_ids: Vec<i32>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            attributes: item.attributes,
            category: item.category,
            created_at: item.created_at,
            favorites: favorite_ids,
        }
    }
}

/// Fields for creating a Pokémon row.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewPokemon {
    pub name: String,
    pub ability: Option<String>,
    pub base_experience: Option<i32>,
    pub generation: Option<String>,
}

/// Fields for creating an item row.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub attributes: Option<String>,
    pub category: Option<String>,
}
