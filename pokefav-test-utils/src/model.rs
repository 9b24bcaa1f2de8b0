//! Database model type aliases used throughout the test utilities.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the Pokémon database model.
pub type PokemonModel = entity::pokemon::Model;

/// Type alias for the item database model.
pub type ItemModel = entity::item::Model;

/// Type alias for the favorite database model.
pub type FavoriteModel = entity::favorite::Model;
