//! SeaORM entity definitions for the favorites application schema.

pub mod prelude;

pub mod favorite;
pub mod item;
pub mod pokemon;
pub mod user;
