//! Catalog reference data repositories.
//!
//! Pokémon and items are independently owned reference data; favorites point
//! at them through the polymorphic pair on the `favorites` table rather than
//! a schema-level foreign key.

pub mod item;
pub mod pokemon;
