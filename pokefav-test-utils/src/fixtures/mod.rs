//! Fixture utilities for inserting test rows.
//!
//! Each fixture inserts directly through the entity layer, bypassing the
//! services under test:
//!
//! - `user` - user accounts with a fixed stored hash
//! - `catalog` - Pokémon and item reference data
//! - `favorite` - favorites rows, including deliberately dangling ones

pub mod catalog;
pub mod favorite;
pub mod user;
