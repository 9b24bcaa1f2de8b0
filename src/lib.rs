//! Persistence core for the favorites application.
//!
//! This crate owns the model layer of a small web application where users
//! mark Pokémon or Items as favorites. It provides repositories over the
//! four schema tables, services enforcing the application-level invariants
//! (uniqueness classification, polymorphic subject resolution, password
//! hashing), and the serialized DTO shapes consumed by the embedding API
//! layer. HTTP routing, sessions, and connection management live in that
//! outer layer, which hands this crate a [`sea_orm::DatabaseConnection`].

pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod util;
