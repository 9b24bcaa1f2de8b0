//! Data access layer repositories.
//!
//! Repositories wrap the SeaORM entities with the queries the service layer
//! needs, organized by domain (users, catalog reference data, favorites).
//! They are generic over [`sea_orm::ConnectionTrait`] so they run equally
//! against a connection or an open transaction, and they return plain
//! [`sea_orm::DbErr`]; classifying constraint failures into the application
//! error taxonomy is the service layer's job.

pub mod catalog;
pub mod favorite;
pub mod user;
