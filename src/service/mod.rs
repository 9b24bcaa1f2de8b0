//! Business logic services.
//!
//! Services sit between the repositories and the embedding API layer. They
//! own the rules the storage schema cannot express: input validation,
//! password hashing, classification of constraint failures into the
//! application error taxonomy, polymorphic subject resolution, and the
//! projection of rows into serialized DTOs.

pub mod catalog;
pub mod favorite;
pub mod user;
