//! Serialized shapes shared with the embedding API layer.
//!
//! Every DTO here is a pure projection of a persisted record: field name to
//! JSON-compatible value, timestamps as ISO-8601 text, and related rows as
//! sequences of ids rather than nested objects. Projecting the same
//! unmutated record twice yields identical output.

pub mod catalog;
pub mod favorite;
pub mod user;
