//! Catalog services for Pokémon and item reference data.
//!
//! Both services apply the same rules: `name` is required, reads include the
//! ids of favorites pointing at the row, and deletion is RESTRICTed while
//! any favorite still references it (the polymorphic pair has no
//! storage-level foreign key, so the check lives here).

pub mod item;
pub mod pokemon;

use crate::error::{validation::ValidationError, Error};

fn validate_name(entity: &'static str, name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField {
            entity,
            field: "name",
        }
        .into());
    }

    Ok(())
}
