use thiserror::Error;

/// Input validation failures, reported before anything touches the database.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was missing or empty.
    #[error("Missing required field `{field}` on {entity}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    /// Password length falls outside the bounds bcrypt can hash safely.
    #[error("Password must be between {min} and {max} bytes, got {actual}")]
    PasswordLength {
        min: usize,
        max: usize,
        actual: usize,
    },
}
