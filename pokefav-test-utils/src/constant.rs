//! Standard values shared across test fixtures.

pub static TEST_EMAIL: &str = "a@b.com";
pub static TEST_USER_NAME: &str = "alice";
pub static TEST_PASSWORD: &str = "correct horse battery";

/// A syntactically valid bcrypt hash used as the stored value for fixture
/// users. It does not correspond to [`TEST_PASSWORD`]; credential checks in
/// tests go through the registration path so the hash is real.
pub static TEST_PASSWORD_HASH: &str =
    "$2a$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";
