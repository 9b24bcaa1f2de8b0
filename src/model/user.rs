use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Serialized user record.
///
/// The password hash is deliberately absent: it never leaves this crate.
/// `favorites` holds the ids of the user's favorite rows, queried through
/// the back-reference rather than eager-loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub user_name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub favorites: Vec<i32>,
}

impl UserDto {
    /// Projects a user row plus its back-referenced favorite ids.
    pub fn from_model(user: entity::user::Model, favorite_ids: Vec<i32>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            user_name: user.user_name,
            is_active: user.is_active,
            created_at: user.created_at,
            favorites: favorite_ids,
        }
    }
}

/// Fields required to register a new user.
#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub user_name: String,
    /// Plain password; hashed before anything is persisted.
    pub password: String,
}
