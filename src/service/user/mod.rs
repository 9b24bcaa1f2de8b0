//! User account services.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::{validation::ValidationError, Error},
    model::user::{NewUser, UserDto},
    util::password,
};

/// Service for managing user accounts.
///
/// Registration hashes passwords before anything touches storage and relies
/// on the database's unique indexes over `email` and `user_name` to settle
/// concurrent registrations atomically; duplicates surface as
/// [`Error::UniqueConstraintViolation`].
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User created; the DTO carries no favorites yet
    /// - `Err(Error::Validation)` - A required field was empty or the
    ///   password length is out of bounds
    /// - `Err(Error::UniqueConstraintViolation)` - Duplicate email or
    ///   user_name; no row was inserted
    pub async fn create_user(&self, new_user: NewUser) -> Result<UserDto, Error> {
        validate_required("email", &new_user.email)?;
        validate_required("user_name", &new_user.user_name)?;
        validate_required("password", &new_user.password)?;
        password::validate_password(&new_user.password)?;

        let password_hash = password::hash_password(&new_user.password)?;

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .create(&new_user.email, &password_hash, &new_user.user_name)
            .await?;

        info!(user_id = user.id, user_name = %user.user_name, "created user");

        Ok(UserDto::from_model(user, Vec::new()))
    }

    /// Retrieves a user in its serialized shape.
    ///
    /// The `favorites` field is filled from the back-reference query over
    /// the `favorites` table; related rows are represented by id only.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - No user with this id
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = match user_repo.get_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let favorite_ids = self.favorite_ids(user.id).await?;

        Ok(Some(UserDto::from_model(user, favorite_ids)))
    }

    /// Checks a plain password against the stored hash for an email.
    ///
    /// The surrounding API layer builds its login endpoint on this; session
    /// handling stays out of this crate.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - Credentials match an active account
    /// - `Ok(None)` - Unknown email, wrong password, or deactivated account
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        // Always run exactly one bcrypt verification; unknown-email and
        // inactive-account misses compare against a dummy hash so they cost
        // the same as a wrong password.
        let candidate = match user_repo.get_by_email(email).await? {
            Some(user) if user.is_active => Some(user),
            _ => None,
        };
        let stored_hash = candidate
            .as_ref()
            .map_or(password::NO_MATCH_HASH, |user| user.password_hash.as_str());
        let matches = password::verify_password(password, stored_hash)?;

        let user = match candidate {
            Some(user) if matches => user,
            _ => {
                debug!(email, "credential check failed");
                return Ok(None);
            }
        };

        let favorite_ids = self.favorite_ids(user.id).await?;

        Ok(Some(UserDto::from_model(user, favorite_ids)))
    }

    /// Deletes a user; their favorites go with them via the storage-level
    /// cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with this id
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);
        let result = user_repo.delete(user_id).await?;

        if result.rows_affected > 0 {
            info!(user_id, "deleted user");
        }

        Ok(result.rows_affected > 0)
    }

    async fn favorite_ids(&self, user_id: i32) -> Result<Vec<i32>, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);
        let favorites = favorite_repo.get_by_user(user_id).await?;

        Ok(favorites.into_iter().map(|favorite| favorite.id).collect())
    }
}

fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField {
            entity: "user",
            field,
        });
    }

    Ok(())
}
