use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, model::UserModel};

pub struct UserFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixture<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user row with the standard stored hash and `is_active` set.
    pub async fn insert_user(&self, email: &str, user_name: &str) -> Result<UserModel, TestError> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            is_active: ActiveValue::Set(true),
            user_name: ActiveValue::Set(user_name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    /// Inserts a deactivated user row.
    pub async fn insert_inactive_user(
        &self,
        email: &str,
        user_name: &str,
    ) -> Result<UserModel, TestError> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            is_active: ActiveValue::Set(false),
            user_name: ActiveValue::Set(user_name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }
}

/// Creates an in-memory user model without touching the database, suitable
/// for pure serialization tests.
pub fn mock_user_model(id: i32, email: &str, user_name: &str) -> UserModel {
    UserModel {
        id,
        email: email.to_string(),
        password_hash: TEST_PASSWORD_HASH.to_string(),
        is_active: true,
        user_name: user_name.to_string(),
        created_at: Utc::now().naive_utc(),
    }
}
