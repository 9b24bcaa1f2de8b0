mod get_user;
mod verify_credentials;

use pokefav_test_utils::prelude::*;

use crate::{
    error::Error,
    model::user::{NewUser, UserDto},
    service::user::UserService,
};

/// Registration input with valid test values.
fn new_user() -> NewUser {
    NewUser {
        email: TEST_EMAIL.to_string(),
        user_name: TEST_USER_NAME.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}
