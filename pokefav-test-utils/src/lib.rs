//! Test utilities for the favorites persistence core.
//!
//! Provides a declarative [`TestBuilder`] producing a [`TestContext`] backed
//! by an in-memory SQLite database, plus fixtures for inserting the four
//! entity types during test execution.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_PASSWORD, TEST_PASSWORD_HASH, TEST_USER_NAME},
        TestBuilder, TestContext, TestError,
    };
}
