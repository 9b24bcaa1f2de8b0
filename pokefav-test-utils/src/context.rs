//! Test context: an in-memory database plus fixture accessors.

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection,
};

use crate::{
    error::TestError,
    fixtures::{catalog::CatalogFixture, favorite::FavoriteFixture, user::UserFixture},
};

/// Test environment produced by [`crate::TestBuilder`].
///
/// Holds the connection to a private in-memory SQLite database. Fixture
/// accessors (`user()`, `catalog()`, `favorite()`) insert rows directly,
/// bypassing the service layer, so tests control the starting state exactly.
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// User fixture helpers.
    pub fn user(&self) -> UserFixture<'_> {
        UserFixture::new(&self.db)
    }

    /// Pokémon and item fixture helpers.
    pub fn catalog(&self) -> CatalogFixture<'_> {
        CatalogFixture::new(&self.db)
    }

    /// Favorite fixture helpers.
    pub fn favorite(&self) -> FavoriteFixture<'_> {
        FavoriteFixture::new(&self.db)
    }
}
