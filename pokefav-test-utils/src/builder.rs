//! Declarative builder for test environments.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test initialization.
///
/// Queues table creation statements and executes them against a fresh
/// in-memory SQLite database during the final `build()` call.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_core_tables: bool,
}

impl TestBuilder {
    /// Creates a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_core_tables: false,
        }
    }

    /// Adds the four application tables: user, pokemon, item, favorites.
    pub fn with_core_tables(mut self) -> Self {
        self.include_core_tables = true;
        self
    }

    /// Adds a single entity table, for tests that want a partial schema.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connects the in-memory database and creates the queued tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut stmts = Vec::new();
        if self.include_core_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            // user before favorites, for the foreign key
            stmts.push(schema.create_table_from_entity(entity::prelude::User));
            stmts.push(schema.create_table_from_entity(entity::prelude::Pokemon));
            stmts.push(schema.create_table_from_entity(entity::prelude::Item));
            stmts.push(schema.create_table_from_entity(entity::prelude::Favorite));
        }
        stmts.extend(self.tables);

        context.with_tables(stmts).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
