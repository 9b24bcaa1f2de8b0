use sea_orm::entity::prelude::*;

/// Pokémon reference data. Rows are independently owned; favorites point at
/// them through the polymorphic pair on the `favorites` table, so no
/// database-level relation exists here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub ability: Option<String>,
    pub base_experience: Option<i32>,
    pub generation: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
