use sea_orm::entity::prelude::*;

/// A user's favorite, pointing at either a Pokémon or an Item.
///
/// The subject is a polymorphic reference: `object_type` names the target
/// table and `object_id` the row within it. The database cannot enforce that
/// pair as a foreign key, so resolution is checked at the application layer
/// on every write.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub object_id: i32,
    pub object_type: ObjectType,
    pub created_at: DateTime,
}

/// Discriminator for the polymorphic subject reference.
///
/// Serialized to the database and over the wire as the lowercase strings
/// `"pokemon"` and `"item"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ObjectType {
    #[sea_orm(string_value = "pokemon")]
    Pokemon,
    #[sea_orm(string_value = "item")]
    Item,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // Favorites are owned by their user, so removing the user removes them.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
