use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::model::catalog::NewItem;

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_item: NewItem) -> Result<entity::item::Model, DbErr> {
        let item = entity::item::ActiveModel {
            name: ActiveValue::Set(new_item.name),
            attributes: ActiveValue::Set(new_item.attributes),
            category: ActiveValue::Set(new_item.category),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    pub async fn get_by_id(&self, item_id: i32) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(item_id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes an item row.
    ///
    /// Restrict semantics against dangling favorites are enforced by the
    /// service layer before this is called.
    pub async fn delete(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Item::delete_by_id(item_id)
            .exec(self.db)
            .await
    }
}
