use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::{
    data::{catalog::item::ItemRepository, favorite::FavoriteRepository},
    error::Error,
    model::{
        catalog::{ItemDto, NewItem},
        favorite::FavoriteSubject,
    },
    service::catalog::validate_name,
};

/// Service for managing item reference data.
pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    /// Creates a new instance of ItemService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an item row; `name` is required, everything else optional.
    pub async fn create_item(&self, new_item: NewItem) -> Result<ItemDto, Error> {
        validate_name("item", &new_item.name)?;

        let item_repo = ItemRepository::new(self.db);
        let item = item_repo.create(new_item).await?;

        info!(item_id = item.id, name = %item.name, "created item");

        Ok(ItemDto::from_model(item, Vec::new()))
    }

    /// Retrieves an item in its serialized shape, favorites as ids.
    pub async fn get_item(&self, item_id: i32) -> Result<Option<ItemDto>, Error> {
        let item_repo = ItemRepository::new(self.db);

        let item = match item_repo.get_by_id(item_id).await? {
            Some(item) => item,
            None => return Ok(None),
        };

        let favorite_repo = FavoriteRepository::new(self.db);
        let favorite_ids = favorite_repo
            .get_by_subject(FavoriteSubject::Item(item.id))
            .await?
            .into_iter()
            .map(|favorite| favorite.id)
            .collect();

        Ok(Some(ItemDto::from_model(item, favorite_ids)))
    }

    /// Lists the whole item catalog in its serialized shape. Favorite ids
    /// are grouped from a single query rather than fetched per row.
    pub async fn get_all_items(&self) -> Result<Vec<ItemDto>, Error> {
        let item_repo = ItemRepository::new(self.db);
        let all = item_repo.get_all().await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let mut favorites_by_subject: HashMap<i32, Vec<i32>> = HashMap::new();
        for favorite in favorite_repo
            .get_by_object_type(entity::favorite::ObjectType::Item)
            .await?
        {
            favorites_by_subject
                .entry(favorite.object_id)
                .or_default()
                .push(favorite.id);
        }

        Ok(all
            .into_iter()
            .map(|item| {
                let favorite_ids = favorites_by_subject.remove(&item.id).unwrap_or_default();
                ItemDto::from_model(item, favorite_ids)
            })
            .collect())
    }

    /// Deletes an item under restrict semantics.
    ///
    /// # Returns
    /// - `Ok(true)` - Item deleted
    /// - `Ok(false)` - No item with this id
    /// - `Err(Error::ForeignKeyViolation)` - Favorites still reference the
    ///   row; nothing is deleted
    pub async fn delete_item(&self, item_id: i32) -> Result<bool, Error> {
        // Check and delete share one transaction so a favorite created in
        // between cannot be left dangling.
        let txn = self.db.begin().await?;

        let favorite_repo = FavoriteRepository::new(&txn);
        let references = favorite_repo
            .count_by_subject(FavoriteSubject::Item(item_id))
            .await?;

        if references > 0 {
            return Err(Error::ForeignKeyViolation(format!(
                "item ID {} is still referenced by {} favorite(s)",
                item_id, references
            )));
        }

        let item_repo = ItemRepository::new(&txn);
        let result = item_repo.delete(item_id).await?;
        txn.commit().await?;

        if result.rows_affected > 0 {
            info!(item_id, "deleted item");
        }

        Ok(result.rows_affected > 0)
    }
}
