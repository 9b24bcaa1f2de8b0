//! Favorite services: creation, toggling, and polymorphic resolution.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{debug, info};

use crate::{
    data::{
        catalog::{item::ItemRepository, pokemon::PokemonRepository},
        favorite::FavoriteRepository,
    },
    error::{favorite::FavoriteError, Error},
    model::favorite::{FavoriteDto, FavoriteSubject, FavoriteToggle, ResolvedSubject},
};

/// Service for managing favorites and their polymorphic subject.
///
/// The `(object_type, object_id)` pair cannot be covered by a storage-level
/// foreign key, so this service is the single place where the reference is
/// resolved: a 2-way dispatch to the Pokémon or item repository. Writes
/// check resolution up front; reads treat a dangling reference as data
/// corruption and fail hard.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a favorite after checking both invariants: the subject must
    /// resolve, and the user must exist (enforced by the foreign key and
    /// classified as [`Error::ForeignKeyViolation`]).
    pub async fn create_favorite(
        &self,
        user_id: i32,
        subject: FavoriteSubject,
    ) -> Result<FavoriteDto, Error> {
        let txn = self.db.begin().await?;
        let favorite = Self::insert_resolved(&txn, user_id, subject).await?;
        txn.commit().await?;

        info!(favorite_id = favorite.id, user_id, "created favorite");

        Ok(FavoriteDto::from(favorite))
    }

    /// The favorites-toggle primitive: removes the user's existing favorite
    /// on the subject, or creates one if none exists.
    pub async fn toggle_favorite(
        &self,
        user_id: i32,
        subject: FavoriteSubject,
    ) -> Result<FavoriteToggle, Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        if let Some(existing) = favorite_repo
            .find_by_user_and_subject(user_id, subject)
            .await?
        {
            favorite_repo.delete(existing.id).await?;
            txn.commit().await?;
            info!(favorite_id = existing.id, user_id, "removed favorite");

            return Ok(FavoriteToggle::Removed(existing.id));
        }

        let favorite = Self::insert_resolved(&txn, user_id, subject).await?;
        txn.commit().await?;

        info!(favorite_id = favorite.id, user_id, "created favorite");

        Ok(FavoriteToggle::Added(FavoriteDto::from(favorite)))
    }

    /// Resolution and insert run on one connection, normally a transaction,
    /// so the subject cannot vanish between the check and the write.
    async fn insert_resolved<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        subject: FavoriteSubject,
    ) -> Result<entity::favorite::Model, Error> {
        Self::resolve_on(db, subject).await?;

        let favorite_repo = FavoriteRepository::new(db);
        Ok(favorite_repo.create(user_id, subject).await?)
    }

    /// Resolves the polymorphic reference to the record it points at.
    ///
    /// # Returns
    /// - `Ok(ResolvedSubject)` - The Pokémon or item row
    /// - `Err(Error::Favorite(FavoriteError::Unresolved))` - Dangling
    ///   reference; on a read path this means the stored data is corrupt
    pub async fn resolve_subject(
        &self,
        subject: FavoriteSubject,
    ) -> Result<ResolvedSubject, Error> {
        Self::resolve_on(self.db, subject).await
    }

    async fn resolve_on<C: ConnectionTrait>(
        db: &C,
        subject: FavoriteSubject,
    ) -> Result<ResolvedSubject, Error> {
        let resolved = match subject {
            FavoriteSubject::Pokemon(pokemon_id) => PokemonRepository::new(db)
                .get_by_id(pokemon_id)
                .await?
                .map(ResolvedSubject::Pokemon),
            FavoriteSubject::Item(item_id) => ItemRepository::new(db)
                .get_by_id(item_id)
                .await?
                .map(ResolvedSubject::Item),
        };

        resolved.ok_or_else(|| {
            debug!(
                object_id = subject.object_id(),
                "favorite subject did not resolve"
            );

            FavoriteError::Unresolved {
                object_type: subject.object_type(),
                object_id: subject.object_id(),
            }
            .into()
        })
    }

    /// Resolves a stored favorite row's subject.
    pub async fn resolve(
        &self,
        favorite: &entity::favorite::Model,
    ) -> Result<ResolvedSubject, Error> {
        self.resolve_subject(FavoriteSubject::from_columns(
            favorite.object_type,
            favorite.object_id,
        ))
        .await
    }

    /// Retrieves a favorite in its serialized shape.
    ///
    /// # Returns
    /// - `Ok(Some(FavoriteDto))` - Favorite found, owning user present
    /// - `Ok(None)` - No favorite with this id
    /// - `Err(Error::Favorite(FavoriteError::MissingUser))` - The owning
    ///   user row is gone, which the cascade should make impossible
    pub async fn get_favorite(&self, favorite_id: i32) -> Result<Option<FavoriteDto>, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        match favorite_repo.get_with_user(favorite_id).await? {
            None => Ok(None),
            Some((favorite, maybe_user)) => {
                if maybe_user.is_none() {
                    return Err(FavoriteError::MissingUser {
                        favorite_id: favorite.id,
                        user_id: favorite.user_id,
                    }
                    .into());
                }

                Ok(Some(FavoriteDto::from(favorite)))
            }
        }
    }

    /// Back-reference query: a user's favorites in their serialized shape.
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);
        let favorites = favorite_repo.get_by_user(user_id).await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }
}
