use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::favorite::FavoriteSubject;

/// Repository over the `favorites` table.
///
/// This is the storage boundary for the polymorphic reference: callers pass
/// a [`FavoriteSubject`] and the mapping to the `(object_type, object_id)`
/// column pair happens here and nowhere else.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a favorite row.
    ///
    /// The foreign key on `user_id` rejects unknown users at the storage
    /// level; whether the subject resolves is checked by the service layer
    /// before calling this.
    pub async fn create(
        &self,
        user_id: i32,
        subject: FavoriteSubject,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            object_id: ActiveValue::Set(subject.object_id()),
            object_type: ActiveValue::Set(subject.object_type()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Fetches a favorite together with its owning user row.
    pub async fn get_with_user(
        &self,
        favorite_id: i32,
    ) -> Result<Option<(entity::favorite::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .find_also_related(entity::user::Entity)
            .one(self.db)
            .await
    }

    /// Back-reference query: all favorites owned by a user.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Back-reference query: all favorites pointing at a subject.
    pub async fn get_by_subject(
        &self,
        subject: FavoriteSubject,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::ObjectType.eq(subject.object_type()))
            .filter(entity::favorite::Column::ObjectId.eq(subject.object_id()))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// All favorites carrying a discriminator, regardless of subject id.
    /// Feeds the catalog list projections, which group the rows by
    /// `object_id` instead of querying per subject.
    pub async fn get_by_object_type(
        &self,
        object_type: entity::favorite::ObjectType,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::ObjectType.eq(object_type))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts favorites pointing at a subject, used for restrict-on-delete
    /// checks over the catalog tables.
    pub async fn count_by_subject(&self, subject: FavoriteSubject) -> Result<u64, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::ObjectType.eq(subject.object_type()))
            .filter(entity::favorite::Column::ObjectId.eq(subject.object_id()))
            .count(self.db)
            .await
    }

    /// Looks up the favorite a user holds on a subject, if any. At most one
    /// row is expected; the toggle operation keeps it that way.
    pub async fn find_by_user_and_subject(
        &self,
        user_id: i32,
        subject: FavoriteSubject,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::ObjectType.eq(subject.object_type()))
            .filter(entity::favorite::Column::ObjectId.eq(subject.object_id()))
            .one(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
