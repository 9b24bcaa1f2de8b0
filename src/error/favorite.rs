use entity::favorite::ObjectType;
use thiserror::Error;

/// Errors specific to favorites and their polymorphic subject reference.
#[derive(Error, Debug)]
pub enum FavoriteError {
    /// The `(object_type, object_id)` pair does not resolve to a row in the
    /// table named by the discriminator. The database cannot express this
    /// constraint, so it is checked at the application layer; hitting it on
    /// a read means the stored data is corrupt.
    #[error("Favorite subject {object_type:?} ID {object_id} does not exist")]
    Unresolved {
        object_type: ObjectType,
        object_id: i32,
    },
    /// A favorite row's owning user is gone. The cascade on `user_id` makes
    /// this unreachable unless the schema was created without the constraint.
    #[error("Favorite ID {favorite_id} references user ID {user_id} which does not exist")]
    MissingUser { favorite_id: i32, user_id: i32 },
}
