use chrono::NaiveDateTime;
use entity::favorite::ObjectType;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

/// Application-layer view of the polymorphic subject reference.
///
/// The storage schema keeps a `(object_type, object_id)` column pair; this
/// tagged union is the shape everything above the repository boundary works
/// with, so an unset or doubly-set subject cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteSubject {
    Pokemon(i32),
    Item(i32),
}

impl FavoriteSubject {
    /// Reassembles the tagged union from the stored column pair.
    pub fn from_columns(object_type: ObjectType, object_id: i32) -> Self {
        match object_type {
            ObjectType::Pokemon => FavoriteSubject::Pokemon(object_id),
            ObjectType::Item => FavoriteSubject::Item(object_id),
        }
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            FavoriteSubject::Pokemon(_) => ObjectType::Pokemon,
            FavoriteSubject::Item(_) => ObjectType::Item,
        }
    }

    pub fn object_id(&self) -> i32 {
        match self {
            FavoriteSubject::Pokemon(id) | FavoriteSubject::Item(id) => *id,
        }
    }
}

/// The record a favorite's subject resolved to.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedSubject {
    Pokemon(entity::pokemon::Model),
    Item(entity::item::Model),
}

/// Serialized favorite record.
///
/// `object_type` carries the lowercase wire value (`"pokemon"` / `"item"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub object_type: String,
    pub object_id: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            object_type: favorite.object_type.to_value(),
            object_id: favorite.object_id,
            created_at: favorite.created_at,
        }
    }
}

/// Outcome of the favorites-toggle primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum FavoriteToggle {
    /// No favorite existed for the subject, so one was created.
    Added(FavoriteDto),
    /// An existing favorite with this id was removed.
    Removed(i32),
}
