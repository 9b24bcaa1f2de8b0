pub use super::favorite::Entity as Favorite;
pub use super::item::Entity as Item;
pub use super::pokemon::Entity as Pokemon;
pub use super::user::Entity as User;
