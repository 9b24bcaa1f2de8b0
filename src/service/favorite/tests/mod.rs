mod toggle_favorite;

use pokefav_test_utils::prelude::*;

use crate::{
    error::{favorite::FavoriteError, Error},
    model::favorite::{FavoriteSubject, FavoriteToggle, ResolvedSubject},
    service::favorite::FavoriteService,
};
