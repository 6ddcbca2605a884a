//! User Store Library
//!
//! This crate maps the `User` domain entity to a relational `users` table.
//! It provides the connection provider, the schema bootstrap migration and
//! the `UserRepository` with insert-or-update `save` semantics.

pub mod config;
pub mod infra;
pub mod repository;

use tracing::info;

use crate::config::UserStoreConfig;
use crate::infra::Database;
use crate::repository::UserStore;

/// Connect using environment configuration and build a ready repository.
pub async fn connect_from_env() -> Result<UserStore, sea_orm::DbErr> {
    let config = UserStoreConfig::from_env();
    info!(?config, "Connecting user store");

    let db = Database::connect(&config.database).await?;
    Ok(UserStore::new(db.get_connection()))
}
