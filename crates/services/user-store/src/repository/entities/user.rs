//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "firstName")]
    pub first_name: String,
    #[sea_orm(column_name = "lastName")]
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_name = "passwordHash")]
    pub password_hash: String,
    pub street: Option<String>,
    #[sea_orm(column_name = "postalCode")]
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            password_hash: model.password_hash,
            street: model.street,
            postal_code: model.postal_code,
            city: model.city,
            country: model.country,
        }
    }
}

/// Convert domain entity to a full-row active model.
///
/// Every column except the key is `Set`, so an update rewrites the whole
/// row. A missing id is left `NotSet` for the database to assign.
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: match user.id {
                Some(id) => Unchanged(id),
                None => NotSet,
            },
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            street: Set(user.street),
            postal_code: Set(user.postal_code),
            city: Set(user.city),
            country: Set(user.country),
        }
    }
}
