//! User repository implementation with insert-or-update saves.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};
use tracing::{debug, warn};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{DomainError, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// `save` writes whole rows. Every field of the given `User` is stored,
/// whether or not the caller changed it, so an update must start from a
/// fully loaded user: fetch it, change what is needed, save it back. A
/// partially filled user overwrites the stored values with its own.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user when it has no id, otherwise update the row with
    /// that id. Fails with `AppError::DuplicateEmail` when another row
    /// already holds the email, and with `AppError::NotFound` when the id
    /// matches no row. Nothing is written on failure.
    async fn save(&self, user: User) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users, ordered by ID
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Permanently delete user; a missing ID is not an error
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Translate a failed insert or update.
///
/// Email uniqueness is enforced by the `users.email` UNIQUE constraint
/// alone; the write is a single statement, so there is no separate check
/// for a concurrent writer to slip past.
fn write_error(err: DbErr, user_id: Option<i32>, email: String) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        warn!(?user_id, %detail, "Email already in use");
        return DomainError::duplicate_email(email).into();
    }

    match err {
        DbErr::RecordNotUpdated => {
            DomainError::not_found(format!("user {:?}", user_id)).into()
        }
        other => AppError::from(other),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: User) -> AppResult<User> {
        debug!(user_id = ?user.id, "Saving user");

        let user_id = user.id;
        let email = user.email.clone();
        let active = ActiveModel::from(user);

        let written = match user_id {
            None => active.insert(&self.db).await,
            Some(_) => active.update(&self.db).await,
        };

        let model = written.map_err(|err| write_error(err, user_id, email))?;
        debug!(user_id = model.id, "User saved");
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        debug!(user_id = id, "Finding user by ID");

        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        debug!("Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        debug!(count = models.len(), "Listed users");
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            debug!(user_id = id, "No user to delete");
        } else {
            debug!(user_id = id, "User deleted");
        }

        Ok(())
    }
}
