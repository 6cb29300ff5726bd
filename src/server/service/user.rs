//! User service for business logic.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let email = params.email.clone();

        let user = UserRepository::new(self.db)
            .create(params)
            .await
            .map_err(|err| unique_violation(err, || format!("Email {} is already taken", email)))?;

        tracing::info!("Created user {}", user.id);

        Ok(User::from_entity(user))
    }

    /// Gets users ordered by ID.
    ///
    /// # Arguments
    /// - `ids` - Only these users when given; unknown IDs are skipped
    pub async fn get_all(&self, ids: Option<Vec<i32>>) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let users = match ids {
            Some(ids) => repo.find_by_ids(&ids).await?,
            None => repo.get_all().await?,
        };

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Deletes a user together with their events and participation requests.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("User with id={} was not found", id)));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

/// Maps a unique constraint violation to `AppError::Conflict`, passing other errors through.
pub(super) fn unique_violation(err: DbErr, message: impl FnOnce() -> String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message()),
        _ => AppError::DbErr(err),
    }
}
