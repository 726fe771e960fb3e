//! User service - thin orchestration over the store.

use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for user management.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateUser) -> UserResult<User> {
        self.repository
            .create(NewUser {
                name: input.name,
                email: input.email,
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, user_id: i64) -> UserResult<User> {
        self.repository
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("User with ID: {} not found", user_id)))
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, user_id: i64, changes: UpdateUser) -> UserResult<User> {
        self.repository.update(user_id, changes).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64) -> UserResult<()> {
        self.repository.delete(user_id).await
    }
}
