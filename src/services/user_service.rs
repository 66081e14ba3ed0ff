use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::UserId,
        dto::response::{UserProfile, UserSummary},
    },
    repositories::UserRepository,
};

pub const USER_NOT_FOUND: &str = "User not found";

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Looks up the user a verified credential points at.
    ///
    /// A missing row means the credential outlived its user and is reported as not found.
    pub async fn get_profile(&self, id: UserId) -> AppResult<UserProfile> {
        self.repository
            .find_profile_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserSummary>> {
        self.repository.list_with_calculators().await
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
