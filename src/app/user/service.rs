//! 用户业务服务

use std::sync::Arc;
use tracing::info;

use super::{model::User, repository::UserRepository};
use crate::core::{error::CoreError, response::MessageResponse};

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, user: User) -> Result<MessageResponse, CoreError> {
        let id = self.repository.insert(&user).await?;
        info!("Created user {}", id);
        Ok(MessageResponse::created(id))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, CoreError> {
        Ok(self.repository.select_all().await?)
    }

    pub async fn update_user(&self, id: i64, user: User) -> Result<MessageResponse, CoreError> {
        let rows_affected = self.repository.update_by_id(id, &user).await?;
        info!("Updated user {}, rows affected {}", id, rows_affected);
        Ok(MessageResponse::updated(id, rows_affected))
    }

    pub async fn delete_user(&self, id: i64) -> Result<MessageResponse, CoreError> {
        let rows_affected = self.repository.delete_by_id(id).await?;
        info!("Deleted user {}, rows affected {}", id, rows_affected);
        Ok(MessageResponse::deleted(id, rows_affected))
    }
}
