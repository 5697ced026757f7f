use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{parse_id, UserStore};
use crate::models::{NewUser, User};
use crate::utils::AppError;

/// Store em memória, usado com `USER_STORE=memory` e nos testes.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User {
            id: ObjectId::new().to_hex(),
            username: new_user.username().to_string(),
            email: new_user.email().to_string(),
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn update_by_id(&self, id: &str, new_user: NewUser) -> Result<Option<User>, AppError> {
        let object_id = parse_id(id)?.to_hex();
        let mut users = self.users.write().await;

        Ok(users.iter_mut().find(|u| u.id == object_id).map(|user| {
            user.username = new_user.username().to_string();
            user.email = new_user.email().to_string();
            user.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_id(id)?.to_hex();
        let mut users = self.users.write().await;

        Ok(users
            .iter()
            .position(|u| u.id == object_id)
            .map(|index| users.remove(index)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
