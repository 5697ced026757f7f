use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

use crate::models::{MessageResponse, User, UserPayload, UserResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Servidor inacessível ou resposta ilegível
    Transport(String),
    /// Resposta fora de 2xx
    Status(u16, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Status(code, body) => write!(f, "Server responded {}: {}", code, body),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Operações da API de usuários vistas pelo formulário
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn register(&self, payload: &UserPayload) -> Result<UserResponse, ApiError>;
    async fn update(&self, id: &str, payload: &UserPayload) -> Result<UserResponse, ApiError>;
    async fn delete(&self, id: &str) -> Result<MessageResponse, ApiError>;
}

#[async_trait]
impl<T: UsersApi + ?Sized> UsersApi for Arc<T> {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        (**self).list_users().await
    }

    async fn register(&self, payload: &UserPayload) -> Result<UserResponse, ApiError> {
        (**self).register(payload).await
    }

    async fn update(&self, id: &str, payload: &UserPayload) -> Result<UserResponse, ApiError> {
        (**self).update(id, payload).await
    }

    async fn delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        (**self).delete(id).await
    }
}

/// Cliente HTTP (reqwest) para o servidor de registro
#[derive(Clone)]
pub struct HttpUsersApi {
    client: Client,
    base_url: String,
}

impl HttpUsersApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(status.as_u16(), body));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.client.get(self.url("/api/users")).send().await?;
        Self::parse(response).await
    }

    async fn register(&self, payload: &UserPayload) -> Result<UserResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/register"))
            .json(payload)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn update(&self, id: &str, payload: &UserPayload) -> Result<UserResponse, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/api/users/{}", id)))
            .json(payload)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/users/{}", id)))
            .send()
            .await?;
        Self::parse(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let api = HttpUsersApi::new("http://localhost:5000/");
        assert_eq!(api.url("/api/users"), "http://localhost:5000/api/users");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Porta 9 (discard) não deve ter servidor HTTP
        let api = HttpUsersApi::new("http://127.0.0.1:9");
        assert!(matches!(api.list_users().await, Err(ApiError::Transport(_))));
    }
}
