//! Estado e ações do formulário de registro.
//!
//! Toda mutação é seguida de um refetch completo da lista, emitido só depois
//! da resposta da mutação. Não há atualização otimista.

use super::api::UsersApi;
use crate::models::{User, UserPayload};

pub const FETCH_ERROR: &str = "Failed to fetch users. Please check the server.";
pub const SAVE_ERROR: &str = "Failed to save user. Please check the server.";
pub const DELETE_ERROR: &str = "Failed to delete user. Please check the server.";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this user?";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub users: Vec<User>,
    /// Uma vez definida, a mensagem permanece na tela
    pub error_message: Option<String>,
    /// `Some(id)` enquanto um registro está em edição
    pub editing_user_id: Option<String>,
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        self.editing_user_id.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Campo em branco: nada foi enviado
    Incomplete,
    Failed,
}

pub struct UserForm<A: UsersApi> {
    api: A,
    state: FormState,
}

impl<A: UsersApi> UserForm<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: FormState::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.state.username = username.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.email = email.into();
    }

    pub async fn mount(&mut self) {
        self.fetch_users().await;
    }

    pub async fn fetch_users(&mut self) {
        match self.api.list_users().await {
            Ok(users) => self.state.users = users,
            Err(e) => {
                log::error!("❌ Error fetching users: {}", e);
                self.state.error_message = Some(FETCH_ERROR.to_string());
            }
        }
    }

    /// Register ou update, conforme o modo de edição
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state.username.is_empty() || self.state.email.is_empty() {
            return SubmitOutcome::Incomplete;
        }

        let payload = UserPayload::new(self.state.username.clone(), self.state.email.clone());

        let result = match &self.state.editing_user_id {
            Some(id) => self.api.update(id, &payload).await,
            None => self.api.register(&payload).await,
        };

        if let Err(e) = result {
            log::error!("❌ Error saving user: {}", e);
            self.state.error_message = Some(SAVE_ERROR.to_string());
            return SubmitOutcome::Failed;
        }

        self.state.editing_user_id = None;
        self.fetch_users().await;
        self.state.username.clear();
        self.state.email.clear();

        SubmitOutcome::Saved
    }

    /// Copia os valores da linha já renderizada, sem buscar de novo no servidor
    pub fn edit(&mut self, user: &User) {
        self.state.username = user.username.clone();
        self.state.email = user.email.clone();
        self.state.editing_user_id = Some(user.id.clone());
    }

    /// Pede confirmação antes de enviar. Retorna `false` se o usuário
    /// recusou ou se o delete falhou.
    pub async fn delete<C>(&mut self, user_id: &str, confirm: C) -> bool
    where
        C: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_CONFIRMATION) {
            return false;
        }

        if let Err(e) = self.api.delete(user_id).await {
            log::error!("❌ Error deleting user: {}", e);
            self.state.error_message = Some(DELETE_ERROR.to_string());
            return false;
        }

        self.fetch_users().await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::ApiError;
    use crate::models::{MessageResponse, UserResponse};
    use crate::services::user_service;
    use crate::store::InMemoryUserStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Fake da API sobre o store em memória, registrando a ordem das chamadas
    #[derive(Default)]
    struct FakeApi {
        store: InMemoryUserStore,
        down: AtomicBool,
        list_calls: AtomicUsize,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn record(&self, call: &str) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(call.to_string());
            if self.down.load(Ordering::SeqCst) {
                return Err(ApiError::Transport("connection refused".into()));
            }
            Ok(())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn status_error(e: crate::utils::AppError) -> ApiError {
        ApiError::Status(e.status_code().as_u16(), e.to_string())
    }

    #[async_trait]
    impl UsersApi for FakeApi {
        async fn list_users(&self) -> Result<Vec<User>, ApiError> {
            self.record("list")?;
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            user_service::list_users(&self.store).await.map_err(status_error)
        }

        async fn register(&self, payload: &UserPayload) -> Result<UserResponse, ApiError> {
            self.record("register")?;
            let user = user_service::register_user(&self.store, payload.clone())
                .await
                .map_err(status_error)?;
            Ok(UserResponse { message: "User registered successfully!".into(), user })
        }

        async fn update(&self, id: &str, payload: &UserPayload) -> Result<UserResponse, ApiError> {
            self.record("update")?;
            let user = user_service::update_user(&self.store, id, payload.clone())
                .await
                .map_err(status_error)?;
            Ok(UserResponse { message: "User updated successfully!".into(), user })
        }

        async fn delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
            self.record("delete")?;
            user_service::delete_user(&self.store, id)
                .await
                .map_err(status_error)?;
            Ok(MessageResponse { message: "User deleted successfully!".into() })
        }
    }

    fn form() -> (Arc<FakeApi>, UserForm<Arc<FakeApi>>) {
        let api = Arc::new(FakeApi::default());
        (api.clone(), UserForm::new(api))
    }

    #[tokio::test]
    async fn test_mount_failure_sets_persistent_error() {
        let (api, mut form) = form();
        api.down.store(true, Ordering::SeqCst);

        form.mount().await;
        assert_eq!(form.state().error_message.as_deref(), Some(FETCH_ERROR));

        api.down.store(false, Ordering::SeqCst);
        form.fetch_users().await;
        assert_eq!(form.state().error_message.as_deref(), Some(FETCH_ERROR));
    }

    #[tokio::test]
    async fn test_register_refetches_then_clears_form() {
        let (api, mut form) = form();
        form.mount().await;

        form.set_username("alice");
        form.set_email("a@x.com");
        assert_eq!(form.submit().await, SubmitOutcome::Saved);

        assert_eq!(api.calls(), vec!["list", "register", "list"]);
        assert_eq!(form.state().users.len(), 1);
        assert_eq!(form.state().users[0].username, "alice");
        assert!(form.state().username.is_empty());
        assert!(form.state().email.is_empty());
        assert!(form.state().error_message.is_none());
    }

    #[tokio::test]
    async fn test_blank_field_sends_nothing() {
        let (api, mut form) = form();
        form.set_username("alice");

        assert_eq!(form.submit().await, SubmitOutcome::Incomplete);
        assert!(api.calls().is_empty());
        assert_eq!(form.state().username, "alice");
    }

    #[tokio::test]
    async fn test_edit_then_submit_updates_same_id() {
        let (api, mut form) = form();
        form.set_username("alice");
        form.set_email("a@x.com");
        form.submit().await;

        let row = form.state().users[0].clone();
        form.edit(&row);
        assert!(form.state().is_editing());
        assert_eq!(form.state().username, "alice");

        form.set_username("alice2");
        form.set_email("a2@x.com");
        assert_eq!(form.submit().await, SubmitOutcome::Saved);

        assert_eq!(api.calls(), vec!["register", "list", "update", "list"]);
        assert!(!form.state().is_editing());
        assert_eq!(
            form.state().users,
            vec![User { id: row.id, username: "alice2".into(), email: "a2@x.com".into() }]
        );
    }

    #[tokio::test]
    async fn test_failed_save_keeps_form() {
        let (api, mut form) = form();
        let ghost = User {
            id: mongodb::bson::oid::ObjectId::new().to_hex(),
            username: "ghost".into(),
            email: "g@x.com".into(),
        };
        form.edit(&ghost);

        // Update de id inexistente: 404
        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        assert_eq!(form.state().error_message.as_deref(), Some(SAVE_ERROR));
        assert_eq!(form.state().editing_user_id.as_deref(), Some(ghost.id.as_str()));
        assert_eq!(form.state().username, "ghost");
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let (api, mut form) = form();
        form.set_username("alice");
        form.set_email("a@x.com");
        form.submit().await;
        let id = form.state().users[0].id.clone();

        let mut prompt = String::new();
        assert!(!form.delete(&id, |msg| { prompt = msg.to_string(); false }).await);
        assert_eq!(prompt, DELETE_CONFIRMATION);
        assert_eq!(form.state().users.len(), 1);

        assert!(form.delete(&id, |_| true).await);
        assert!(form.state().users.is_empty());
        assert_eq!(api.calls(), vec!["register", "list", "delete", "list"]);
    }

    #[tokio::test]
    async fn test_delete_failure_sets_error() {
        let (_api, mut form) = form();
        let missing = mongodb::bson::oid::ObjectId::new().to_hex();

        assert!(!form.delete(&missing, |_| true).await);
        assert_eq!(form.state().error_message.as_deref(), Some(DELETE_ERROR));
    }
}
