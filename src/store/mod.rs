//! Persistência dos registros de usuário.
//!
//! A API recebe o store já construído como `web::Data<dyn UserStore>`, então
//! handlers e testes não dependem de qual backend está por trás.

pub mod memory;
pub mod mongo;

pub use memory::InMemoryUserStore;
pub use mongo::MongoUserStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::{NewUser, User};
use crate::utils::AppError;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Cria um registro com id novo.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Todos os registros, na ordem do storage (na prática, ordem de inserção).
    async fn list_all(&self) -> Result<Vec<User>, AppError>;

    /// Substitui username/email. `Ok(None)` quando o id não existe.
    async fn update_by_id(&self, id: &str, new_user: NewUser) -> Result<Option<User>, AppError>;

    /// Remove e devolve o registro. `Ok(None)` quando o id não existe.
    async fn delete_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// Ids seguem o formato ObjectId em todos os backends
pub(crate) fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}
