use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::utils::AppError;

pub const MISSING_FIELDS_MESSAGE: &str = "Please provide both username and email.";

/// Documento da coleção `users` no MongoDB.
///
/// Campos ausentes são aceitos na leitura: o store não impõe a presença de
/// username/email, apenas a API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Registro de usuário como exposto pela API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// ObjectId em hexadecimal (24 caracteres)
    #[serde(rename = "_id")]
    #[schema(example = "665f1c2e9b1e8a3d4c5b6a79")]
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: doc.id.to_hex(),
            username: doc.username,
            email: doc.email,
        }
    }
}

/// Body de register e update. Ambos os campos são opcionais no parse para
/// que a ausência vire um 400 com mensagem própria.
///
/// Números e booleanos viram texto (`123` → `"123"`); `0`, `false`, `null`,
/// arrays e objetos contam como ausentes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    pub email: Option<String>,
}

fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Bool(true) => Some("true".to_string()),
        serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

impl UserPayload {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        UserPayload {
            username: Some(username.into()),
            email: Some(email.into()),
        }
    }

    pub fn validate(self) -> Result<NewUser, AppError> {
        match (self.username, self.email) {
            (Some(username), Some(email)) => NewUser::new(username, email),
            _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// Username/email already checked for presence. The only way into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    email: String,
}

impl NewUser {
    pub fn new(username: String, email: String) -> Result<Self, AppError> {
        if username.is_empty() || email.is_empty() {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        Ok(NewUser { username, email })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Resposta de register e update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
