// ==================== USER REGISTRATION ====================
// Regras de register/list/update/delete sobre qualquer UserStore.
// A validação de presença dos campos acontece aqui, antes do store.

use crate::{
    models::{User, UserPayload},
    store::UserStore,
    utils::AppError,
};

/// POST /api/register
pub async fn register_user(store: &dyn UserStore, payload: UserPayload) -> Result<User, AppError> {
    let new_user = payload.validate()?;

    log::info!("📝 Registering user {}", new_user.username());

    let user = store.insert(new_user).await?;

    log::info!("✅ User registered: {}", user.id);

    Ok(user)
}

/// GET /api/users
pub async fn list_users(store: &dyn UserStore) -> Result<Vec<User>, AppError> {
    let users = store.list_all().await?;

    log::debug!("📋 Listed {} users", users.len());

    Ok(users)
}

/// PUT /api/users/{id}
pub async fn update_user(
    store: &dyn UserStore,
    user_id: &str,
    payload: UserPayload,
) -> Result<User, AppError> {
    let new_user = payload.validate()?;

    let user = store
        .update_by_id(user_id, new_user)
        .await?
        .ok_or_else(|| AppError::NotFound(user_id.to_string()))?;

    log::info!("✅ User updated: {}", user.id);

    Ok(user)
}

/// DELETE /api/users/{id}
pub async fn delete_user(store: &dyn UserStore, user_id: &str) -> Result<User, AppError> {
    let user = store
        .delete_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(user_id.to_string()))?;

    log::info!("🗑️ User deleted: {}", user.id);

    Ok(user)
}
