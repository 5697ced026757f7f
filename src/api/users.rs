use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use crate::{
    models::{ErrorResponse, MessageResponse, User, UserPayload, UserResponse},
    services::user_service,
    store::UserStore,
    utils::AppError,
};

/// Converte um erro do service na resposta HTTP.
/// `context` é a mensagem genérica usada no 500.
fn error_response(err: AppError, context: &str) -> HttpResponse {
    let body = match &err {
        AppError::Validation(msg) => {
            log::warn!("⚠️ {}: {}", context, msg);
            ErrorResponse { message: msg.clone(), error: None }
        }
        AppError::NotFound(id) => {
            log::warn!("⚠️ User not found: {}", id);
            ErrorResponse { message: "User not found".to_string(), error: None }
        }
        AppError::InvalidId(_) | AppError::DatabaseError(_) => {
            log::error!("❌ {}: {}", context, err);
            ErrorResponse { message: context.to_string(), error: Some(err.to_string()) }
        }
    };

    HttpResponse::build(err.status_code()).json(body)
}

/// POST /api/register - Registra um novo usuário
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User registered", body = UserResponse),
        (status = 400, description = "Missing username or email", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
#[post("/register")]
pub async fn register(store: web::Data<dyn UserStore>, body: web::Json<UserPayload>) -> impl Responder {
    match user_service::register_user(store.get_ref(), body.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse {
            message: "User registered successfully!".to_string(),
            user,
        }),
        Err(e) => error_response(e, "Error registering user"),
    }
}

/// GET /api/users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
#[get("/users")]
pub async fn list_users(store: web::Data<dyn UserStore>) -> impl Responder {
    match user_service::list_users(store.get_ref()).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => error_response(e, "Error fetching users"),
    }
}

/// PUT /api/users/{id} - Atualiza username/email
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ObjectId (hex)")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Missing username or email", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Store error or malformed id", body = ErrorResponse)
    )
)]
#[put("/users/{id}")]
pub async fn update_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
    body: web::Json<UserPayload>,
) -> impl Responder {
    let user_id = path.into_inner();

    match user_service::update_user(store.get_ref(), &user_id, body.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse {
            message: "User updated successfully!".to_string(),
            user,
        }),
        Err(e) => error_response(e, "Error updating user"),
    }
}

/// DELETE /api/users/{id} - Remove um usuário
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ObjectId (hex)")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Store error or malformed id", body = ErrorResponse)
    )
)]
#[delete("/users/{id}")]
pub async fn delete_user(store: web::Data<dyn UserStore>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match user_service::delete_user(store.get_ref(), &user_id).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse {
            message: "User deleted successfully!".to_string(),
        }),
        Err(e) => error_response(e, "Error deleting user"),
    }
}
