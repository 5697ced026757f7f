pub mod health;
pub mod root;
pub mod swagger;
pub mod users;

use actix_web::{error, error::JsonPayloadError, web, HttpResponse};

use crate::models::{ErrorResponse, MISSING_FIELDS_MESSAGE};

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Body ilegível ou sem `Content-Type: application/json` vale como campos
/// ausentes. Demais falhas (ex.: body acima do limite) viram um 400 genérico.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("⚠️ Rejected request body: {}", err);
        let body = match &err {
            JsonPayloadError::Deserialize(_) | JsonPayloadError::ContentType => ErrorResponse {
                message: MISSING_FIELDS_MESSAGE.to_string(),
                error: None,
            },
            other => ErrorResponse {
                message: INVALID_BODY_MESSAGE.to_string(),
                error: Some(other.to_string()),
            },
        };
        let response = HttpResponse::BadRequest().json(body);
        error::InternalError::from_response(err, response).into()
    })
}

/// Registra as rotas da aplicação. O store (`web::Data<dyn UserStore>`)
/// precisa estar no `app_data` do `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(root::welcome))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(users::register)
                .service(users::list_users)
                .service(users::update_user)
                .service(users::delete_user),
        );
}
