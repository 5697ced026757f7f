use actix_web::{HttpResponse, Responder};

/// GET / - Mensagem de boas-vindas (útil para debug)
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    )
)]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to the MERN Application API")
}
