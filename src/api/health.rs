use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::store::UserStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// "up" ou "down", conforme o ping no store
    pub store: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "User store unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn UserStore>) -> impl Responder {
    let store_up = match store.ping().await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("⚠️ Health check: store ping failed: {}", e);
            false
        }
    };

    let body = HealthResponse {
        status: if store_up { "healthy" } else { "degraded" }.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: if store_up { "up" } else { "down" }.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    if store_up {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::models::{NewUser, User};
    use crate::store::{InMemoryUserStore, UserStore};
    use crate::utils::AppError;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct DownStore;

    #[async_trait]
    impl UserStore for DownStore {
        async fn insert(&self, _: NewUser) -> Result<User, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn list_all(&self) -> Result<Vec<User>, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn update_by_id(&self, _: &str, _: NewUser) -> Result<Option<User>, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn delete_by_id(&self, _: &str) -> Result<Option<User>, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn ping(&self) -> Result<(), AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
    }

    #[actix_web::test]
    async fn test_health_and_welcome() {
        let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
        let app = test::init_service(
            App::new().app_data(web::Data::from(store)).configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: api::health::HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.store, "up");

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"Welcome to the MERN Application API"));
    }

    #[actix_web::test]
    async fn test_unreachable_store() {
        let store: Arc<dyn UserStore> = Arc::new(DownStore);
        let app = test::init_service(
            App::new().app_data(web::Data::from(store)).configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Error fetching users");
        assert_eq!(body["error"], "Database error: connection refused");

        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(serde_json::json!({ "username": "alice", "email": "a@x.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
