use actix_cors::Cors;
use actix_web::http::header;

use crate::config::AllowedOrigins;

/// CORS da API a partir das origens configuradas
pub fn cors(origins: &AllowedOrigins) -> Cors {
    let cors = match origins {
        AllowedOrigins::Any => Cors::default().allow_any_origin(),
        AllowedOrigins::List(list) => list
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use crate::store::{InMemoryUserStore, UserStore};
    use actix_web::{http::StatusCode, test, web, App};
    use std::sync::Arc;

    fn store_data() -> web::Data<dyn UserStore> {
        let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
        web::Data::from(store)
    }

    #[actix_web::test]
    async fn test_wildcard_origin_serves_requests() {
        let app = test::init_service(
            App::new()
                .app_data(store_data())
                .wrap(cors(&AllowedOrigins::Any))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users")
            .insert_header((header::ORIGIN, "http://anywhere.test"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_listed_origin_preflight() {
        let origins = AllowedOrigins::List(vec!["http://localhost:3000".into()]);
        let app = test::init_service(
            App::new()
                .app_data(store_data())
                .wrap(cors(&origins))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/register")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );

        // Origem fora da lista: sem header de liberação
        let req = test::TestRequest::get()
            .uri("/api/users")
            .insert_header((header::ORIGIN, "http://evil.test"))
            .to_request();
        let resp = test::try_call_service(&app, req).await;
        let allowed = resp
            .map(|r| r.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN))
            .unwrap_or(false);
        assert!(!allowed);
    }
}
