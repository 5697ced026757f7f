use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use user_registration::{
    api,
    config::{Config, StoreBackend},
    database::MongoDB,
    middleware::{cors, SecurityHeaders},
    store::{InMemoryUserStore, MongoUserStore, UserStore},
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting User Registration API...");

    let store: Arc<dyn UserStore> = match &config.store {
        StoreBackend::MongoDB { uri, database } => {
            let db = MongoDB::new(uri, database.as_deref()).await.map_err(|e| {
                log::error!("❌ Invalid MongoDB configuration: {}", e);
                io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
            })?;

            // Banco fora do ar não impede o start: as rotas respondem 500 até ele voltar
            match db.ping().await {
                Ok(()) => log::info!("✅ MongoDB connected successfully"),
                Err(e) => log::error!("❌ MongoDB unreachable, serving anyway: {}", e),
            }
            Arc::new(MongoUserStore::new(db))
        }
        StoreBackend::Memory => {
            log::warn!("⚠️ Using in-memory user store: data is lost on restart");
            Arc::new(InMemoryUserStore::new())
        }
    };
    let store_data: web::Data<dyn UserStore> = web::Data::from(store);

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    let allowed_origins = config.allowed_origins.clone();

    HttpServer::new(move || {
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors(&allowed_origins))
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
