use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registration API",
        version = "1.0.0",
        description = "Register, list, update and delete users.\n\nNo authentication: every endpoint is public."
    ),
    paths(
        // Users
        crate::api::users::register,
        crate::api::users::list_users,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health
        crate::api::root::welcome,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::UserPayload,
            crate::models::UserResponse,
            crate::models::MessageResponse,
            crate::models::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration CRUD backed by the users collection."),
        (name = "Health", description = "Welcome message and health check."),
    )
)]
pub struct ApiDoc;
