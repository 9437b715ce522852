use crate::domain::Shoe;
use crate::transport::http::handlers::common::only;
use crate::transport::http::handlers::{health, shoes};
use crate::transport::http::types::{AppState, HealthResponse};
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        shoes::create_shoe_handler,
        shoes::list_shoes_handler,
        shoes::get_shoe_handler,
        shoes::update_shoe_handler,
        shoes::delete_shoe_handler
    ),
    components(schemas(Shoe, HealthResponse))
)]
#[allow(dead_code)]
pub struct ApiDoc;

/// Each shoe path accepts exactly one method; anything else gets a 405 naming it.
/// `get` would also answer HEAD, so the GET paths reject it explicitly.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/create",
            post(shoes::create_shoe_handler).fallback(only("POST")),
        )
        .route(
            "/getall",
            get(shoes::list_shoes_handler)
                .head(only("GET"))
                .fallback(only("GET")),
        )
        .route(
            "/getbyid",
            get(shoes::get_shoe_handler)
                .head(only("GET"))
                .fallback(only("GET")),
        )
        .route(
            "/update",
            put(shoes::update_shoe_handler).fallback(only("PUT")),
        )
        .route(
            "/delete",
            delete(shoes::delete_shoe_handler).fallback(only("DELETE")),
        )
        .with_state(app_state)
}

/// The served application: the API routes plus Swagger UI, behind a permissive CORS
/// layer. The CORS layer answers preflight `OPTIONS` requests itself, before the 405
/// fallbacks run.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}
