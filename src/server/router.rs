use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{chatbot, health, outlet},
    state::AppState,
};

/// Path of the interactive Swagger UI
pub const DOCS_PATH: &str = "/docs";

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "McMap API",
        description = "Locate McDonald's outlets by name, location, service, or distance, and ask questions in plain English."
    ),
    tags(
        (name = "outlet", description = "Outlet lookups"),
        (name = "chatbot", description = "Free-text outlet questions"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Builds the API routes and the OpenAPI document describing them.
pub fn api_router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(outlet::get_outlets))
        .routes(routes!(outlet::search_outlets))
        .routes(routes!(outlet::get_outlets_by_category_and_location))
        .routes(routes!(outlet::get_outlets_by_location))
        .routes(routes!(outlet::get_nearby_outlets))
        .routes(routes!(outlet::get_outlet))
        .routes(routes!(outlet::get_outlets_by_category))
        .routes(routes!(outlet::get_outlet_services))
        .routes(routes!(chatbot::chatbot_query))
        .routes(routes!(health::health))
        .split_for_parts()
}

/// Builds the complete application router.
///
/// Mounts the API, Swagger UI at `/docs` with its document at `/openapi.json`, then
/// wraps everything in request tracing and the provided CORS layer.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let (api, openapi) = api_router();

    api.merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, openapi))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
