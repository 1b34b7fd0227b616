use crate::AppState;
use crate::api::middleware;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router with all routes and shared layers.
pub fn create_router() -> Router<AppState> {
    let router = Router::new()
        .route("/health", get(crate::api::handlers::health::health))
        .route("/api/analyze", post(crate::api::handlers::analyze::analyze))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(from_fn(middleware::request_id)),
        );

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;

        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", crate::api::ApiDoc::openapi()),
        )
    };

    router
}
