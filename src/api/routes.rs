use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::middleware::{cors_layer, security_headers_layer};
use super::plans::plan_routes;

pub fn create_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/plans", plan_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security_headers_layer())
                .layer(cors_layer()),
        )
}
