//! Router assembly and HTTP middleware stack

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(api::orders::router())
        .merge(api::kitchen_orders::router())
        .merge(api::products::router())
        .merge(api::menu::router())
        // Health API - public route
        .merge(api::health::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .layer(
            ServiceBuilder::new()
                // Request tracing (logs at INFO level)
                .layer(TraceLayer::new_for_http())
                // CORS - the kitchen board runs on a different origin
                .layer(CorsLayer::permissive())
                // Unique ID per request, propagated to the response
                .layer(SetRequestIdLayer::new(
                    HeaderName::from_static("x-request-id"),
                    XRequestId,
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                ))),
        )
        .with_state(state)
}
