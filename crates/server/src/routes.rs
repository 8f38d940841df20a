pub mod cars;
pub mod revisions;

use axum::{
    routing::{get, put},
    Json, Router,
};
use common::types::Health;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: car table routes, revision document routes, health and docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json));

    let car_routes = Router::new()
        .route("/carros/", get(cars::list).post(cars::create))
        .route("/carros/:id", get(cars::get).put(cars::update).delete(cars::delete));

    let revision_routes = Router::new()
        .route("/carros/:id/revisoes", get(revisions::list).post(revisions::add))
        .route("/carros/:id/revisoes/:index", put(revisions::update).delete(revisions::delete));

    public
        .merge(car_routes)
        .merge(revision_routes)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}
