use axum::{extract::State, http::StatusCode, Json};
use common::types::StatusMessage;
use service::file::revision_store::Revision;
use tracing::info;

use crate::{
    errors::JsonApiError,
    extract::{ValidJson, ValidPath},
    state::AppState,
};

#[utoipa::path(
    post, path = "/carros/{id}/revisoes", tag = "Banco Não Relacional - Revisões",
    params(("id" = String, Path, description = "Car identifier (not checked against the car table)")),
    request_body = crate::openapi::RevisionDoc,
    responses(
        (status = 200, description = "Added", body = crate::openapi::StatusMessageDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add(
    State(state): State<AppState>,
    ValidPath(car_id): ValidPath<String>,
    ValidJson(revision): ValidJson<Revision>,
) -> Result<Json<StatusMessage>, JsonApiError> {
    let msg = state.revisions.add(&car_id, revision).await?;
    Ok(Json(StatusMessage::new(msg)))
}

#[utoipa::path(
    get, path = "/carros/{id}/revisoes", tag = "Banco Não Relacional - Revisões",
    params(("id" = String, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::RevisionDoc]),
        (status = 404, description = "No revisions for this car", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    ValidPath(car_id): ValidPath<String>,
) -> Result<Json<Vec<Revision>>, JsonApiError> {
    let list = state.revisions.list(&car_id).await?;
    info!(car_id = %car_id, count = list.len(), "list revisions");
    Ok(Json(list))
}

#[utoipa::path(
    put, path = "/carros/{id}/revisoes/{index}", tag = "Banco Não Relacional - Revisões",
    params(
        ("id" = String, Path, description = "Car identifier"),
        ("index" = i64, Path, description = "Zero-based position; negative counts from the end")
    ),
    request_body = crate::openapi::RevisionDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StatusMessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ValidPath((car_id, index)): ValidPath<(String, i64)>,
    ValidJson(revision): ValidJson<Revision>,
) -> Result<Json<StatusMessage>, JsonApiError> {
    let msg = state.revisions.update(&car_id, index, revision).await?;
    Ok(Json(StatusMessage::new(msg)))
}

#[utoipa::path(
    delete, path = "/carros/{id}/revisoes/{index}", tag = "Banco Não Relacional - Revisões",
    params(
        ("id" = String, Path, description = "Car identifier"),
        ("index" = i64, Path, description = "Zero-based position; negative counts from the end")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ValidPath((car_id, index)): ValidPath<(String, i64)>,
) -> Result<StatusCode, JsonApiError> {
    state.revisions.delete(&car_id, index).await?;
    Ok(StatusCode::NO_CONTENT)
}
