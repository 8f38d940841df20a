use axum::{extract::State, http::StatusCode, Json};
use models::car::{self, CarInput};
use serde::Deserialize;
use service::pagination::Pagination;
use tracing::info;

use crate::{
    errors::JsonApiError,
    extract::{ValidJson, ValidPath, ValidQuery},
    state::AppState,
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// rows to skip (default 0)
    pub skip: Option<u64>,
    /// maximum rows returned (default 10)
    pub limit: Option<u64>,
}

#[utoipa::path(
    post, path = "/carros/", tag = "Banco Relacional - Carros",
    request_body = crate::openapi::CarInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CarDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CarInput>,
) -> Result<(StatusCode, Json<car::Model>), JsonApiError> {
    let created = state.cars.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/carros/{id}", tag = "Banco Relacional - Carros",
    params(("id" = i32, Path, description = "Car id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CarDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, ValidPath(id): ValidPath<i32>) -> Result<Json<car::Model>, JsonApiError> {
    Ok(Json(state.cars.get(id).await?))
}

#[utoipa::path(
    get, path = "/carros/", tag = "Banco Relacional - Carros",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CarDoc]),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(q): ValidQuery<ListQuery>,
) -> Result<Json<Vec<car::Model>>, JsonApiError> {
    let page = Pagination::from_query(q.skip, q.limit);
    let list = state.cars.list(page).await?;
    info!(count = list.len(), skip = page.skip, limit = page.limit, "list cars");
    Ok(Json(list))
}

#[utoipa::path(
    put, path = "/carros/{id}", tag = "Banco Relacional - Carros",
    params(("id" = i32, Path, description = "Car id")),
    request_body = crate::openapi::CarInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CarDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(input): ValidJson<CarInput>,
) -> Result<Json<car::Model>, JsonApiError> {
    Ok(Json(state.cars.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/carros/{id}", tag = "Banco Relacional - Carros",
    params(("id" = i32, Path, description = "Car id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, ValidPath(id): ValidPath<i32>) -> Result<StatusCode, JsonApiError> {
    state.cars.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
