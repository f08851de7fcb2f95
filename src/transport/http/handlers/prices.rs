use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::product::{Product, ProductPatch};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{
    AppState, CreatePriceRequest, DeleteResponse, ErrorResponse, ListParams, UpdatePriceRequest,
};

#[utoipa::path(
    get,
    path = "/prices",
    params(
        ("offset" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Maximum rows to return (default 100)")
    ),
    responses(
        (status = 200, description = "Paged list of price records in id order", body = [Product])
    )
)]
pub async fn list_prices_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let records = state.store.list(params.offset, params.limit).await?;
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/prices/{id}",
    params(
        ("id" = i64, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "The record", body = Product),
        (status = 404, description = "No record with this id", body = ErrorResponse)
    )
)]
pub async fn get_price_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let record = state.store.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(record))
}

#[utoipa::path(
    post,
    path = "/prices/create",
    request_body = CreatePriceRequest,
    responses(
        (status = 201, description = "Record created", body = Product),
        (status = 422, description = "Invalid JSON body", body = ErrorResponse)
    )
)]
pub async fn create_price_handler(
    State(state): State<AppState>,
    request: Result<Json<CreatePriceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(request) = request.map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    // No name collision check here: a duplicate create succeeds and yields a
    // second record with the same name. Only the ingestion path deduplicates.
    let record = state.store.insert(&request.name, request.cost).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    put,
    path = "/prices/{id}",
    params(
        ("id" = i64, Path, description = "Record id")
    ),
    request_body = UpdatePriceRequest,
    responses(
        (status = 200, description = "The updated record", body = Product),
        (status = 404, description = "No record with this id", body = ErrorResponse),
        (status = 422, description = "Invalid JSON body", body = ErrorResponse)
    )
)]
pub async fn update_price_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    request: Result<Json<UpdatePriceRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(request) = request.map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let patch = ProductPatch {
        name: request.name,
        cost: request.cost,
    };
    let record = state.store.update(id, patch).await?;
    Ok(Json(record))
}

#[utoipa::path(
    delete,
    path = "/prices/{id}",
    params(
        ("id" = i64, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record deleted", body = DeleteResponse),
        (status = 404, description = "No record with this id", body = ErrorResponse)
    )
)]
pub async fn delete_price_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.store.delete(id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
