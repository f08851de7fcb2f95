use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

use crate::domain::product::Product;
use crate::transport::http::handlers::{health, prices};
use crate::transport::http::types::{
    AppState, CreatePriceRequest, DeleteResponse, ErrorResponse, UpdatePriceRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        prices::list_prices_handler,
        prices::get_price_handler,
        prices::create_price_handler,
        prices::update_price_handler,
        prices::delete_price_handler
    ),
    components(schemas(
        Product,
        CreatePriceRequest,
        UpdatePriceRequest,
        DeleteResponse,
        ErrorResponse
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/prices", get(prices::list_prices_handler))
        .route("/prices/create", post(prices::create_price_handler))
        .route(
            "/prices/:id",
            get(prices::get_price_handler)
                .put(prices::update_price_handler)
                .delete(prices::delete_price_handler),
        )
        .with_state(app_state)
}
