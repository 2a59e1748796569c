use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::orders::{CreateOrderRequest, PaymentRequest},
    error::AppResult,
    models::Order,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order/{id}/create/", post(create_order))
        .route("/order/{id}/retrieve/", get(get_order))
        .route(
            "/order-payment/{id}/",
            get(get_order_payment).post(update_order_payment),
        )
}

#[utoipa::path(
    post,
    path = "/api/order/{id}/create/",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Customize the product and place the order", body = ApiResponse<Order>),
        (status = 400, description = "Invalid order details"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::create_order(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/order/{id}/retrieve/",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get order", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::get_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/order-payment/{id}/",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order awaiting payment", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::get_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/order-payment/{id}/",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Order details updated", body = ApiResponse<Order>),
        (status = 400, description = "Invalid order details"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Orders"
)]
pub async fn update_order_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PaymentRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::update_order_payment(&state, id, payload).await?;
    Ok(Json(resp))
}
