use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::uploads::UploadImageRequest,
    error::AppResult,
    models::Product,
    response::ApiResponse,
    services::upload_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/upload-customer-image/", post(upload_customer_image))
}

#[utoipa::path(
    post,
    path = "/api/upload-customer-image/",
    request_body = UploadImageRequest,
    responses(
        (status = 200, description = "Customer image registered as a product", body = ApiResponse<Product>),
        (status = 400, description = "Missing image"),
        (status = 404, description = "Truck sign category not configured"),
    ),
    tag = "Uploads"
)]
pub async fn upload_customer_image(
    State(state): State<AppState>,
    Json(payload): Json<UploadImageRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = upload_service::upload_customer_image(&state, payload).await?;
    Ok(Json(resp))
}
