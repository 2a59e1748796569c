use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::catalog::{CategoryList, LetteringItemCategoryList, ProductColorList, ProductList},
    error::AppResult,
    models::{Product, ProductVariation},
    response::ApiResponse,
    routes::params::ProductQuery,
    services::{catalog_service, variation_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories/", get(list_categories))
        .route("/lettering-item-categories/", get(list_lettering_item_categories))
        .route("/products/", get(list_products))
        .route("/product-category/{id}/", get(list_products_in_category))
        .route("/product-variation-retrieve/{id}/", get(get_product_variation))
        .route("/product-color/", get(list_product_colors))
        .route("/product-detail/{id}/", get(get_product))
        .route("/truck-logo-list/", get(list_truck_logos))
}

#[utoipa::path(
    get,
    path = "/api/categories/",
    responses(
        (status = 200, description = "List categories", body = ApiResponse<CategoryList>)
    ),
    tag = "Catalog"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let resp = catalog_service::list_categories(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/lettering-item-categories/",
    responses(
        (status = 200, description = "List lettering item categories", body = ApiResponse<LetteringItemCategoryList>)
    ),
    tag = "Catalog"
)]
pub async fn list_lettering_item_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<LetteringItemCategoryList>>> {
    let resp = catalog_service::list_lettering_item_categories(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/",
    params(
        ("category_id" = Option<i32>, Query, description = "Only products of this category"),
        ("is_uploaded" = Option<bool>, Query, description = "Filter customer uploads")
    ),
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Catalog"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = catalog_service::list_products(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/product-category/{id}/",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Products of a category", body = ApiResponse<ProductList>)
    ),
    tag = "Catalog"
)]
pub async fn list_products_in_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = catalog_service::list_products_in_category(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/product-variation-retrieve/{id}/",
    params(
        ("id" = i32, Path, description = "Product variation ID")
    ),
    responses(
        (status = 200, description = "Get product variation", body = ApiResponse<ProductVariation>),
        (status = 404, description = "Product variation not found"),
    ),
    tag = "Catalog"
)]
pub async fn get_product_variation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ProductVariation>>> {
    let resp = variation_service::get_product_variation(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/product-color/",
    responses(
        (status = 200, description = "List product colors", body = ApiResponse<ProductColorList>)
    ),
    tag = "Catalog"
)]
pub async fn list_product_colors(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductColorList>>> {
    let resp = catalog_service::list_product_colors(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/product-detail/{id}/",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Catalog"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = catalog_service::get_product(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/truck-logo-list/",
    responses(
        (status = 200, description = "Catalog truck logos", body = ApiResponse<ProductList>)
    ),
    tag = "Catalog"
)]
pub async fn list_truck_logos(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = catalog_service::list_truck_logos(&state).await?;
    Ok(Json(resp))
}
