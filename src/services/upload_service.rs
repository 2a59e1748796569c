use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};

use crate::{
    dto::uploads::UploadImageRequest,
    entity::{Categories, products::ActiveModel as ProductActive},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    state::AppState,
    validation::validate,
};

/// Registers a customer supplied image as a product of the truck sign category.
pub async fn upload_customer_image(
    state: &AppState,
    payload: UploadImageRequest,
) -> AppResult<ApiResponse<Product>> {
    validate(&payload)?;

    let txn = state.orm.begin().await?;
    let category = Categories::find_by_id(state.truck_sign_category_id)
        .one(&txn)
        .await?;
    let category = match category {
        Some(c) => c,
        None => {
            tracing::warn!(
                category_id = state.truck_sign_category_id,
                "truck sign category missing, rejecting upload"
            );
            return Err(AppError::NotFound);
        }
    };

    let title = format!("{} {}", category.title, Utc::now().to_rfc3339());
    let product = ProductActive {
        id: NotSet,
        category_id: Set(category.id),
        title: Set(title),
        image: Set(Some(payload.image.clone())),
        detail_image: Set(Some(payload.image)),
        is_uploaded: Set(true),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    tracing::info!(product_id = product.id, "customer image uploaded");
    Ok(ApiResponse::success(
        "Image uploaded",
        product.into(),
        Some(Meta::empty()),
    ))
}
