use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::catalog::{NewLetteringItemVariation, NewProductVariation},
    entity::{
        LetteringItemCategories, ProductColors, Products,
        lettering_item_variations::{
            ActiveModel as LetteringActive, Column as LetteringCol, Entity as LetteringItemVariations,
            Model as LetteringModel,
        },
        product_colors,
        product_variations::{ActiveModel as VariationActive, Entity as ProductVariations, Model as VariationModel},
    },
    error::{AppError, AppResult},
    models::{LetteringItemVariation, ProductVariation},
    response::{ApiResponse, Meta},
    services::pricing,
    state::AppState,
    validation::{does_not_exist, field_errors},
};

pub async fn get_product_variation(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<ProductVariation>> {
    let variation = ProductVariations::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    let view = variation_view(&state.orm, variation).await?;
    Ok(ApiResponse::success("Product variation", view, None))
}

pub async fn create_product_variation(
    state: &AppState,
    payload: NewProductVariation,
) -> AppResult<ApiResponse<ProductVariation>> {
    let mut errors = field_errors(&payload);
    if let Some(product_id) = payload.product_id {
        if Products::find_by_id(product_id).one(&state.orm).await?.is_none() {
            errors.add("product_id", does_not_exist(product_id));
        }
    }
    errors.into_result()?;

    let product_id = payload
        .product_id
        .ok_or_else(|| AppError::BadRequest("product_id is required".into()))?;
    let color = resolve_color(&state.orm, payload.product_color_id).await?;

    let variation = VariationActive {
        id: NotSet,
        product_id: Set(product_id),
        product_color_id: Set(color.map(|c| c.id)),
        amount: Set(payload.amount),
    }
    .insert(&state.orm)
    .await?;

    let view = variation_view(&state.orm, variation).await?;
    Ok(ApiResponse::success(
        "Product variation created",
        view,
        Some(Meta::empty()),
    ))
}

pub async fn create_lettering_item_variation(
    state: &AppState,
    payload: NewLetteringItemVariation,
) -> AppResult<ApiResponse<LetteringItemVariation>> {
    let mut errors = field_errors(&payload);
    if let Some(variation_id) = payload.product_variation_id {
        if ProductVariations::find_by_id(variation_id)
            .one(&state.orm)
            .await?
            .is_none()
        {
            errors.add("product_variation_id", does_not_exist(variation_id));
        }
    }
    errors.into_result()?;

    let variation_id = payload
        .product_variation_id
        .ok_or_else(|| AppError::BadRequest("product_variation_id is required".into()))?;

    let category = match payload.lettering_item_category_id {
        Some(id) => LetteringItemCategories::find_by_id(id).one(&state.orm).await?,
        None => None,
    };
    if category.is_none() && payload.lettering_item_category_id.is_some() {
        tracing::warn!(
            lettering_item_category_id = ?payload.lettering_item_category_id,
            "unknown lettering item category, storing lettering without one"
        );
    }

    let item = LetteringActive {
        id: NotSet,
        lettering_item_category_id: Set(category.as_ref().map(|c| c.id)),
        lettering: Set(payload.lettering),
        product_variation_id: Set(variation_id),
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Lettering item created",
        LetteringItemVariation {
            id: item.id,
            lettering_item_category: category.map(Into::into),
            lettering: item.lettering,
            product_variation_id: item.product_variation_id,
        },
        Some(Meta::empty()),
    ))
}

/// Every lettering item attached to `variation`, in creation order.
pub async fn get_all_lettering_items<C: ConnectionTrait>(
    conn: &C,
    variation: &VariationModel,
) -> AppResult<Vec<LetteringModel>> {
    let items = LetteringItemVariations::find()
        .filter(LetteringCol::ProductVariationId.eq(variation.id))
        .order_by_asc(LetteringCol::Id)
        .all(conn)
        .await?;
    Ok(items)
}

/// Looks up an optional color. Unknown ids resolve to no color.
pub(crate) async fn resolve_color<C: ConnectionTrait>(
    conn: &C,
    product_color_id: Option<i32>,
) -> AppResult<Option<product_colors::Model>> {
    let Some(id) = product_color_id else {
        return Ok(None);
    };
    let color = ProductColors::find_by_id(id).one(conn).await?;
    if color.is_none() {
        tracing::warn!(product_color_id = id, "unknown product color, continuing without color");
    }
    Ok(color)
}

pub(crate) async fn variation_view<C: ConnectionTrait>(
    conn: &C,
    variation: VariationModel,
) -> AppResult<ProductVariation> {
    let product = Products::find_by_id(variation.product_id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    let total_price = pricing::variation_total_price(conn, &variation).await?;

    let color = match variation.product_color_id {
        Some(id) => ProductColors::find_by_id(id).one(conn).await?,
        None => None,
    };

    let items = LetteringItemVariations::find()
        .filter(LetteringCol::ProductVariationId.eq(variation.id))
        .order_by_asc(LetteringCol::Id)
        .find_also_related(LetteringItemCategories)
        .all(conn)
        .await?;

    let lettering_items = items
        .into_iter()
        .map(|(item, lettering_category)| LetteringItemVariation {
            id: item.id,
            lettering_item_category: lettering_category.map(Into::into),
            lettering: item.lettering,
            product_variation_id: item.product_variation_id,
        })
        .collect();

    Ok(ProductVariation {
        id: variation.id,
        product: product.into(),
        product_color: color.map(Into::into),
        amount: variation.amount,
        lettering_items,
        total_price,
    })
}
