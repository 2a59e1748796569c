//! Checkout: turns a product plus the customer's customizations into an order.
//!
//! The whole sequence runs in one transaction. Any validation or storage
//! failure drops the transaction, so a variation never outlives a failed order.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::{
    dto::orders::{CreateOrderRequest, LetteringItemInput, NewOrder, OrderDetails, PaymentRequest},
    entity::{
        Categories, ProductVariations, Products,
        lettering_item_categories::{
            ActiveModel as LetteringCategoryActive, Column as LetteringCategoryCol,
            Entity as LetteringItemCategories, Model as LetteringCategoryModel,
        },
        lettering_item_variations::ActiveModel as LetteringActive,
        orders::{ActiveModel as OrderActive, Entity as Orders, Model as OrderModel},
        product_variations::ActiveModel as VariationActive,
    },
    error::{AppError, AppResult},
    models::Order,
    response::{ApiResponse, Meta},
    services::variation_service::{resolve_color, variation_view},
    state::AppState,
    validation::{BLANK, NULL, does_not_exist, field_errors, validate},
};

pub async fn create_order(
    state: &AppState,
    product_id: i32,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let txn = state.orm.begin().await?;

    let (product, category) = Products::find_by_id(product_id)
        .find_also_related(Categories)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let lettering: Vec<&LetteringItemInput> = payload
        .lettering_items
        .iter()
        .filter(|item| !item.text.trim().is_empty())
        .collect();

    let mut errors = field_errors(&payload.order);
    for (idx, item) in payload.lettering_items.iter().enumerate() {
        if !item.text.trim().is_empty() && item.title.trim().is_empty() {
            errors.add(format!("lettering_items[{idx}].title"), BLANK);
        }
    }
    if let Some(limit) = category
        .as_ref()
        .map(|c| c.max_amount_of_lettering_items)
        .filter(|limit| *limit >= 0)
    {
        if lettering.len() > limit as usize {
            errors.add(
                "lettering_items",
                format!("Ensure this field has no more than {limit} elements."),
            );
        }
    }
    errors.into_result()?;

    let variation = VariationActive {
        id: NotSet,
        product_id: Set(product.id),
        product_color_id: Set(None),
        amount: Set(1),
    }
    .insert(&txn)
    .await?;

    for item in &lettering {
        let lettering_category = lettering_category_by_title(&txn, item.title.trim()).await?;
        LetteringActive {
            id: NotSet,
            lettering_item_category_id: Set(Some(lettering_category.id)),
            lettering: Set(item.text.clone()),
            product_variation_id: Set(variation.id),
        }
        .insert(&txn)
        .await?;
    }

    let color = resolve_color(&txn, payload.product_color_id).await?;
    let mut variation: VariationActive = variation.into();
    variation.product_color_id = Set(color.map(|c| c.id));
    variation.amount = Set(1);
    let variation = variation.update(&txn).await?;

    let order = insert_order(&txn, variation.id, payload.order, Utc::now()).await?;
    let view = order_view(&txn, order).await?;

    txn.commit().await?;

    tracing::info!(
        order_id = view.id,
        product_id,
        variation_id = view.product.id,
        lettering_items = view.product.lettering_items.len(),
        total_price = %view.product.total_price,
        "order created"
    );

    Ok(ApiResponse::success("Order created", view, Some(Meta::empty())))
}

/// Inserts an order for an existing variation without running the checkout.
pub async fn create_order_record(
    state: &AppState,
    payload: NewOrder,
) -> AppResult<ApiResponse<Order>> {
    let mut errors = field_errors(&payload.details);
    match payload.product_variation_id {
        None => errors.add("product_variation_id", NULL),
        Some(id) => {
            if ProductVariations::find_by_id(id).one(&state.orm).await?.is_none() {
                errors.add("product_variation_id", does_not_exist(id));
            }
        }
    }
    errors.into_result()?;

    let variation_id = payload
        .product_variation_id
        .ok_or_else(|| AppError::BadRequest("product_variation_id is required".into()))?;
    let ordered_date = payload.ordered_date.unwrap_or_else(Utc::now);
    let order = insert_order(&state.orm, variation_id, payload.details, ordered_date).await?;

    let view = order_view(&state.orm, order).await?;
    Ok(ApiResponse::success("Order created", view, Some(Meta::empty())))
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<ApiResponse<Order>> {
    let order = Orders::find_by_id(id).one(&state.orm).await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };
    let view = order_view(&state.orm, order).await?;
    Ok(ApiResponse::success("OK", view, Some(Meta::empty())))
}

/// Applies buyer-editable fields before payment. No payment provider is
/// called; `payment` stays empty.
pub async fn update_order_payment(
    state: &AppState,
    id: i32,
    payload: PaymentRequest,
) -> AppResult<ApiResponse<Order>> {
    let existing = Orders::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    let update = payload.order;
    validate(&update)?;

    let mut active: OrderActive = existing.into();
    if let Some(user_email) = update.user_email {
        active.user_email = Set(user_email);
    }
    if let Some(first_name) = update.user_first_name {
        active.user_first_name = Set(first_name);
    }
    if let Some(last_name) = update.user_last_name {
        active.user_last_name = Set(last_name);
    }
    if let Some(address1) = update.address1 {
        active.address1 = Set(address1);
    }
    if let Some(address2) = update.address2 {
        active.address2 = Set(address2);
    }
    if let Some(comment) = update.comment {
        active.comment = Set(Some(comment));
    }
    if let Some(ordered) = update.ordered {
        active.ordered = Set(ordered);
    }

    let order = active.update(&state.orm).await?;
    tracing::info!(order_id = order.id, ordered = order.ordered, "order updated for payment");

    let view = order_view(&state.orm, order).await?;
    Ok(ApiResponse::success("Success", view, Some(Meta::empty())))
}

/// Finds the lettering item category named `title` (already trimmed), creating
/// it at price zero on first use. Concurrent callers converge on the same row through the
/// unique title index.
async fn lettering_category_by_title<C: ConnectionTrait>(
    conn: &C,
    title: &str,
) -> AppResult<LetteringCategoryModel> {
    let candidate = LetteringCategoryActive {
        id: NotSet,
        title: Set(title.to_owned()),
        price: Set(Decimal::ZERO),
    };
    let inserted = LetteringItemCategories::insert(candidate)
        .on_conflict(
            OnConflict::column(LetteringCategoryCol::Title)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    if inserted > 0 {
        tracing::debug!(title, "lettering item category created on first use");
    }

    LetteringItemCategories::find()
        .filter(LetteringCategoryCol::Title.eq(title))
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "lettering item category {title:?} missing after upsert"
            ))
        })
}

async fn insert_order<C: ConnectionTrait>(
    conn: &C,
    variation_id: i32,
    details: OrderDetails,
    ordered_date: chrono::DateTime<Utc>,
) -> AppResult<OrderModel> {
    let order = OrderActive {
        id: NotSet,
        ordered_date: Set(ordered_date.into()),
        user_email: Set(details.user_email),
        user_first_name: Set(details.user_first_name),
        user_last_name: Set(details.user_last_name),
        address1: Set(details.address1),
        address2: Set(details.address2),
        ordered: Set(details.ordered),
        product_variation_id: Set(variation_id),
        comment: Set(details.comment),
        payment_id: Set(None),
    }
    .insert(conn)
    .await?;
    Ok(order)
}

async fn order_view<C: ConnectionTrait>(conn: &C, model: OrderModel) -> AppResult<Order> {
    let variation = ProductVariations::find_by_id(model.product_variation_id)
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "order {} references missing variation {}",
                model.id,
                model.product_variation_id
            ))
        })?;
    let product = variation_view(conn, variation).await?;

    Ok(Order {
        id: model.id,
        ordered_date: model.ordered_date.with_timezone(&Utc),
        user_email: model.user_email,
        user_first_name: model.user_first_name,
        user_last_name: model.user_last_name,
        address1: model.address1,
        address2: model.address2,
        ordered: model.ordered,
        product,
        comment: model.comment,
        payment: model.payment_id,
    })
}
