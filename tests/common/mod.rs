#![allow(dead_code)]

use rust_decimal::Decimal;
use truck_sign_api::{
    db::{create_orm_conn, create_schema},
    dto::{
        catalog::{NewCategory, NewLetteringItemCategory, NewProduct, NewProductColor},
        orders::OrderDetails,
    },
    models::{Category, LetteringItemCategory, Product, ProductColor},
    services::catalog_service,
    state::AppState,
};

/// Fresh in-memory database with every table created. The first category
/// inserted gets id 1, which is the configured truck sign category.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    create_schema(&orm).await?;
    Ok(AppState {
        orm,
        truck_sign_category_id: 1,
    })
}

pub async fn create_category(
    state: &AppState,
    title: &str,
    base_price: Decimal,
) -> anyhow::Result<Category> {
    let resp = catalog_service::create_category(
        state,
        NewCategory {
            title: title.into(),
            image: "test-path".into(),
            base_price,
            ..Default::default()
        },
    )
    .await?;
    Ok(resp.data.expect("category data"))
}

pub async fn create_product(
    state: &AppState,
    category_id: i32,
    title: &str,
) -> anyhow::Result<Product> {
    let resp = catalog_service::create_product(
        state,
        NewProduct {
            category_id: Some(category_id),
            title: title.into(),
            image: Some("test-path".into()),
            detail_image: Some("test-detail-path".into()),
            is_uploaded: false,
        },
    )
    .await?;
    Ok(resp.data.expect("product data"))
}

pub async fn create_color(state: &AppState, nickname: &str) -> anyhow::Result<ProductColor> {
    let resp = catalog_service::create_product_color(
        state,
        NewProductColor {
            color_in_hex: Some("#000000".into()),
            color_nickname: Some(nickname.into()),
        },
    )
    .await?;
    Ok(resp.data.expect("color data"))
}

pub async fn create_lettering_category(
    state: &AppState,
    title: &str,
    price: Decimal,
) -> anyhow::Result<LetteringItemCategory> {
    let resp = catalog_service::create_lettering_item_category(
        state,
        NewLetteringItemCategory {
            title: title.into(),
            price,
        },
    )
    .await?;
    Ok(resp.data.expect("lettering category data"))
}

pub fn order_details(email: &str) -> OrderDetails {
    OrderDetails {
        user_email: email.into(),
        user_first_name: "Jane".into(),
        user_last_name: "Hauler".into(),
        address1: "1 Interstate Way".into(),
        address2: "Unit 4".into(),
        comment: None,
        ordered: false,
    }
}
