mod common;

use std::collections::HashSet;

use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use truck_sign_api::{
    dto::{
        catalog::{NewCategory, NewLetteringItemVariation, NewProductVariation},
        orders::{CreateOrderRequest, LetteringItemInput, OrderDetails, OrderUpdate, PaymentRequest},
    },
    entity::{
        LetteringItemCategories, LetteringItemVariations, Orders, ProductVariations,
        lettering_item_categories,
    },
    error::AppError,
    services::{catalog_service, order_service, pricing, variation_service},
    state::AppState,
    validation::BLANK,
};

fn lettering(title: &str, text: &str) -> LetteringItemInput {
    LetteringItemInput {
        title: title.into(),
        text: text.into(),
    }
}

async fn sign_product(state: &AppState, base_price: Decimal) -> anyhow::Result<i32> {
    let category = common::create_category(state, "Truck Sign", base_price).await?;
    let product = common::create_product(state, category.id, "Eagle").await?;
    Ok(product.id)
}

#[tokio::test]
async fn order_with_one_lettering_item_and_no_color() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::new(10, 0)).await?;

    let order = order_service::create_order(
        &state,
        product_id,
        CreateOrderRequest {
            lettering_items: vec![lettering("Company Name", "ACME")],
            product_color_id: None,
            order: common::order_details("a@b.c"),
        },
    )
    .await?
    .data
    .expect("order");

    assert_eq!(order.user_email, "a@b.c");
    assert!(!order.ordered);
    assert!(order.payment.is_none());
    assert_eq!(order.product.product.id, product_id);
    assert_eq!(order.product.amount, 1);
    assert!(order.product.product_color.is_none());
    assert_eq!(order.product.lettering_items.len(), 1);

    let item = &order.product.lettering_items[0];
    assert_eq!(item.lettering, "ACME");
    let category = item.lettering_item_category.as_ref().expect("category");
    assert_eq!(category.title, "Company Name");
    assert_eq!(category.price, Decimal::ZERO);
    assert_eq!(order.product.total_price, Decimal::new(10, 0));

    assert_eq!(ProductVariations::find().count(&state.orm).await?, 1);
    assert_eq!(LetteringItemVariations::find().count(&state.orm).await?, 1);
    assert_eq!(Orders::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn blank_lettering_text_is_skipped() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::ZERO).await?;

    let order = order_service::create_order(
        &state,
        product_id,
        CreateOrderRequest {
            lettering_items: vec![
                lettering("Company Name", "   "),
                lettering("", ""),
                lettering("DOT", "USDOT 123456"),
            ],
            product_color_id: None,
            order: common::order_details("a@b.c"),
        },
    )
    .await?
    .data
    .expect("order");

    let texts: Vec<&str> = order
        .product
        .lettering_items
        .iter()
        .map(|i| i.lettering.as_str())
        .collect();
    assert_eq!(texts, vec!["USDOT 123456"]);
    // blank items never create a category either
    assert_eq!(LetteringItemCategories::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn color_is_attached_when_it_exists() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::ZERO).await?;
    let color = common::create_color(&state, "Black").await?;

    let order = order_service::create_order(
        &state,
        product_id,
        CreateOrderRequest {
            product_color_id: Some(color.id),
            order: common::order_details("a@b.c"),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("order");
    assert_eq!(order.product.product_color.map(|c| c.id), Some(color.id));
    assert!(order.product.lettering_items.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_color_still_places_the_order() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::ZERO).await?;

    let order = order_service::create_order(
        &state,
        product_id,
        CreateOrderRequest {
            product_color_id: Some(777),
            order: common::order_details("a@b.c"),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("order");
    assert!(order.product.product_color.is_none());
    assert_eq!(Orders::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn missing_product_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let err = order_service::create_order(
        &state,
        404,
        CreateOrderRequest {
            lettering_items: vec![lettering("Company Name", "ACME")],
            order: common::order_details("a@b.c"),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(ProductVariations::find().count(&state.orm).await?, 0);
    assert_eq!(LetteringItemCategories::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn invalid_details_leave_nothing_behind() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::ZERO).await?;

    let err = order_service::create_order(
        &state,
        product_id,
        CreateOrderRequest {
            lettering_items: vec![lettering("Company Name", "ACME")],
            product_color_id: None,
            order: OrderDetails {
                user_email: " ".into(),
                ..common::order_details("")
            },
        },
    )
    .await
    .unwrap_err();
    match err {
        AppError::Validation(fields) => {
            assert_eq!(fields.get("user_email"), Some(&[BLANK.to_string()][..]));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    assert_eq!(ProductVariations::find().count(&state.orm).await?, 0);
    assert_eq!(LetteringItemVariations::find().count(&state.orm).await?, 0);
    assert_eq!(LetteringItemCategories::find().count(&state.orm).await?, 0);
    assert_eq!(Orders::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn lettering_text_without_title_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::ZERO).await?;

    let err = order_service::create_order(
        &state,
        product_id,
        CreateOrderRequest {
            lettering_items: vec![lettering("Company Name", "ACME"), lettering(" ", "oops")],
            order: common::order_details("a@b.c"),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    match err {
        AppError::Validation(fields) => {
            assert!(fields.get("lettering_items[1].title").is_some());
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(Orders::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn existing_lettering_category_is_reused_with_its_price() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::new(10, 0)).await?;
    let existing = common::create_lettering_category(&state, "Company Name", Decimal::new(5, 0)).await?;

    let details = || CreateOrderRequest {
        lettering_items: vec![lettering("Company Name", "ACME")],
        order: common::order_details("a@b.c"),
        ..Default::default()
    };
    let first = order_service::create_order(&state, product_id, details())
        .await?
        .data
        .expect("order");
    let second = order_service::create_order(&state, product_id, details())
        .await?
        .data
        .expect("order");

    for order in [&first, &second] {
        let category = order.product.lettering_items[0]
            .lettering_item_category
            .as_ref()
            .expect("category");
        assert_eq!(category.id, existing.id);
        assert_eq!(category.price, Decimal::new(5, 0));
        assert_eq!(order.product.total_price, Decimal::new(15, 0));
    }

    let named = LetteringItemCategories::find()
        .filter(lettering_item_categories::Column::Title.eq("Company Name"))
        .count(&state.orm)
        .await?;
    assert_eq!(named, 1);
    Ok(())
}

#[tokio::test]
async fn lettering_items_can_be_listed_and_priced() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::new(20, 0)).await?;
    common::create_lettering_category(&state, "Company Name", Decimal::new(3, 0)).await?;
    common::create_lettering_category(&state, "DOT", Decimal::new(2, 0)).await?;

    let order = order_service::create_order(
        &state,
        product_id,
        CreateOrderRequest {
            lettering_items: vec![
                lettering("Company Name", "ACME"),
                lettering("DOT", "USDOT 1"),
                lettering("Phone", "555-0100"),
            ],
            order: common::order_details("a@b.c"),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("order");

    let variation = ProductVariations::find_by_id(order.product.id)
        .one(&state.orm)
        .await?
        .expect("variation row");

    let items = variation_service::get_all_lettering_items(&state.orm, &variation).await?;
    let texts: HashSet<String> = items.into_iter().map(|i| i.lettering).collect();
    let expected: HashSet<String> = ["ACME", "USDOT 1", "555-0100"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(texts, expected);

    // 20 + (3 + 2 + 0) * 1
    let total = pricing::variation_total_price(&state.orm, &variation).await?;
    assert_eq!(total, Decimal::new(25, 0));
    assert_eq!(order.product.total_price, total);

    let served = variation_service::get_product_variation(&state, variation.id)
        .await?
        .data
        .expect("variation");
    assert_eq!(served.total_price, total);
    Ok(())
}

#[tokio::test]
async fn lettering_limit_of_the_category_is_enforced() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let category = catalog_service::create_category(
        &state,
        NewCategory {
            title: "Door Sign".into(),
            image: "door.png".into(),
            max_amount_of_lettering_items: 1,
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("category");
    let product = common::create_product(&state, category.id, "Door").await?;

    let err = order_service::create_order(
        &state,
        product.id,
        CreateOrderRequest {
            lettering_items: vec![lettering("Company Name", "ACME"), lettering("DOT", "USDOT 1")],
            order: common::order_details("a@b.c"),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    match err {
        AppError::Validation(fields) => assert!(fields.get("lettering_items").is_some()),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(ProductVariations::find().count(&state.orm).await?, 0);

    // blank entries do not count against the limit
    order_service::create_order(
        &state,
        product.id,
        CreateOrderRequest {
            lettering_items: vec![lettering("Company Name", "ACME"), lettering("DOT", "")],
            order: common::order_details("a@b.c"),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(Orders::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn placed_order_can_be_retrieved() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::new(10, 0)).await?;

    let created = order_service::create_order(
        &state,
        product_id,
        CreateOrderRequest {
            lettering_items: vec![lettering("Company Name", "ACME")],
            order: common::order_details("a@b.c"),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("order");

    let fetched = order_service::get_order(&state, created.id)
        .await?
        .data
        .expect("order");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.product.id, created.product.id);
    assert_eq!(fetched.product.lettering_items.len(), 1);
    assert_eq!(fetched.product.total_price, created.product.total_price);

    let err = order_service::get_order(&state, created.id + 100)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn payment_step_updates_only_given_fields() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::new(10, 0)).await?;
    let created = order_service::create_order(
        &state,
        product_id,
        CreateOrderRequest {
            order: common::order_details("a@b.c"),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("order");

    let resp = order_service::update_order_payment(
        &state,
        created.id,
        PaymentRequest {
            order: OrderUpdate {
                address2: Some("Dock 9".into()),
                ordered: Some(true),
                ..Default::default()
            },
        },
    )
    .await?;
    assert_eq!(resp.message, "Success");
    let updated = resp.data.expect("order");
    assert!(updated.ordered);
    assert_eq!(updated.address2, "Dock 9");
    assert_eq!(updated.user_email, "a@b.c");
    assert_eq!(updated.address1, created.address1);
    assert!(updated.payment.is_none());

    let err = order_service::update_order_payment(
        &state,
        created.id,
        PaymentRequest {
            order: OrderUpdate {
                user_email: Some("".into()),
                ..Default::default()
            },
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let stored = Orders::find_by_id(created.id)
        .one(&state.orm)
        .await?
        .expect("order row");
    assert_eq!(stored.user_email, "a@b.c");

    let err = order_service::update_order_payment(&state, 999, PaymentRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn padded_lettering_title_reuses_the_priced_category() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::ONE).await?;
    let existing = common::create_lettering_category(&state, "Name", Decimal::new(5, 0)).await?;

    let order = order_service::create_order(
        &state,
        product_id,
        CreateOrderRequest {
            lettering_items: vec![lettering("Name ", "ACME"), lettering("  Fresh  ", "ACME")],
            order: common::order_details("a@b.c"),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("order");

    let categories: Vec<_> = order
        .product
        .lettering_items
        .iter()
        .map(|item| item.lettering_item_category.clone().expect("category"))
        .collect();
    assert_eq!(categories[0].id, existing.id);
    assert_eq!(categories[1].title, "Fresh");
    // 1 + (5 + 0) * 1
    assert_eq!(order.product.total_price, Decimal::new(6, 0));
    assert_eq!(LetteringItemCategories::find().count(&state.orm).await?, 2);
    Ok(())
}

#[tokio::test]
async fn out_of_range_price_is_an_error_not_a_crash() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let product_id = sign_product(&state, Decimal::ZERO).await?;
    let pricey = common::create_lettering_category(
        &state,
        "Gold Leaf",
        Decimal::from_i128_with_scale(10i128.pow(20), 0),
    )
    .await?;

    let variation = variation_service::create_product_variation(
        &state,
        NewProductVariation {
            product_id: Some(product_id),
            product_color_id: None,
            amount: i32::MAX,
        },
    )
    .await?
    .data
    .expect("variation");
    variation_service::create_lettering_item_variation(
        &state,
        NewLetteringItemVariation {
            lettering_item_category_id: Some(pricey.id),
            lettering: "ACME".into(),
            product_variation_id: Some(variation.id),
        },
    )
    .await?;

    let err = variation_service::get_product_variation(&state, variation.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
    Ok(())
}
