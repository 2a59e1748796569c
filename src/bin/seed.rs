use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use truck_sign_api::{
    config::AppConfig,
    db::{create_orm_conn, prepare_schema},
    dto::catalog::{NewCategory, NewLetteringItemCategory, NewProduct, NewProductColor},
    entity::{
        categories::{Column as CategoryCol, Entity as Categories},
        lettering_item_categories::{Column as LetteringCategoryCol, Entity as LetteringItemCategories},
        product_colors::{Column as ColorCol, Entity as ProductColors},
        products::{Column as ProductCol, Entity as Products},
    },
    services::catalog_service,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure the schema exists.
    prepare_schema(&orm).await?;

    let state = AppState {
        orm,
        truck_sign_category_id: config.truck_sign_category_id,
    };

    let truck_sign_id = ensure_category(&state, "Truck Sign", Decimal::new(4999, 2), 4).await?;
    ensure_category(&state, "Trailer Sign", Decimal::new(7999, 2), 6).await?;
    seed_lettering_categories(&state).await?;
    seed_colors(&state).await?;
    seed_logos(&state, truck_sign_id).await?;

    if truck_sign_id != config.truck_sign_category_id {
        tracing::warn!(
            truck_sign_id,
            configured = config.truck_sign_category_id,
            "set TRUCK_SIGN_CATEGORY_ID to the seeded truck sign category"
        );
    }
    tracing::info!(truck_sign_id, "seed completed");
    Ok(())
}

async fn ensure_category(
    state: &AppState,
    title: &str,
    base_price: Decimal,
    max_lettering: i32,
) -> anyhow::Result<i32> {
    let existing = Categories::find()
        .filter(CategoryCol::Title.eq(title))
        .one(&state.orm)
        .await?;
    if let Some(category) = existing {
        return Ok(category.id);
    }

    let resp = catalog_service::create_category(
        state,
        NewCategory {
            title: title.to_string(),
            image: format!("categories/{}.png", title.to_lowercase().replace(' ', "-")),
            base_price,
            max_amount_of_lettering_items: max_lettering,
            height: Decimal::new(60, 0),
            width: Decimal::new(90, 0),
        },
    )
    .await?;
    let category = resp
        .data
        .ok_or_else(|| anyhow::anyhow!("category {title} was not returned"))?;
    tracing::info!(title, id = category.id, "seeded category");
    Ok(category.id)
}

async fn seed_lettering_categories(state: &AppState) -> anyhow::Result<()> {
    let categories = [
        ("Company Name", Decimal::new(1500, 2)),
        ("DOT Number", Decimal::new(1000, 2)),
        ("MC Number", Decimal::new(1000, 2)),
        ("City and State", Decimal::new(1250, 2)),
    ];

    for (title, price) in categories {
        let exists = LetteringItemCategories::find()
            .filter(LetteringCategoryCol::Title.eq(title))
            .one(&state.orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        catalog_service::create_lettering_item_category(
            state,
            NewLetteringItemCategory {
                title: title.to_string(),
                price,
            },
        )
        .await?;
    }

    tracing::info!("seeded lettering item categories");
    Ok(())
}

async fn seed_colors(state: &AppState) -> anyhow::Result<()> {
    let colors = [
        ("#000000", "Black"),
        ("#FFFFFF", "White"),
        ("#C0C0C0", "Chrome"),
        ("#D4AF37", "Gold"),
    ];

    for (hex, nickname) in colors {
        let exists = ProductColors::find()
            .filter(ColorCol::ColorInHex.eq(hex))
            .one(&state.orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        catalog_service::create_product_color(
            state,
            NewProductColor {
                color_in_hex: Some(hex.to_string()),
                color_nickname: Some(nickname.to_string()),
            },
        )
        .await?;
    }

    tracing::info!("seeded product colors");
    Ok(())
}

async fn seed_logos(state: &AppState, category_id: i32) -> anyhow::Result<()> {
    let logos = ["Classic Shield", "Eagle Wings", "Highway Star"];

    for title in logos {
        let exists = Products::find()
            .filter(ProductCol::Title.eq(title))
            .one(&state.orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        let slug = title.to_lowercase().replace(' ', "-");
        catalog_service::create_product(
            state,
            NewProduct {
                category_id: Some(category_id),
                title: title.to_string(),
                image: Some(format!("logos/{slug}.png")),
                detail_image: Some(format!("logos/{slug}-detail.png")),
                is_uploaded: false,
            },
        )
        .await?;
    }

    tracing::info!("seeded truck logos");
    Ok(())
}
