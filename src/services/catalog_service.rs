use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::catalog::{
        CategoryList, LetteringItemCategoryList, NewCategory, NewLetteringItemCategory, NewProduct,
        NewProductColor, ProductColorList, ProductList,
    },
    entity::{
        categories::{ActiveModel as CategoryActive, Column as CategoryCol, Entity as Categories},
        lettering_item_categories::{
            ActiveModel as LetteringCategoryActive, Column as LetteringCategoryCol,
            Entity as LetteringItemCategories,
        },
        product_colors::{ActiveModel as ColorActive, Column as ColorCol, Entity as ProductColors},
        products::{ActiveModel as ProductActive, Column as ProductCol, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{Category, LetteringItemCategory, Product, ProductColor},
    response::{ApiResponse, Meta},
    routes::params::ProductQuery,
    state::AppState,
    validation::{FieldErrors, does_not_exist, field_errors, validate},
};

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items: Vec<Category> = Categories::find()
        .order_by_asc(CategoryCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let meta = Meta::with_total(items.len() as i64);
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}

pub async fn list_lettering_item_categories(
    state: &AppState,
) -> AppResult<ApiResponse<LetteringItemCategoryList>> {
    let items: Vec<LetteringItemCategory> = LetteringItemCategories::find()
        .order_by_asc(LetteringCategoryCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let meta = Meta::with_total(items.len() as i64);
    Ok(ApiResponse::success(
        "Lettering item categories",
        LetteringItemCategoryList { items },
        Some(meta),
    ))
}

pub async fn list_product_colors(state: &AppState) -> AppResult<ApiResponse<ProductColorList>> {
    let items: Vec<ProductColor> = ProductColors::find()
        .order_by_asc(ColorCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let meta = Meta::with_total(items.len() as i64);
    Ok(ApiResponse::success("Product colors", ProductColorList { items }, Some(meta)))
}

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let mut condition = Condition::all();
    if let Some(category_id) = query.category_id {
        condition = condition.add(ProductCol::CategoryId.eq(category_id));
    }
    if let Some(is_uploaded) = query.is_uploaded {
        condition = condition.add(ProductCol::IsUploaded.eq(is_uploaded));
    }
    find_products(state, condition).await
}

pub async fn list_products_in_category(
    state: &AppState,
    category_id: i32,
) -> AppResult<ApiResponse<ProductList>> {
    find_products(state, Condition::all().add(ProductCol::CategoryId.eq(category_id))).await
}

/// Catalog logos: products of the configured truck sign category that were
/// not uploaded by customers.
pub async fn list_truck_logos(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let condition = Condition::all()
        .add(ProductCol::CategoryId.eq(state.truck_sign_category_id))
        .add(ProductCol::IsUploaded.eq(false));
    find_products(state, condition).await
}

async fn find_products(
    state: &AppState,
    condition: Condition,
) -> AppResult<ApiResponse<ProductList>> {
    let items: Vec<Product> = Products::find()
        .filter(condition)
        .order_by_asc(ProductCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let meta = Meta::with_total(items.len() as i64);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Product>> {
    let result = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Product::from);
    let result = match result {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", result, None))
}

pub async fn create_category(
    state: &AppState,
    payload: NewCategory,
) -> AppResult<ApiResponse<Category>> {
    validate(&payload)?;
    let category = CategoryActive {
        id: NotSet,
        title: Set(payload.title),
        image: Set(payload.image),
        base_price: Set(payload.base_price),
        max_amount_of_lettering_items: Set(payload.max_amount_of_lettering_items),
        height: Set(payload.height),
        width: Set(payload.width),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(category_id = category.id, title = %category.title, "category created");
    Ok(ApiResponse::success(
        "Category created",
        category.into(),
        Some(Meta::empty()),
    ))
}

pub async fn create_lettering_item_category(
    state: &AppState,
    payload: NewLetteringItemCategory,
) -> AppResult<ApiResponse<LetteringItemCategory>> {
    validate(&payload)?;
    let title = payload.title.trim().to_owned();
    let taken = LetteringItemCategories::find()
        .filter(LetteringCategoryCol::Title.eq(title.as_str()))
        .one(&state.orm)
        .await?;
    if taken.is_some() {
        return Err(AppError::Validation(FieldErrors::single(
            "title",
            "Lettering item category with this title already exists.",
        )));
    }

    let category = LetteringCategoryActive {
        id: NotSet,
        title: Set(title),
        price: Set(payload.price),
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Lettering item category created",
        category.into(),
        Some(Meta::empty()),
    ))
}

pub async fn create_product_color(
    state: &AppState,
    payload: NewProductColor,
) -> AppResult<ApiResponse<ProductColor>> {
    let color = ColorActive {
        id: NotSet,
        color_in_hex: Set(payload.color_in_hex),
        color_nickname: Set(payload.color_nickname),
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Product color created",
        color.into(),
        Some(Meta::empty()),
    ))
}

pub async fn create_product(
    state: &AppState,
    payload: NewProduct,
) -> AppResult<ApiResponse<Product>> {
    let mut errors = field_errors(&payload);
    if let Some(category_id) = payload.category_id {
        if Categories::find_by_id(category_id).one(&state.orm).await?.is_none() {
            errors.add("category_id", does_not_exist(category_id));
        }
    }
    errors.into_result()?;

    let category_id = payload
        .category_id
        .ok_or_else(|| AppError::BadRequest("category_id is required".into()))?;

    let product = ProductActive {
        id: NotSet,
        category_id: Set(category_id),
        title: Set(payload.title),
        image: Set(payload.image),
        detail_image: Set(payload.detail_image),
        is_uploaded: Set(payload.is_uploaded),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(product_id = product.id, category_id, "product created");
    Ok(ApiResponse::success(
        "Product created",
        product.into(),
        Some(Meta::empty()),
    ))
}
