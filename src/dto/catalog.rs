use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    models::{Category, LetteringItemCategory, Product, ProductColor},
    validation::not_blank,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewCategory {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub image: String,
    #[serde(default)]
    pub base_price: Decimal,
    #[serde(default = "unlimited")]
    #[validate(range(min = -1, message = "Ensure this value is greater than or equal to -1."))]
    pub max_amount_of_lettering_items: i32,
    #[serde(default)]
    pub height: Decimal,
    #[serde(default)]
    pub width: Decimal,
}

impl Default for NewCategory {
    fn default() -> Self {
        Self {
            title: String::new(),
            image: String::new(),
            base_price: Decimal::ZERO,
            max_amount_of_lettering_items: unlimited(),
            height: Decimal::ZERO,
            width: Decimal::ZERO,
        }
    }
}

fn unlimited() -> i32 {
    -1
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct NewLetteringItemCategory {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub price: Decimal,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct NewProductColor {
    pub color_in_hex: Option<String>,
    pub color_nickname: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    #[validate(required(message = "This field cannot be null."))]
    pub category_id: Option<i32>,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    pub image: Option<String>,
    pub detail_image: Option<String>,
    #[serde(default)]
    pub is_uploaded: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewProductVariation {
    #[validate(required(message = "This field cannot be null."))]
    pub product_id: Option<i32>,
    pub product_color_id: Option<i32>,
    #[serde(default = "single")]
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub amount: i32,
}

impl Default for NewProductVariation {
    fn default() -> Self {
        Self {
            product_id: None,
            product_color_id: None,
            amount: single(),
        }
    }
}

fn single() -> i32 {
    1
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct NewLetteringItemVariation {
    pub lettering_item_category_id: Option<i32>,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub lettering: String,
    #[validate(required(message = "This field cannot be null."))]
    pub product_variation_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub items: Vec<Category>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct LetteringItemCategoryList {
    #[schema(value_type = Vec<LetteringItemCategory>)]
    pub items: Vec<LetteringItemCategory>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ProductColorList {
    #[schema(value_type = Vec<ProductColor>)]
    pub items: Vec<ProductColor>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
