use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{categories, comments, lettering_item_categories, product_colors, products};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub base_price: Decimal,
    pub max_amount_of_lettering_items: i32,
    pub height: Decimal,
    pub width: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LetteringItemCategory {
    pub id: i32,
    pub title: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductColor {
    pub id: i32,
    pub color_in_hex: Option<String>,
    pub color_nickname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub category_id: i32,
    pub title: String,
    pub image: Option<String>,
    pub detail_image: Option<String>,
    pub is_uploaded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LetteringItemVariation {
    pub id: i32,
    pub lettering_item_category: Option<LetteringItemCategory>,
    pub lettering: String,
    pub product_variation_id: i32,
}

/// A configured product: color, amount, lettering and the derived price.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductVariation {
    pub id: i32,
    pub product: Product,
    pub product_color: Option<ProductColor>,
    pub amount: i32,
    pub lettering_items: Vec<LetteringItemVariation>,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub ordered_date: DateTime<Utc>,
    pub user_email: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub address1: String,
    pub address2: String,
    pub ordered: bool,
    pub product: ProductVariation,
    pub comment: Option<String>,
    pub payment: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: i32,
    pub user_email: String,
    pub image: String,
    pub text: Option<String>,
    pub visible: bool,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            image: model.image,
            base_price: model.base_price,
            max_amount_of_lettering_items: model.max_amount_of_lettering_items,
            height: model.height,
            width: model.width,
        }
    }
}

impl From<lettering_item_categories::Model> for LetteringItemCategory {
    fn from(model: lettering_item_categories::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            price: model.price,
        }
    }
}

impl From<product_colors::Model> for ProductColor {
    fn from(model: product_colors::Model) -> Self {
        Self {
            id: model.id,
            color_in_hex: model.color_in_hex,
            color_nickname: model.color_nickname,
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            category_id: model.category_id,
            title: model.title,
            image: model.image,
            detail_image: model.detail_image,
            is_uploaded: model.is_uploaded,
        }
    }
}

impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Self {
            id: model.id,
            user_email: model.user_email,
            image: model.image,
            text: model.text,
            visible: model.visible,
        }
    }
}
