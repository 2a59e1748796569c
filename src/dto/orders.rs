use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::not_blank;

/// Buyer contact and shipping details attached to an order.
#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
pub struct OrderDetails {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub user_email: String,
    #[serde(default)]
    pub user_first_name: String,
    #[serde(default)]
    pub user_last_name: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    pub comment: Option<String>,
    #[serde(default)]
    pub ordered: bool,
}

#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct LetteringItemInput {
    /// Title of the lettering item category, created on first use.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub lettering_items: Vec<LetteringItemInput>,
    pub product_color_id: Option<i32>,
    #[serde(default)]
    pub order: OrderDetails,
}

/// Direct order insert against an existing variation (seed data, back office).
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct NewOrder {
    pub product_variation_id: Option<i32>,
    pub ordered_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub details: OrderDetails,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct OrderUpdate {
    #[validate(custom(function = "not_blank"))]
    pub user_email: Option<String>,
    pub user_first_name: Option<String>,
    pub user_last_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub comment: Option<String>,
    pub ordered: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PaymentRequest {
    #[serde(default)]
    pub order: OrderUpdate,
}
