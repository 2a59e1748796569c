use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductQuery {
    pub category_id: Option<i32>,
    pub is_uploaded: Option<bool>,
}
