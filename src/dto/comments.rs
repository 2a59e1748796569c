use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{models::Comment, validation::not_blank};

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct NewComment {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub user_email: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub image: String,
    pub text: Option<String>,
    #[serde(default)]
    pub visible: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CommentList {
    #[schema(value_type = Vec<Comment>)]
    pub items: Vec<Comment>,
}
