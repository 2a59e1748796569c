use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::not_blank;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UploadImageRequest {
    /// Path of the already stored image in the media bucket.
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub image: String,
}
