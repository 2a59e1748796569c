pub mod catalog_service;
pub mod comment_service;
pub mod order_service;
pub mod pricing;
pub mod upload_service;
pub mod variation_service;
