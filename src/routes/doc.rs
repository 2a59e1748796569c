use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        catalog::{CategoryList, LetteringItemCategoryList, ProductColorList, ProductList},
        comments::{CommentList, NewComment},
        orders::{CreateOrderRequest, LetteringItemInput, OrderDetails, OrderUpdate, PaymentRequest},
        uploads::UploadImageRequest,
    },
    models::{
        Category, Comment, LetteringItemCategory, LetteringItemVariation, Order, Product,
        ProductColor, ProductVariation,
    },
    response::{ApiResponse, Meta},
    routes::{catalog, comments, health, orders, params, uploads},
    validation::FieldErrors,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::list_categories,
        catalog::list_lettering_item_categories,
        catalog::list_products,
        catalog::list_products_in_category,
        catalog::get_product_variation,
        catalog::list_product_colors,
        catalog::get_product,
        catalog::list_truck_logos,
        orders::create_order,
        orders::get_order,
        orders::get_order_payment,
        orders::update_order_payment,
        comments::list_comments,
        comments::create_comment,
        uploads::upload_customer_image
    ),
    components(
        schemas(
            Category,
            LetteringItemCategory,
            ProductColor,
            Product,
            ProductVariation,
            LetteringItemVariation,
            Order,
            Comment,
            CategoryList,
            LetteringItemCategoryList,
            ProductColorList,
            ProductList,
            CommentList,
            NewComment,
            CreateOrderRequest,
            LetteringItemInput,
            OrderDetails,
            OrderUpdate,
            PaymentRequest,
            UploadImageRequest,
            FieldErrors,
            params::ProductQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<ProductVariation>,
            ApiResponse<Order>,
            ApiResponse<Comment>,
            ApiResponse<CommentList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Categories, products, colors and lettering"),
        (name = "Orders", description = "Product customization and checkout"),
        (name = "Comments", description = "Customer testimonials"),
        (name = "Uploads", description = "Customer supplied artwork"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
