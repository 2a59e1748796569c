pub mod categories;
pub mod comments;
pub mod lettering_item_categories;
pub mod lettering_item_variations;
pub mod orders;
pub mod product_colors;
pub mod product_variations;
pub mod products;

pub use categories::Entity as Categories;
pub use comments::Entity as Comments;
pub use lettering_item_categories::Entity as LetteringItemCategories;
pub use lettering_item_variations::Entity as LetteringItemVariations;
pub use orders::Entity as Orders;
pub use product_colors::Entity as ProductColors;
pub use product_variations::Entity as ProductVariations;
pub use products::Entity as Products;
