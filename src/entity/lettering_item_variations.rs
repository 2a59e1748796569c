use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lettering_item_variations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lettering_item_category_id: Option<i32>,
    pub lettering: String,
    pub product_variation_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lettering_item_categories::Entity",
        from = "Column::LetteringItemCategoryId",
        to = "super::lettering_item_categories::Column::Id"
    )]
    LetteringItemCategories,
    #[sea_orm(
        belongs_to = "super::product_variations::Entity",
        from = "Column::ProductVariationId",
        to = "super::product_variations::Column::Id"
    )]
    ProductVariations,
}

impl Related<super::lettering_item_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LetteringItemCategories.def()
    }
}

impl Related<super::product_variations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductVariations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
