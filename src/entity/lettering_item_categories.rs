use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lettering_item_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lettering_item_variations::Entity")]
    LetteringItemVariations,
}

impl Related<super::lettering_item_variations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LetteringItemVariations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
