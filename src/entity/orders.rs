use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ordered_date: DateTimeWithTimeZone,
    pub user_email: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub address1: String,
    pub address2: String,
    pub ordered: bool,
    pub product_variation_id: i32,
    pub comment: Option<String>,
    /// Reserved for a payment reference; nothing writes it yet.
    pub payment_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_variations::Entity",
        from = "Column::ProductVariationId",
        to = "super::product_variations::Column::Id"
    )]
    ProductVariations,
}

impl Related<super::product_variations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductVariations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
