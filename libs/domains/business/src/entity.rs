use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the businesses table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "businesses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub business_name: String,
    pub city: String,
    pub region: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub business_description: Option<String>,
    pub logo: String,
    #[sea_orm(unique)]
    pub owner_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Business {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            business_name: model.business_name,
            city: model.city,
            region: model.region,
            business_description: model.business_description,
            logo: model.logo,
            owner_id: model.owner_id,
        }
    }
}

impl From<crate::models::CreateBusiness> for ActiveModel {
    fn from(input: crate::models::CreateBusiness) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            business_name: Set(input.business_name),
            city: Set(input.city),
            region: Set(input.region),
            business_description: Set(input.business_description),
            logo: Set(input.logo),
            owner_id: Set(input.owner_id),
        }
    }
}
