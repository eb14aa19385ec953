use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    entity,
    error::BusinessResult,
    models::{Business, CreateBusiness},
    repository::BusinessRepository,
};

/// SeaORM-backed business repository
#[derive(Debug, Clone)]
pub struct SqliteBusinessRepository {
    db: DatabaseConnection,
}

impl SqliteBusinessRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BusinessRepository for SqliteBusinessRepository {
    async fn create(&self, input: CreateBusiness) -> BusinessResult<Business> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(business_id = %model.id, owner_id = %model.owner_id, "Created business");
        Ok(model.into())
    }

    async fn get_by_owner(&self, owner_id: Uuid) -> BusinessResult<Option<Business>> {
        let model = entity::Entity::find()
            .filter(entity::Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }
}
