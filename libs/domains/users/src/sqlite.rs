use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{entity, error::UserResult, models::User, repository::UserRepository};

/// SeaORM-backed user repository
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    db: DatabaseConnection,
}

impl SqliteUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let active_model: entity::ActiveModel = user.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(user_id = %model.id, email = %model.email, "Created user");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn mark_verified(&self, id: Uuid) -> UserResult<bool> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::IsVerified, Expr::value(true))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(user_id = %id, "Marked user verified");
        }
        Ok(result.rows_affected > 0)
    }
}
