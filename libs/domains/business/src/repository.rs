use async_trait::async_trait;
use sea_orm::DbErr;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::BusinessResult;
use crate::models::{Business, CreateBusiness};

/// Repository trait for Business persistence
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Create a business. Fails if the owner already has one.
    async fn create(&self, input: CreateBusiness) -> BusinessResult<Business>;

    /// Get the business owned by a user
    async fn get_by_owner(&self, owner_id: Uuid) -> BusinessResult<Option<Business>>;
}

#[async_trait]
impl<T: BusinessRepository + ?Sized> BusinessRepository for Arc<T> {
    async fn create(&self, input: CreateBusiness) -> BusinessResult<Business> {
        (**self).create(input).await
    }

    async fn get_by_owner(&self, owner_id: Uuid) -> BusinessResult<Option<Business>> {
        (**self).get_by_owner(owner_id).await
    }
}

/// In-memory implementation of BusinessRepository (for development/testing)
///
/// Mirrors the unique `owner_id` constraint of the SQL schema.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBusinessRepository {
    businesses: Arc<RwLock<HashMap<Uuid, Business>>>,
}

impl InMemoryBusinessRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored businesses
    pub async fn len(&self) -> usize {
        self.businesses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.businesses.read().await.is_empty()
    }
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessRepository {
    async fn create(&self, input: CreateBusiness) -> BusinessResult<Business> {
        let mut businesses = self.businesses.write().await;

        if businesses.contains_key(&input.owner_id) {
            return Err(DbErr::Custom(
                "UNIQUE constraint failed: businesses.owner_id".to_string(),
            )
            .into());
        }

        let business = Business::new(input);
        businesses.insert(business.owner_id, business.clone());

        tracing::info!(business_id = %business.id, owner_id = %business.owner_id, "Created business");
        Ok(business)
    }

    async fn get_by_owner(&self, owner_id: Uuid) -> BusinessResult<Option<Business>> {
        let businesses = self.businesses.read().await;
        Ok(businesses.get(&owner_id).cloned())
    }
}
