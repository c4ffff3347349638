use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::item::Model>, ServiceError>;
    async fn create(&self, title: &str, description: &str) -> Result<models::item::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::item::Model>, ServiceError>;
    async fn update(&self, id: i32, title: &str, description: &str) -> Result<models::item::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmItemRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn list(&self) -> Result<Vec<models::item::Model>, ServiceError> {
        crate::db::item_service::list_items(&self.db).await
    }

    async fn create(&self, title: &str, description: &str) -> Result<models::item::Model, ServiceError> {
        crate::db::item_service::create_item(&self.db, title, description).await
    }

    async fn get(&self, id: i32) -> Result<Option<models::item::Model>, ServiceError> {
        crate::db::item_service::get_item(&self.db, id).await
    }

    async fn update(&self, id: i32, title: &str, description: &str) -> Result<models::item::Model, ServiceError> {
        crate::db::item_service::update_item(&self.db, id, title, description).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::item_service::delete_item(&self.db, id).await
    }
}
