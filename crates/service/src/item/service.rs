use std::sync::Arc;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::item::repository::{ItemRepository, SeaOrmItemRepository};

/// Application service over the item store.
/// Absent ids surface as `ServiceError::NotFound` on every lookup and mutation.
pub struct ItemService<R: ItemRepository> {
    repo: Arc<R>,
}

impl ItemService<SeaOrmItemRepository> {
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmItemRepository::new(db)))
    }
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, description), fields(title_len = title.len()))]
    pub async fn create(&self, title: &str, description: &str) -> Result<models::item::Model, ServiceError> {
        let created = self.repo.create(title, description).await?;
        info!(id = created.id, "created item");
        Ok(created)
    }

    pub async fn list_all(&self) -> Result<Vec<models::item::Model>, ServiceError> { self.repo.list().await }

    pub async fn get(&self, id: i32) -> Result<models::item::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("item"))
    }

    #[instrument(skip(self, title, description))]
    pub async fn update(&self, id: i32, title: &str, description: &str) -> Result<models::item::Model, ServiceError> {
        let updated = self.repo.update(id, title, description).await?;
        info!(id, "updated item");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("item"));
        }
        info!(id, "deleted item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use std::collections::HashSet;

    async fn service() -> Result<ItemService<SeaOrmItemRepository>, anyhow::Error> {
        Ok(ItemService::from_db(get_db().await?))
    }

    #[tokio::test]
    async fn create_then_list_single_item() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let created = svc.create("Buy milk", "2%").await?;
        assert_eq!(created.id, 1);
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.description, "2%");

        assert_eq!(svc.list_all().await?, vec![created]);
        Ok(())
    }

    #[tokio::test]
    async fn blank_title_is_rejected_and_nothing_persisted() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let err = svc.create("  ", "desc").await.unwrap_err();
        assert!(err.is_validation());
        assert!(svc.list_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn absent_ids_are_not_found() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        assert!(svc.get(999).await.unwrap_err().is_not_found());
        assert!(svc.update(999, "t", "d").await.unwrap_err().is_not_found());
        assert!(svc.delete(999).await.unwrap_err().is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn update_first_of_two() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        svc.create("A", "").await?;
        svc.create("B", "").await?;

        let updated = svc.update(1, "A2", "").await?;
        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, "A2");

        let titles: Vec<(i32, String)> = svc.list_all().await?.into_iter().map(|m| (m.id, m.title)).collect();
        assert_eq!(titles, vec![(1, "A2".to_string()), (2, "B".to_string())]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_not_repeatable() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        svc.create("A", "").await?;
        svc.create("B", "").await?;

        svc.delete(2).await?;
        assert!(svc.get(2).await.unwrap_err().is_not_found());
        assert!(svc.delete(2).await.unwrap_err().is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn update_round_trip_keeps_created_at() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let created = svc.create("draft", "v1").await?;

        svc.update(created.id, "final", "v2").await?;
        let found = svc.get(created.id).await?;
        assert_eq!(found.title, "final");
        assert_eq!(found.description, "v2");
        assert_eq!(found.created_at, created.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn list_reflects_creates_deletes_and_last_writes() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let mut issued = HashSet::new();
        for i in 0..6 {
            let m = svc.create(&format!("item {i}"), &format!("d{i}")).await?;
            assert!(issued.insert(m.id), "id {} issued twice", m.id);
        }

        svc.delete(2).await?;
        svc.delete(5).await?;
        svc.update(3, "item 2 edited", "changed").await?;

        let again = svc.create("late", "").await?;
        assert!(issued.insert(again.id));

        let rows = svc.list_all().await?;
        assert_eq!(rows.len(), 7 - 2);
        let ids: Vec<i32> = rows.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 6, 7]);
        let edited = rows.iter().find(|m| m.id == 3).unwrap();
        assert_eq!(edited.title, "item 2 edited");
        assert_eq!(edited.description, "changed");
        Ok(())
    }
}
