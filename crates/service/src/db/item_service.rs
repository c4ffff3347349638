use sea_orm::{DatabaseConnection, DbErr, EntityTrait, ActiveModelTrait, Set, QueryOrder};
use models::item::{self, Entity as ItemEntity};
use tracing::debug;
use crate::errors::ServiceError;

/// List every item, oldest id first.
pub async fn list_items(db: &DatabaseConnection) -> Result<Vec<item::Model>, ServiceError> {
    let rows = ItemEntity::find()
        .order_by_asc(item::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Create an item after validation.
pub async fn create_item(db: &DatabaseConnection, title: &str, description: &str) -> Result<item::Model, ServiceError> {
    // validations are in models::item
    let created = item::create(db, title, description).await?;
    Ok(created)
}

/// Get an item by id.
pub async fn get_item(db: &DatabaseConnection, id: i32) -> Result<Option<item::Model>, ServiceError> {
    let found = ItemEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Overwrite title and description. `id` and `created_at` are left alone.
pub async fn update_item(
    db: &DatabaseConnection,
    id: i32,
    title: &str,
    description: &str,
) -> Result<item::Model, ServiceError> {
    let current = ItemEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else { return Err(ServiceError::not_found("item")); };
    item::validate_title(title)?;
    item::validate_description(description)?;

    let mut am: item::ActiveModel = existing.into();
    am.title = Set(title.to_string());
    am.description = Set(description.to_string());
    // row deleted between the read and the write
    let updated = am.update(db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => ServiceError::not_found("item"),
        other => ServiceError::Db(other.to_string()),
    })?;
    Ok(updated)
}

/// Delete an item; returns true if a row was removed.
pub async fn delete_item(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = ItemEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(id, rows_affected = res.rows_affected, "delete item");
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn item_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = create_item(&db, "Write report", "quarterly").await?;
        let found = get_item(&db, a.id).await?.unwrap();
        assert_eq!(found.title, "Write report");
        assert_eq!(found.description, "quarterly");

        let updated = update_item(&db, a.id, "Write final report", "").await?;
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.title, "Write final report");
        assert_eq!(updated.description, "");
        assert_eq!(updated.created_at, a.created_at);

        let list_all = list_items(&db).await?;
        assert_eq!(list_all, vec![updated]);

        let deleted = delete_item(&db, a.id).await?;
        assert!(deleted);
        let after = get_item(&db, a.id).await?;
        assert!(after.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn update_missing_is_not_found_before_validation() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = update_item(&db, 42, "", "").await.unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_blank_title_and_keeps_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_item(&db, "keep", "me").await?;

        let err = update_item(&db, a.id, "   ", "changed").await.unwrap_err();
        assert!(err.is_validation());

        let found = get_item(&db, a.id).await?.unwrap();
        assert_eq!(found, a);
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_reports_false() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(!delete_item(&db, 7).await?);
        Ok(())
    }
}
