use crate::db::connect_in_memory;
use crate::errors::ModelError;
use crate::item;
use sea_orm::{EntityTrait, QueryOrder};
use anyhow::Result;

/// Test item create and read back
#[tokio::test]
async fn test_item_create_and_find() -> Result<()> {
    let db = connect_in_memory().await?;

    let created = item::create(&db, "Buy milk", "2%").await?;
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.description, "2%");

    let found = item::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found, Some(created));
    Ok(())
}

/// Blank titles never reach the table
#[tokio::test]
async fn test_item_create_rejects_blank_title() -> Result<()> {
    let db = connect_in_memory().await?;

    let err = item::create(&db, "  ", "desc").await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));

    let rows = item::Entity::find().all(&db).await?;
    assert!(rows.is_empty());
    Ok(())
}

/// Title is stored as given, surrounding whitespace included
#[tokio::test]
async fn test_item_title_not_trimmed_on_store() -> Result<()> {
    let db = connect_in_memory().await?;
    let created = item::create(&db, "  padded  ", "").await?;
    assert_eq!(created.title, "  padded  ");
    Ok(())
}

/// Ids keep increasing even after the newest row is deleted
#[tokio::test]
async fn test_item_ids_not_reused() -> Result<()> {
    let db = connect_in_memory().await?;

    let a = item::create(&db, "A", "").await?;
    let b = item::create(&db, "B", "").await?;
    assert!(b.id > a.id);

    item::Entity::delete_by_id(b.id).exec(&db).await?;
    let c = item::create(&db, "C", "").await?;
    assert!(c.id > b.id);

    let ids: Vec<i32> = item::Entity::find()
        .order_by_asc(item::Column::Id)
        .all(&db)
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![a.id, c.id]);
    Ok(())
}
