//! Migrator for the to-do store. A single `item` table; no relations.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_item;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_item::Migration)]
    }
}
