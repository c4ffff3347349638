//! Service layer owning the item store.
//! - `db` holds the data-access functions over the sea-orm connection.
//! - `item` wraps them behind a repository trait and an application service
//!   that turns absent rows into `ServiceError::NotFound`.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod db;
pub mod item;
