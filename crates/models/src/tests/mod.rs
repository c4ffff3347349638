
/// Item entity CRUD against a migrated store
pub mod crud_tests;
