use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

pub const TITLE_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Title must contain something besides whitespace and fit the column.
pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    if title.trim().is_empty() {
        return Err(errors::ModelError::Validation("title required".into()));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("title must be at most {TITLE_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), errors::ModelError> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "description must be at most {DESCRIPTION_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Insert a new item. `id` comes from the table's autoincrement and
/// `created_at` is stamped here, once.
pub async fn create(db: &DatabaseConnection, title: &str, description: &str) -> Result<Model, errors::ModelError> {
    validate_title(title)?;
    validate_description(description)?;

    let am = ActiveModel {
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
