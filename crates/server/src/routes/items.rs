use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{errors::ApiError, routes::ServerState, views};

/// Create form on the listing page. Both fields must be submitted for a create to happen.
#[derive(Debug, Deserialize)]
pub struct CreateItemForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

/// Fields default to empty so an unknown id is reported before the title is checked.
#[derive(Debug, Deserialize)]
pub struct UpdateItemForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

pub async fn index(State(state): State<ServerState>) -> Result<Html<String>, ApiError> {
    let items = state.items.list_all().await?;
    Ok(Html(views::index(&items, None)))
}

/// Create when the form carries both fields, then always render the full list.
/// A rejected title is shown on the page with 422; a missing field is ignored.
pub async fn create(
    State(state): State<ServerState>,
    Form(input): Form<CreateItemForm>,
) -> Result<Response, ApiError> {
    let mut notice = None;
    match (input.title.as_deref(), input.desc.as_deref()) {
        (Some(title), Some(desc)) => match state.items.create(title, desc).await {
            Ok(_) => {}
            Err(e) => match e.validation_message() {
                Some(msg) => {
                    info!(reason = %msg, "item_create_rejected");
                    notice = Some(msg.to_string());
                }
                None => return Err(e.into()),
            },
        },
        _ => debug!("item_create_skipped: incomplete form"),
    }

    let items = state.items.list_all().await?;
    let status = if notice.is_some() { StatusCode::UNPROCESSABLE_ENTITY } else { StatusCode::OK };
    Ok((status, Html(views::index(&items, notice.as_deref()))).into_response())
}

pub async fn edit(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Html<String>, ApiError> {
    let item = state.items.get(id).await?;
    Ok(Html(views::edit(item.id, &item.title, &item.description, None)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Form(input): Form<UpdateItemForm>,
) -> Result<Response, ApiError> {
    match state.items.update(id, &input.title, &input.desc).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(e) => match e.validation_message() {
            Some(msg) => {
                info!(id, reason = %msg, "item_update_rejected");
                let page = views::edit(id, &input.title, &input.desc, Some(msg));
                Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
            }
            None => Err(e.into()),
        },
    }
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Redirect, ApiError> {
    state.items.delete(id).await?;
    Ok(Redirect::to("/"))
}

pub async fn about() -> Html<String> {
    Html(views::about())
}
