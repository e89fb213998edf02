//! Handlers for the `/items` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;
use vvv_core::envelope::Envelope;
use vvv_core::error::CoreError;
use vvv_core::instrument::instrument;
use vvv_core::types::DbId;
use vvv_db::models::item::{CreateItem, Item};
use vvv_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::response;
use crate::state::AppState;

/// POST /items
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<Envelope<Item>>)> {
    instrument("create_item", async move {
        input
            .validate()
            .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

        let item = ItemRepo::create(&state.pool, &input).await?;
        Ok(response::created(item, "item created"))
    })
    .await
}

/// GET /items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<Vec<Item>>>> {
    instrument("list_items", async move {
        let items = ItemRepo::list(&state.pool).await?;
        Ok(response::ok(items))
    })
    .await
}

/// GET /items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Item>>> {
    instrument("get_item", async move {
        let item = ItemRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
        Ok(response::ok(item))
    })
    .await
}
