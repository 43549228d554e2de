use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{CreatedItem, GeneratedItems, Item, ItemEntry, UpdateItem},
    store::ITEM_DOES_NOT_EXIST,
    AppState,
};

/// Body returned (with 200) when listing or clearing an empty inventory.
fn no_items_added() -> Response {
    Json(json!({ "Error": "No items added" })).into_response()
}

/// Unwraps an `item_id` path segment that must be a positive integer.
fn positive_id(param: Result<Path<i64>, PathRejection>) -> AppResult<u64> {
    let Path(id) = param?;
    u64::try_from(id)
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Validation(format!("item_id must be greater than 0, got {}", id)))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(State(state): State<AppState>) -> Response {
    let inventory = state.inventory.read().await;
    info!(count = inventory.len(), "Listed items");

    if inventory.is_empty() {
        return no_items_added();
    }
    Json(inventory.items()).into_response()
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Item>> {
    let id = positive_id(item_id)?;
    let item = state.inventory.read().await.get(id)?.clone();

    info!(id, name = %item.name, "Fetched item");
    Ok(Json(item))
}

// ── Get by name ───────────────────────────────────────────────────────────────

pub async fn get_items_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<ItemEntry>>> {
    let found = state.inventory.read().await.find_by_name(&name)?;

    info!(query = %name, matches = found.len(), "Searched items by name");
    Ok(Json(found))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> AppResult<Json<CreatedItem>> {
    let Json(item) = payload?;
    let created = state.inventory.write().await.create(item);

    info!(id = created.item_id, name = %created.item.name, "Created item");
    Ok(Json(created))
}

// ── Generate ──────────────────────────────────────────────────────────────────

pub async fn generate_items(
    State(state): State<AppState>,
    num_items: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<GeneratedItems>> {
    let Path(requested) = num_items?;
    // A negative count generates nothing but is still echoed back.
    let count = u64::try_from(requested).unwrap_or(0);

    let generated_items = {
        let mut inventory = state.inventory.write().await;
        let mut rng = rand::thread_rng();
        inventory.generate(count, &mut rng)
    };

    info!(requested, generated = generated_items.len(), "Generated items");
    Ok(Json(GeneratedItems {
        message: format!("Generated {} items", requested),
        generated_items,
    }))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateItem>, JsonRejection>,
) -> AppResult<Json<ItemEntry>> {
    let Path(id) = item_id?;
    let Json(patch) = payload?;

    // Zero and negative ids are accepted here but can never name an item.
    let id = u64::try_from(id)
        .map_err(|_| AppError::NotFound(ITEM_DOES_NOT_EXIST.to_string()))?;
    let entry = state.inventory.write().await.update(id, patch)?;

    info!(id, "Updated item");
    Ok(Json(entry))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<serde_json::Value>> {
    let id = positive_id(item_id)?;
    let removed = state.inventory.write().await.delete(id)?;

    info!(id, name = %removed.name, "Deleted item");
    Ok(Json(json!({ "Success": "Item deleted!" })))
}

pub async fn delete_all_items(State(state): State<AppState>) -> Response {
    let removed = state.inventory.write().await.clear();
    info!(removed, "Cleared inventory");

    if removed == 0 {
        return no_items_added();
    }
    Json(json!({ "Success": "All items deleted!" })).into_response()
}
