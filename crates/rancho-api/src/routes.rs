use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use chrono::Utc;
use rancho_core::db::{
    Database, HistoryRepository, ItemRepository, JsonHistoryRepository, JsonItemRepository,
};
use rancho_core::search::{ItemPage, PageRequest};
use rancho_core::{HistoryEntry, HistoryId, Item, ItemId, NewItem};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::{AppError, MessageBody};

/// Shared handler state.
///
/// The database sits behind one async mutex, held for the whole
/// mutate-then-save sequence of a request, so concurrent writers are
/// serialized.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    db: Arc<Mutex<Database>>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, db: Database) -> Self {
        Self {
            config,
            db: Arc::new(Mutex::new(db)),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/add", post(add_item))
        .route("/delete/{id}", delete(delete_item))
        .route("/increment/{id}", patch(increment_users))
        .route("/decrement/{id}", patch(decrement_users))
        .route("/historico", get(list_history))
        .route("/historico/delete/{id}", delete(delete_history_entry))
        .route("/historico/delete-all", delete(clear_history))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
    items: usize,
    historico: usize,
}

async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = state.db.lock().await;
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
        items: db.document().items.len(),
        historico: db.document().history.len(),
    })
}

#[derive(Debug, Deserialize)]
struct ListItemsQuery {
    page: Option<String>,
    #[serde(rename = "itemsPerPage")]
    items_per_page: Option<String>,
    search: Option<String>,
}

async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<ItemPage>, AppError> {
    let request = PageRequest::from_raw(
        query.page.as_deref(),
        query.items_per_page.as_deref(),
        query.search.as_deref(),
    );

    let mut db = state.db.lock().await;
    let page = JsonItemRepository::new(&mut db).list(&request)?;
    Ok(Json(page))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddItemResponse {
    message: &'static str,
    new_item: Item,
}

async fn add_item(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<AddItemResponse>), AppError> {
    let Json(fields) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let new_item = NewItem::from_fields(fields)?;

    let mut db = state.db.lock().await;
    let item = JsonItemRepository::new(&mut db).create(new_item)?;
    tracing::info!(endpoint = "add", item_id = %item.id, "Item added");

    Ok((
        StatusCode::CREATED,
        Json(AddItemResponse {
            message: "Item added successfully",
            new_item: item,
        }),
    ))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = ItemId::from(id);
    let mut db = state.db.lock().await;
    JsonItemRepository::new(&mut db).delete(&id)?;
    tracing::info!(endpoint = "delete", item_id = %id, "Item deleted");
    Ok(Json(MessageBody::new("Item deleted successfully")))
}

async fn increment_users(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = ItemId::from(id);
    let mut db = state.db.lock().await;
    let item = JsonItemRepository::new(&mut db).increment(&id)?;
    tracing::info!(endpoint = "increment", item_id = %id, users = item.users, "User count incremented");
    Ok(Json(MessageBody::new("User count incremented successfully")))
}

async fn decrement_users(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = ItemId::from(id);
    let mut db = state.db.lock().await;
    let item = JsonItemRepository::new(&mut db).decrement(&id)?;
    tracing::info!(endpoint = "decrement", item_id = %id, users = item.users, "User count decremented");
    Ok(Json(MessageBody::new("User count decremented successfully")))
}

#[derive(Debug, Serialize)]
struct HistoryResponse {
    items: Vec<HistoryEntry>,
}

async fn list_history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, AppError> {
    let mut db = state.db.lock().await;
    let items = JsonHistoryRepository::new(&mut db).list()?.to_vec();
    Ok(Json(HistoryResponse { items }))
}

async fn delete_history_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = HistoryId::from(id);
    let mut db = state.db.lock().await;
    JsonHistoryRepository::new(&mut db).delete(&id)?;
    tracing::info!(endpoint = "historico_delete", history_id = %id, "History entry deleted");
    Ok(Json(MessageBody::new("Historical item deleted successfully")))
}

async fn clear_history(State(state): State<AppState>) -> Result<Json<MessageBody>, AppError> {
    let mut db = state.db.lock().await;
    JsonHistoryRepository::new(&mut db).clear()?;
    tracing::info!(endpoint = "historico_delete_all", "History cleared");
    Ok(Json(MessageBody::new(
        "All historical items deleted successfully",
    )))
}
