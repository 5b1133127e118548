//! Generic CRUD and list endpoints, instantiated once per screen.
//!
//! Every screen shares the same five handlers; the entity type parameter
//! selects the store through [`Collection`].

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use medsupply_store::{Action, Collection, ListQuery, Page, Record, Workspace};

use crate::error::ApiError;
use crate::state::AppState;

/// An entity that can be served over the API.
pub trait Resource: Collection + Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> Resource for T where T: Collection + Serialize + DeserializeOwned + Send + Sync + 'static {}

/// `GET /api/{screen}`
pub async fn list_records<T: Resource>(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Page<T>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let workspace = state.workspace.read().await;
    let page = query.apply(T::store(&workspace).items(), state.paging)?;
    Ok(Json(page))
}

/// `GET /api/{screen}/{id}`
pub async fn get_record<T: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<T>, ApiError> {
    let id = parse_id::<T>(&id)?;
    let workspace = state.workspace.read().await;
    stored::<T>(&workspace, id).map(Json)
}

/// `POST /api/{screen}`
///
/// A body without an `id` (or with `"id": null`) gets a fresh one. The
/// response is the stored record, including its derived fields.
pub async fn create_record<T: Resource>(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<T>), ApiError> {
    let Json(mut value) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| ApiError::Validation(String::from("request body must be a JSON object")))?;
    if object.get("id").is_none_or(Value::is_null) {
        object.insert(String::from("id"), Value::String(Uuid::now_v7().to_string()));
    }
    let record = decode::<T>(value)?;

    let mut workspace = state.workspace.write().await;
    let id = T::store_mut(&mut workspace).dispatch(Action::Create(record))?;
    Ok((StatusCode::CREATED, Json(stored::<T>(&workspace, id)?)))
}

/// `PUT /api/{screen}/{id}`
///
/// The id in the path wins over any id in the body.
pub async fn update_record<T: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<T>, ApiError> {
    let id = parse_id::<T>(&id)?;
    let Json(mut value) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    if let Some(object) = value.as_object_mut() {
        object.insert(String::from("id"), Value::String(id.to_string()));
    }
    let mut record = decode::<T>(value)?;
    record.set_id(id);

    let mut workspace = state.workspace.write().await;
    T::store_mut(&mut workspace).dispatch(Action::Update(record))?;
    Ok(Json(stored::<T>(&workspace, id)?))
}

/// `DELETE /api/{screen}/{id}`
pub async fn delete_record<T: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id::<T>(&id)?;
    let mut workspace = state.workspace.write().await;
    T::store_mut(&mut workspace).dispatch(Action::Delete(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/reset`
pub async fn reset(State(state): State<Arc<AppState>>) -> StatusCode {
    state.workspace.write().await.reset(&state.repository);
    StatusCode::NO_CONTENT
}

fn stored<T: Resource>(workspace: &Workspace, id: T::Id) -> Result<T, ApiError> {
    T::store(workspace)
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("{} not found: {id}", T::KIND)))
}

fn parse_id<T: Record>(raw: &str) -> Result<T::Id, ApiError> {
    Uuid::parse_str(raw)
        .map(T::Id::from)
        .map_err(|e| ApiError::InvalidUuid(format!("invalid {} id '{raw}': {e}", T::KIND)))
}

fn decode<T: Resource>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Validation(format!("invalid {}: {e}", T::KIND)))
}
