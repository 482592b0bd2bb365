//! CRUD handlers shared by every entity
//!
//! Each handler is generic over `E: Entity` and mounted once per entity path
//! by [`entity_routes`]. Handlers follow the thin-layer pattern: they
//! validate inputs, delegate to the entity's repository, and wrap the result
//! in the response envelope.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, patch as patch_route},
};
use axum_extra::extract::WithRejection;
use serde_json::{Map, Value};

use crate::{
    error::{Error, Result},
    handlers::extractors::EntityId,
    models::{ApiResponse, Entity, ListParams, ListRequest, ListResponse, entity::patch_params},
    queries::repository::Repository,
    state::AppState,
    validation::Validate,
};

fn repository<E: Entity>(state: &AppState) -> &dyn Repository<E> {
    E::repository(state.storage.as_ref())
}

fn ensure_affected(rows: u64) -> Result<()> {
    if rows == 0 {
        return Err(Error::NotFound("No rows affected".to_string()));
    }
    Ok(())
}

// ============================================================================
// CREATE
// ============================================================================

/// POST /{entity}
///
/// Creates a record and returns it as stored, including its generated `id`.
///
/// # HTTP Status Codes
/// - `201 CREATED`: Record created
/// - `400 BAD_REQUEST`: Malformed body or validation error
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn create<E: Entity>(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<E::Create>, Error>,
) -> Result<ApiResponse<E>> {
    input.validate()?;

    let repository = repository::<E>(&state);
    let id = repository.create(&input).await?;
    let record = repository.get_by_id(id).await?;

    Ok(ApiResponse::created(format!("Create {}", E::NAME), record))
}

// ============================================================================
// GET BY ID
// ============================================================================

/// GET /{entity}/{id}
///
/// # HTTP Status Codes
/// - `200 OK`: Record found
/// - `400 BAD_REQUEST`: Invalid UUID or no such record
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn get_by_id<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<ApiResponse<E>> {
    let record = repository::<E>(&state).get_by_id(id).await?;

    Ok(ApiResponse::ok(format!("Get By Id {}", E::NAME), record))
}

// ============================================================================
// LIST
// ============================================================================

/// GET /{entity}?offset=&limit=&search=
///
/// Lists records newest first. `search` is a case-insensitive substring
/// match on `name`. `count` is the total matching the search, not the page
/// size.
///
/// # HTTP Status Codes
/// - `200 OK`: Page returned, possibly empty
/// - `400 BAD_REQUEST`: `offset` or `limit` is not a non-negative integer
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn list<E: Entity>(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<ListParams>, Error>,
) -> Result<ApiResponse<ListResponse<E>>> {
    let request = ListRequest::from_params(&params, state.pagination)?;
    let page = repository::<E>(&state).list(&request).await?;

    Ok(ApiResponse::ok(format!("Get List {}", E::NAME), page))
}

// ============================================================================
// UPDATE
// ============================================================================

/// PUT /{entity}/{id}
///
/// Replaces every settable field and returns the updated record.
///
/// # HTTP Status Codes
/// - `202 ACCEPTED`: Record updated
/// - `400 BAD_REQUEST`: Invalid UUID, malformed body, or no such record
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn update<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    WithRejection(Json(input), _): WithRejection<Json<E::Update>, Error>,
) -> Result<ApiResponse<E>> {
    input.validate()?;

    let repository = repository::<E>(&state);
    ensure_affected(repository.update(id, &input).await?)?;
    let record = repository.get_by_id(id).await?;

    Ok(ApiResponse::accepted(format!("Update {}", E::NAME), record))
}

// ============================================================================
// DELETE
// ============================================================================

/// DELETE /{entity}/{id}
///
/// Succeeds whether or not the record existed.
///
/// # HTTP Status Codes
/// - `200 OK`: Record deleted
/// - `400 BAD_REQUEST`: Invalid UUID
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<ApiResponse<()>> {
    repository::<E>(&state).delete(id).await?;

    Ok(ApiResponse::ok(format!("Delete {}", E::NAME), ()))
}

// ============================================================================
// PATCH
// ============================================================================

/// PATCH /{entity}/{id}
///
/// Updates only the columns present in the body, e.g. `{"quantity": 5}`.
///
/// # HTTP Status Codes
/// - `200 OK`: Record patched
/// - `400 BAD_REQUEST`: Invalid UUID, empty body, unknown column, wrong value
///   type, or no such record
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn patch<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    WithRejection(Json(fields), _): WithRejection<Json<Map<String, Value>>, Error>,
) -> Result<ApiResponse<E>> {
    let params = patch_params::<E>(&fields)?;

    let repository = repository::<E>(&state);
    ensure_affected(repository.patch(id, &params).await?)?;
    let record = repository.get_by_id(id).await?;

    Ok(ApiResponse::ok(format!("Patch {}", E::NAME), record))
}

// ============================================================================
// ROUTES
// ============================================================================

/// The five CRUD routes for `E` under `/{path}`.
pub fn entity_routes<E: Entity>(path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("/{path}"), get(list::<E>).post(create::<E>))
        .route(
            &format!("/{path}/{{id}}"),
            get(get_by_id::<E>).put(update::<E>).delete(delete::<E>),
        )
}

/// `entity_routes` plus `PATCH /{path}/{id}`.
pub fn patchable_entity_routes<E: Entity>(path: &str) -> Router<AppState> {
    entity_routes::<E>(path).route(&format!("/{path}/{{id}}"), patch_route(patch::<E>))
}
