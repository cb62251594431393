//! In-memory implementation of the zoos/animals REST API.
//!
//! Backs the core crate's integration tests and runs standalone via the
//! bundled bin. Create/replace/patch accept form-encoded bodies, matching
//! what the client sends; deletes return the removed record as JSON. List
//! endpoints honor `limit`/`offset` against an id-sorted view and ignore
//! any other query keys.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Zoo {
    pub id: u64,
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Animal {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub struct ZooPatch {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Server-side state. Animals are keyed by their owning zoo's id; there is
/// no create-animal endpoint, so tests seed them through `app_with_db`.
#[derive(Debug, Default)]
pub struct Store {
    pub zoos: HashMap<u64, Zoo>,
    pub animals: HashMap<u64, Vec<Animal>>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with_db(Db::default())
}

pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/zoos", get(list_zoos).post(create_zoo))
        .route(
            "/zoos/{id}",
            get(get_zoo).put(replace_zoo).patch(patch_zoo).delete(delete_zoo),
        )
        .route("/zoos/{id}/animals", get(list_animals))
        .route("/zoos/{id}/animals/{animal_id}", delete(delete_animal))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_db(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_db(db)).await
}

/// Apply `offset`/`limit` from the query string; unknown keys are ignored
/// and unparsable values fall back to no offset / no limit.
fn paginate<T>(items: Vec<T>, params: &HashMap<String, String>) -> Vec<T> {
    let offset = params.get("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
    let limit = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}

async fn list_zoos(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Zoo>> {
    let store = db.read().await;
    let mut zoos: Vec<Zoo> = store.zoos.values().cloned().collect();
    zoos.sort_by_key(|z| z.id);
    Json(paginate(zoos, &params))
}

async fn create_zoo(State(db): State<Db>, Form(zoo): Form<Zoo>) -> (StatusCode, Json<Zoo>) {
    db.write().await.zoos.insert(zoo.id, zoo.clone());
    (StatusCode::CREATED, Json(zoo))
}

async fn get_zoo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Zoo>, StatusCode> {
    let store = db.read().await;
    store.zoos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace_zoo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Form(input): Form<Zoo>,
) -> Result<Json<Zoo>, StatusCode> {
    let mut store = db.write().await;
    if !store.zoos.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    // The path segment, not the body, is authoritative for the id.
    let zoo = Zoo {
        id,
        name: input.name,
        address: input.address,
    };
    store.zoos.insert(id, zoo.clone());
    Ok(Json(zoo))
}

async fn patch_zoo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Form(input): Form<ZooPatch>,
) -> Result<Json<Zoo>, StatusCode> {
    let mut store = db.write().await;
    let zoo = store.zoos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        zoo.name = name;
    }
    if let Some(address) = input.address {
        zoo.address = address;
    }
    Ok(Json(zoo.clone()))
}

async fn delete_zoo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Zoo>, StatusCode> {
    let mut store = db.write().await;
    let zoo = store.zoos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    store.animals.remove(&id);
    Ok(Json(zoo))
}

async fn list_animals(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Animal>>, StatusCode> {
    let store = db.read().await;
    if !store.zoos.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let mut animals = store.animals.get(&id).cloned().unwrap_or_default();
    animals.sort_by_key(|a| a.id);
    Ok(Json(paginate(animals, &params)))
}

async fn delete_animal(
    State(db): State<Db>,
    Path((id, animal_id)): Path<(u64, u64)>,
) -> Result<Json<Animal>, StatusCode> {
    let mut store = db.write().await;
    let animals = store.animals.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let position = animals
        .iter()
        .position(|a| a.id == animal_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(animals.remove(position)))
}
