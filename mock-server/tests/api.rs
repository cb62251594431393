use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_db, Animal, Store, Zoo};
use tokio::sync::RwLock;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn form_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.to_string())
        .unwrap()
}

fn bare_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// State with one zoo and two of its animals pre-seeded.
fn seeded_db() -> mock_server::Db {
    let mut store = Store::default();
    store.zoos.insert(
        1001,
        Zoo {
            id: 1001,
            name: "Jurassic Park".to_string(),
            address: "Guangzhou".to_string(),
        },
    );
    store
        .animals
        .insert(1001, vec![Animal { id: 7 }, Animal { id: 5 }]);
    Arc::new(RwLock::new(store))
}

// --- list ---

#[tokio::test]
async fn list_zoos_empty() {
    let resp = app()
        .oneshot(bare_request("GET", "/zoos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let zoos: Vec<Zoo> = body_json(resp).await;
    assert!(zoos.is_empty());
}

#[tokio::test]
async fn list_zoos_ignores_unknown_query_keys() {
    let resp = app_with_db(seeded_db())
        .oneshot(bare_request("GET", "/zoos?sortby=name&order=asc&animal_type_id=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let zoos: Vec<Zoo> = body_json(resp).await;
    assert_eq!(zoos.len(), 1);
}

// --- create ---

#[tokio::test]
async fn create_zoo_returns_201() {
    let resp = app()
        .oneshot(form_request(
            "POST",
            "/zoos",
            "id=1001&name=Jurassic+Park&address=Guangzhou",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let zoo: Zoo = body_json(resp).await;
    assert_eq!(zoo.id, 1001);
    assert_eq!(zoo.name, "Jurassic Park");
    assert_eq!(zoo.address, "Guangzhou");
}

#[tokio::test]
async fn create_zoo_missing_field_is_client_error() {
    let resp = app()
        .oneshot(form_request("POST", "/zoos", "name=Jurassic+Park"))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn create_zoo_without_content_type_is_unsupported() {
    let resp = app()
        .oneshot(bare_request("POST", "/zoos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// --- get ---

#[tokio::test]
async fn get_zoo_not_found() {
    let resp = app()
        .oneshot(bare_request("GET", "/zoos/1001"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_zoo_bad_id_returns_400() {
    let resp = app()
        .oneshot(bare_request("GET", "/zoos/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- replace / patch ---

#[tokio::test]
async fn replace_zoo_not_found() {
    let resp = app()
        .oneshot(form_request(
            "PUT",
            "/zoos/1001",
            "id=1001&name=Nope&address=Nowhere",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_zoo_applies_only_present_fields() {
    let resp = app_with_db(seeded_db())
        .oneshot(form_request("PATCH", "/zoos/1001", "address=Scient+City"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let zoo: Zoo = body_json(resp).await;
    assert_eq!(zoo.name, "Jurassic Park");
    assert_eq!(zoo.address, "Scient City");
}

// --- delete ---

#[tokio::test]
async fn delete_zoo_returns_deleted_representation() {
    let resp = app_with_db(seeded_db())
        .oneshot(bare_request("DELETE", "/zoos/1001"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let zoo: Zoo = body_json(resp).await;
    assert_eq!(zoo.id, 1001);
    assert_eq!(zoo.name, "Jurassic Park");
}

#[tokio::test]
async fn delete_zoo_not_found() {
    let resp = app()
        .oneshot(bare_request("DELETE", "/zoos/1001"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());
}

// --- animals ---

#[tokio::test]
async fn list_animals_sorted_by_id() {
    let resp = app_with_db(seeded_db())
        .oneshot(bare_request("GET", "/zoos/1001/animals"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animals: Vec<Animal> = body_json(resp).await;
    assert_eq!(animals.iter().map(|a| a.id).collect::<Vec<_>>(), vec![5, 7]);
}

#[tokio::test]
async fn list_animals_honors_limit_and_offset() {
    let resp = app_with_db(seeded_db())
        .oneshot(bare_request("GET", "/zoos/1001/animals?offset=1&limit=5"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animals: Vec<Animal> = body_json(resp).await;
    assert_eq!(animals.iter().map(|a| a.id).collect::<Vec<_>>(), vec![7]);
}

#[tokio::test]
async fn list_animals_unknown_zoo_not_found() {
    let resp = app()
        .oneshot(bare_request("GET", "/zoos/1001/animals"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_animal_returns_deleted_representation() {
    let resp = app_with_db(seeded_db())
        .oneshot(bare_request("DELETE", "/zoos/1001/animals/5"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animal: Animal = body_json(resp).await;
    assert_eq!(animal.id, 5);
}

#[tokio::test]
async fn delete_animal_unknown_animal_not_found() {
    let resp = app_with_db(seeded_db())
        .oneshot(bare_request("DELETE", "/zoos/1001/animals/99"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app_with_db(seeded_db()).into_service();

    // create two more zoos
    for (id, name) in [(1002, "Safari+World"), (1003, "Ocean+Park")] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(form_request(
                "POST",
                "/zoos",
                &format!("id={id}&name={name}&address=Guangzhou"),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // list is id-sorted with offset/limit applied
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("GET", "/zoos?offset=1&limit=2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let zoos: Vec<Zoo> = body_json(resp).await;
    assert_eq!(zoos.iter().map(|z| z.id).collect::<Vec<_>>(), vec![1002, 1003]);

    // replace keeps the path id authoritative
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(
            "PUT",
            "/zoos/1002",
            "id=9999&name=Safari+World&address=Panyu",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let replaced: Zoo = body_json(resp).await;
    assert_eq!(replaced.id, 1002);
    assert_eq!(replaced.address, "Panyu");

    // delete a zoo and its animals with it
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("DELETE", "/zoos/1001"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("GET", "/zoos/1001/animals"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // remaining zoos
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(bare_request("GET", "/zoos"))
        .await
        .unwrap();
    let zoos: Vec<Zoo> = body_json(resp).await;
    assert_eq!(zoos.iter().map(|z| z.id).collect::<Vec<_>>(), vec![1002, 1003]);
}
