//! End-to-end tests through the HTTP router.
//!
//! Each test builds a router over its own seeded store and drives it with
//! `tower::ServiceExt::oneshot`, no socket involved.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use roster::{HttpServer, ServerConfig, StoreHandle, UpdateSemantics};
use serde_json::{json, Value};
use tower::ServiceExt;

fn router_with(config: ServerConfig) -> (Router, StoreHandle) {
    let store = StoreHandle::seeded();
    let router = HttpServer::new(config, store.clone()).router();
    (router, store)
}

fn router() -> Router {
    router_with(ServerConfig::default()).0
}

async fn post_graphql(router: &Router, query: &str) -> Value {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_seeded_collection_over_http() {
    let router = router();
    let result = post_graphql(&router, "{ allPersons { id name email age } }").await;
    assert_eq!(
        result["data"]["allPersons"],
        json!([
            {"id": 1, "name": "Max", "email": "max@gmail.com", "age": 21},
            {"id": 2, "name": "John", "email": "john@gmail.com", "age": 23},
            {"id": 3, "name": "Harry", "email": "harry@gmail.com", "age": 19},
        ])
    );
}

#[tokio::test]
async fn test_crud_session() {
    let router = router();

    let added = post_graphql(
        &router,
        r#"mutation { addPerson(name: "A", email: "a@x.com", age: 5) { id friends { id } } }"#,
    )
    .await;
    assert_eq!(added["data"]["addPerson"], json!({"id": 4, "friends": []}));

    let updated = post_graphql(
        &router,
        r#"mutation { updatePerson(id: 4, email: "new@x.com") { name email age } }"#,
    )
    .await;
    assert_eq!(
        updated["data"]["updatePerson"],
        json!({"name": "A", "email": "new@x.com", "age": 5})
    );

    let remaining = post_graphql(&router, "mutation { deletePerson(id: 4) { id } }").await;
    assert_eq!(
        remaining["data"]["deletePerson"],
        json!([{"id": 1}, {"id": 2}, {"id": 3}])
    );

    // The deleted id is not handed out again.
    let added = post_graphql(
        &router,
        r#"mutation { addPerson(name: "B", email: "b@x.com", age: 6) { id } }"#,
    )
    .await;
    assert_eq!(added["data"]["addPerson"]["id"], json!(5));
}

#[tokio::test]
async fn test_nested_friends_over_http() {
    let router = router();
    let result = post_graphql(
        &router,
        "{ person(id: 2) { name friends { name friends { id } } } }",
    )
    .await;
    assert_eq!(
        result["data"]["person"],
        json!({
            "name": "John",
            "friends": [
                {"name": "Max", "friends": [{"id": 3}]},
                {"name": "Harry", "friends": [{"id": 1}, {"id": 2}]},
            ]
        })
    );
}

#[tokio::test]
async fn test_validation_error_leaves_store_untouched() {
    let (router, store) = router_with(ServerConfig::default());
    let result = post_graphql(
        &router,
        r#"mutation { addPerson(name: "A", email: "a@x.com", age: "five") { id } }"#,
    )
    .await;
    assert!(result["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(store.snapshot().unwrap().len(), 3);
}

#[tokio::test]
async fn test_truthy_semantics_from_config() {
    let config = ServerConfig {
        update_semantics: UpdateSemantics::Truthy,
        ..Default::default()
    };
    let (router, _) = router_with(config);
    let result = post_graphql(
        &router,
        r#"mutation { updatePerson(id: 1, name: "", age: 0) { name age } }"#,
    )
    .await;
    assert_eq!(
        result["data"]["updatePerson"],
        json!({"name": "Max", "age": 21})
    );
}

#[tokio::test]
async fn test_graphiql_page() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/graphql")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8_lossy(&bytes).to_lowercase();
    assert!(page.contains("graphiql"));
}

#[tokio::test]
async fn test_graphiql_disabled() {
    let config = ServerConfig {
        graphiql: false,
        ..Default::default()
    };
    let (router, _) = router_with(config);
    let request = Request::builder()
        .method(Method::GET)
        .uri("/graphql")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_custom_mount_path() {
    let config = ServerConfig {
        graphql_path: "/api".to_string(),
        ..Default::default()
    };
    let (router, _) = router_with(config);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": "{ person(id: 1) { name } }" }).to_string()))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
