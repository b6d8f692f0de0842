//! End-to-end tests for the item CRUD HTTP API.
//!
//! Each test spawns a fresh store and server on an ephemeral port and
//! drives it over real HTTP, so tests are isolated from each other.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use item_api::{config::ApiConfig, router::Router, server::Server};
use item_store::ItemStore;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let store = Arc::new(ItemStore::new());
    let router = Router::new(store, Arc::new(ApiConfig::default()));

    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
    let server = Server::bind(addr, router).await?;
    let base_url = format!("http://{}", server.local_addr()?);

    tokio::spawn(async move {
        if let Err(e) = server.serve().await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

async fn create_item(
    client: &reqwest::Client,
    app: &TestApp,
    name: &str,
) -> anyhow::Result<serde_json::Value> {
    let res = client
        .post(app.url("/api/items"))
        .json(&json!({ "name": name }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    Ok(res.json().await?)
}

#[tokio::test]
async fn list_returns_all_items() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    create_item(&client, &app, "Item for Testing").await?;

    let res = client.get(app.url("/api/items")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await?;
    let items = body.as_array().expect("list response should be an array");
    assert!(!items.is_empty());
    assert_eq!(items[0]["name"], "Item for Testing");
    Ok(())
}

#[tokio::test]
async fn create_returns_item_with_assigned_id() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let body = create_item(&client, &app, "Item 3").await?;
    assert!(body["id"].is_u64());
    assert_eq!(body["name"], "Item 3");
    Ok(())
}

#[tokio::test]
async fn create_assigns_distinct_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let first = create_item(&client, &app, "Item 1").await?;
    let second = create_item(&client, &app, "Item 2").await?;
    assert_ne!(first["id"], second["id"]);
    Ok(())
}

#[tokio::test]
async fn get_returns_single_item() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let created = create_item(&client, &app, "Item A").await?;
    let id = created["id"].as_u64().unwrap();

    let res = client
        .get(app.url(&format!("/api/items/{}", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body, created);

    let res = client.get(app.url("/api/items/999")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_rewrites_existing_item() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let created = create_item(&client, &app, "Item to Update").await?;
    let id = created["id"].as_u64().unwrap();

    let res = client
        .put(app.url(&format!("/api/items/{}", id)))
        .json(&json!({ "name": "Updated Item" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Updated Item");
    Ok(())
}

#[tokio::test]
async fn update_missing_item_returns_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .put(app.url("/api/items/999"))
        .json(&json!({ "name": "New Name" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["message"], "Item not found");
    Ok(())
}

#[tokio::test]
async fn delete_removes_item() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let created = create_item(&client, &app, "Item to Delete").await?;
    let id = created["id"].as_u64().unwrap();

    let res = client
        .delete(app.url(&format!("/api/items/{}", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["message"], "Item deleted successfully");

    // The deleted id is gone from the list and from direct lookups.
    let list: serde_json::Value = client
        .get(app.url("/api/items"))
        .send()
        .await?
        .json()
        .await?;
    assert!(list
        .as_array()
        .unwrap()
        .iter()
        .all(|item| item["id"] != id));

    let res = client
        .delete(app.url(&format!("/api/items/{}", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_missing_item_returns_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client.delete(app.url("/api/items/999")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["message"], "Item not found");
    Ok(())
}

#[tokio::test]
async fn create_without_name_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(app.url("/api/items"))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn non_integer_id_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client.delete(app.url("/api/items/abc")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_route_returns_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(app.url("/api/widgets")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unsupported_method_returns_405() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .patch(app.url("/api/items/1"))
        .json(&json!({ "name": "x" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    Ok(())
}
