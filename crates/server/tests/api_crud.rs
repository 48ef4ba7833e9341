use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};

struct TestApp {
    base_url: String,
    db: DatabaseConnection,
}

/// Spawn the router on an ephemeral port over a fresh in-memory database.
async fn start_server() -> anyhow::Result<TestApp> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;

    let state = ServerState { db: db.clone() };
    let app: Router = routes::build_router(CorsLayer::very_permissive(), state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, db })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn health_is_public() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn customer_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/api/v1/customers", app.base_url))
        .json(&json!({"name": "Alice"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_i64().expect("id");
    assert_eq!(created["name"], "Alice");

    let res = c.get(format!("{}/api/v1/customers", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?.as_array().map(Vec::len), Some(1));

    let res = c
        .patch(format!("{}/api/v1/customers/{}", app.base_url, id))
        .json(&json!({"name": "Alicia"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["name"], "Alicia");

    let res = c
        .delete(format!("{}/api/v1/customers/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/api/v1/customers/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Customer not found");
    Ok(())
}

#[tokio::test]
async fn blank_customer_name_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/v1/customers", app.base_url))
        .json(&json!({"name": "  "}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["error"].as_str().unwrap_or_default().contains("blank"));
    Ok(())
}

#[tokio::test]
async fn malformed_body_yields_400_with_json_error() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let owner = models::customer::create(&app.db, "Shopper").await?;
    let cart = models::shopping_cart::create(&app.db, owner.id, None).await?;

    // required field missing: same status and body shape as any other
    // validation failure, not axum's plain-text 422
    let res = c
        .post(format!(
            "{}/api/v1/customers/{}/carts/{}/products",
            app.base_url, owner.id, cart.id
        ))
        .json(&json!({"product_id": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["error"].as_str().unwrap_or_default().contains("amount"));

    let res = c
        .post(format!("{}/api/v1/customers", app.base_url))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert!(res.json::<serde_json::Value>().await?["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn openapi_doc_describes_health_schema() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api-docs/openapi.json", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<serde_json::Value>().await?;
    assert!(doc["components"]["schemas"]["HealthResponse"].is_object());
    assert!(
        doc["paths"]["/health"]["get"]["responses"]["200"]["content"]["application/json"]
            ["schema"]["$ref"]
            .as_str()
            .unwrap_or_default()
            .ends_with("HealthResponse")
    );
    Ok(())
}

#[tokio::test]
async fn cart_ownership_is_enforced() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // cart creation under a missing customer propagates the customer error
    let res = c
        .post(format!("{}/api/v1/customers/999/carts", app.base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<serde_json::Value>().await?["error"], "Customer not found");

    let owner = models::customer::create(&app.db, "Owner").await?;
    let cart = models::shopping_cart::create(&app.db, owner.id, Some("mine")).await?;

    // wrong customer id reads as a missing cart
    let res = c
        .get(format!("{}/api/v1/customers/999/carts/{}", app.base_url, cart.id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<serde_json::Value>().await?["error"], "Cart not found");

    // the owner fetch succeeds
    let res = c
        .get(format!("{}/api/v1/customers/{}/carts/{}", app.base_url, owner.id, cart.id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["name"], "mine");
    Ok(())
}

#[tokio::test]
async fn cart_product_flow_with_stock_validation() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let owner = models::customer::create(&app.db, "Shopper").await?;
    let cart = models::shopping_cart::create(&app.db, owner.id, None).await?;
    let product = models::product::create(&app.db, "gadget", 10, 19.99).await?;
    let products_url = format!(
        "{}/api/v1/customers/{}/carts/{}/products",
        app.base_url, owner.id, cart.id
    );

    // floor check
    let res = c
        .post(&products_url)
        .json(&json!({"amount": 0, "product_id": product.id}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<serde_json::Value>().await?["error"],
        "Amount must be greater than 0"
    );

    // ceiling check
    let res = c
        .post(&products_url)
        .json(&json!({"amount": 11, "product_id": product.id}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<serde_json::Value>().await?["error"],
        "Amount must be less than stock"
    );

    // within range
    let res = c
        .post(&products_url)
        .json(&json!({"amount": 5, "product_id": product.id}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let cp_id = created["id"].as_i64().expect("id");
    assert_eq!(created["amount"], 5);

    // edit above current stock fails, the association keeps its amount
    let res = c
        .patch(format!("{}/{}", products_url, cp_id))
        .json(&json!({"amount": 11, "product_id": product.id}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<serde_json::Value>().await?["error"],
        "Amount must be less than stock"
    );

    let res = c.get(format!("{}/{}", products_url, cp_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["amount"], 5);

    let res = c.delete(format!("{}/{}", products_url, cp_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/{}", products_url, cp_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<serde_json::Value>().await?["error"],
        "Product in cart not found"
    );
    Ok(())
}

#[tokio::test]
async fn listing_an_unresolvable_cart_yields_empty_array() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api/v1/customers/1/carts/1/products", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!([]));
    Ok(())
}
