//! Maestro and account endpoint integration tests.
//!
//! Covers the paged orders listing, single orders with the echoed
//! not-found identifier, the concatenated package keys, and the fixed
//! account fixtures.

use mock_api_test_utils::{TestFixtures, TestServer};
use serde_json::json;
use uuid::Uuid;

const ORDER_ID: &str = "0a0f3fd3-4895-4f65-a1a4-3eb35e9a7a92";
const PACKAGE_ID: &str = "f2a3f71a-a90c-4ac4-90bf-6d8942bbea28";

fn orders_template() -> serde_json::Value {
    json!([{
        "code": "not_found",
        "message": "No orders for this page",
        "details": [{"field": "_offset", "value": "unknown"}]
    }])
}

fn order_template() -> serde_json::Value {
    json!([{
        "code": "not_found",
        "message": "Order not found",
        "details": [{"field": "order_id", "value": "placeholder"}]
    }])
}

fn packages_template() -> serde_json::Value {
    json!([{
        "code": "not_found",
        "message": "Package not found",
        "details": [{"field": "package_id", "value": "placeholder"}]
    }])
}

fn maestro_fixtures() -> Result<TestFixtures, anyhow::Error> {
    let fixtures = TestFixtures::new()?;

    fixtures.write("maestro/orders", "sample0", &json!({"orders": ["first page"]}))?;
    fixtures.write("maestro/orders", "sample10", &json!({"orders": ["second page"]}))?;
    fixtures.write("maestro/orders", "not_found", &orders_template())?;

    fixtures.write("maestro/order", ORDER_ID, &json!({"id": ORDER_ID, "status": "shipped"}))?;
    fixtures.write("maestro/order", "not_found", &order_template())?;

    fixtures.write(
        "maestro/packages",
        &format!("{ORDER_ID}{PACKAGE_ID}"),
        &json!({"packages": [{"id": PACKAGE_ID}]}),
    )?;
    fixtures.write("maestro/packages", "not_found", &packages_template())?;

    fixtures.write(
        "maestro/package_items",
        &format!("{ORDER_ID}{PACKAGE_ID}"),
        &json!({"items": [{"sku": "A-1"}]}),
    )?;
    fixtures.write("maestro/package_items", "not_found", &packages_template())?;

    fixtures.write("account", "whoami", &json!({"user": "mock-user"}))?;
    fixtures.write("account", "whoami_tenants", &json!({"tenants": ["mock-tenant"]}))?;

    Ok(fixtures)
}

async fn spawn_maestro() -> Result<TestServer, anyhow::Error> {
    TestServer::spawn(maestro_fixtures()?).await
}

/// Any page size other than the fixed one is rejected.
#[tokio::test]
async fn test_orders_limit_must_be_10() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;

    let response = server
        .authed_client()?
        .get(format!("{}/maestro/v1/orders?_limit=5", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"], json!("Limit must be 10"));

    Ok(())
}

/// Offsets not aligned to the page size are rejected.
#[tokio::test]
async fn test_orders_offset_must_be_multiple_of_10() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;

    let response = server
        .authed_client()?
        .get(format!("{}/maestro/v1/orders?_offset=5", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"], json!("Offset must be multiple of 10"));

    Ok(())
}

/// Without query parameters the first page fixture is served.
#[tokio::test]
async fn test_orders_default_page() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;

    let response = server
        .authed_client()?
        .get(format!("{}/maestro/v1/orders", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, json!({"orders": ["first page"]}));

    Ok(())
}

/// The offset selects the page fixture by name.
#[tokio::test]
async fn test_orders_offset_selects_page() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;

    let response = server
        .authed_client()?
        .get(format!(
            "{}/maestro/v1/orders?_limit=10&_offset=10",
            server.url()
        ))
        .send()
        .await?;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, json!({"orders": ["second page"]}));

    Ok(())
}

/// A page with no fixture answers 404 with the orders template.
#[tokio::test]
async fn test_orders_missing_page_returns_template() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;

    let response = server
        .authed_client()?
        .get(format!("{}/maestro/v1/orders?_offset=90", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"], orders_template());

    Ok(())
}

/// A known order id returns its fixture.
#[tokio::test]
async fn test_order_retrieve_by_id() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;

    let response = server
        .authed_client()?
        .get(format!("{}/maestro/v1/orders/{ORDER_ID}", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["status"], json!("shipped"));

    Ok(())
}

/// An unknown order id answers 404 and echoes the id in the first
/// detail of the first error.
#[tokio::test]
async fn test_missing_order_echoes_requested_id() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;
    let missing = Uuid::new_v4();

    let response = server
        .authed_client()?
        .get(format!("{}/maestro/v1/orders/{missing}", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(
        body["detail"][0]["details"][0]["value"],
        json!(missing.to_string())
    );
    // The rest of the template survives the rewrite.
    assert_eq!(body["detail"][0]["message"], json!("Order not found"));

    Ok(())
}

/// Each not-found body gets its own copy of the template; one
/// request's echo never bleeds into the next.
#[tokio::test]
async fn test_echoed_id_does_not_leak_between_requests() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let client = server.authed_client()?;

    let response = client
        .get(format!("{}/maestro/v1/orders/{first}", server.url()))
        .send()
        .await?;
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"][0]["details"][0]["value"], json!(first.to_string()));

    let response = client
        .get(format!("{}/maestro/v1/orders/{second}", server.url()))
        .send()
        .await?;
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"][0]["details"][0]["value"], json!(second.to_string()));

    Ok(())
}

/// A malformed order id is rejected before the store is consulted.
#[tokio::test]
async fn test_order_id_must_be_uuid() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;

    let response = server
        .authed_client()?
        .get(format!("{}/maestro/v1/orders/order-1", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), 422);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"], json!("order_id must be a UUID"));

    Ok(())
}

/// Packages resolve through the concatenated order+package key.
#[tokio::test]
async fn test_packages_retrieve_by_concatenated_ids() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;

    let response = server
        .authed_client()?
        .get(format!(
            "{}/maestro/v1/orders/{ORDER_ID}/packages/{PACKAGE_ID}",
            server.url()
        ))
        .send()
        .await?;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["packages"][0]["id"], json!(PACKAGE_ID));

    Ok(())
}

/// An unknown package pair answers 404 with the packages template,
/// unmodified.
#[tokio::test]
async fn test_missing_packages_return_template_verbatim() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;
    let other = Uuid::new_v4();

    let response = server
        .authed_client()?
        .get(format!(
            "{}/maestro/v1/orders/{ORDER_ID}/packages/{other}",
            server.url()
        ))
        .send()
        .await?;

    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"], packages_template());

    Ok(())
}

/// Package ids get the same shape validation as order ids.
#[tokio::test]
async fn test_package_id_must_be_uuid() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;

    let response = server
        .authed_client()?
        .get(format!(
            "{}/maestro/v1/orders/{ORDER_ID}/packages/pkg-9",
            server.url()
        ))
        .send()
        .await?;

    assert_eq!(response.status(), 422);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"], json!("package_id must be a UUID"));

    Ok(())
}

/// Package items share the key scheme and template handling.
#[tokio::test]
async fn test_package_items_retrieve_and_miss() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;
    let client = server.authed_client()?;

    let response = client
        .get(format!(
            "{}/maestro/v1/orders/{ORDER_ID}/packages/{PACKAGE_ID}/items",
            server.url()
        ))
        .send()
        .await?;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["items"][0]["sku"], json!("A-1"));

    let other = Uuid::new_v4();
    let response = client
        .get(format!(
            "{}/maestro/v1/orders/{ORDER_ID}/packages/{other}/items",
            server.url()
        ))
        .send()
        .await?;
    assert_eq!(response.status(), 404);

    Ok(())
}

/// The account endpoints serve their fixed fixtures.
#[tokio::test]
async fn test_account_fixtures() -> Result<(), anyhow::Error> {
    let server = spawn_maestro().await?;
    let client = server.authed_client()?;

    let response = client
        .get(format!("{}/account/v1/whoami", server.url()))
        .send()
        .await?;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, json!({"user": "mock-user"}));

    let response = client
        .get(format!("{}/account/v1/whoami/tenants", server.url()))
        .send()
        .await?;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, json!({"tenants": ["mock-tenant"]}));

    Ok(())
}
