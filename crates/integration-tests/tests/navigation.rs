//! Integration tests for role-gated navigation and the item editor.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use reqwest::StatusCode;

use inventory_pro_integration_tests::{
    DEMO_KEEPER_EMAIL, DEMO_MANAGER_EMAIL, DEMO_SECRET, TestContext,
};

async fn signed_in(email: &str) -> TestContext {
    let ctx = TestContext::new().await;
    let resp = ctx.sign_in(email, DEMO_SECRET).await;
    assert_eq!(resp.status(), StatusCode::OK);
    ctx
}

async fn active_screen(ctx: &TestContext) -> String {
    let (status, nav) = ctx.json("/api/navigation").await;
    assert_eq!(status, StatusCode::OK);
    nav["active_screen"].as_str().unwrap().to_string()
}

// =============================================================================
// Navigation Bar
// =============================================================================

#[tokio::test]
async fn test_manager_navigation_entries() {
    let ctx = signed_in(DEMO_MANAGER_EMAIL).await;

    let (_, nav) = ctx.json("/api/navigation").await;
    assert_eq!(nav["active_screen"], "overview");
    assert!(nav["edit_target"].is_null());
    assert_eq!(
        nav["screens"],
        serde_json::json!(["overview", "catalog", "new-item"])
    );
}

#[tokio::test]
async fn test_keeper_navigation_entries() {
    let ctx = signed_in(DEMO_KEEPER_EMAIL).await;

    let (_, nav) = ctx.json("/api/navigation").await;
    assert_eq!(nav["active_screen"], "catalog");
    assert_eq!(nav["screens"], serde_json::json!(["catalog", "new-item"]));
}

#[tokio::test]
async fn test_manager_switches_screens() {
    let ctx = signed_in(DEMO_MANAGER_EMAIL).await;

    let resp = ctx.post("/navigate", &[("screen", "catalog")]).await;
    let html = resp.text().await.unwrap();
    assert!(html.contains("Showing 5 of 5 products"));
    assert_eq!(active_screen(&ctx).await, "catalog");

    ctx.post("/navigate", &[("screen", "overview")]).await;
    assert_eq!(active_screen(&ctx).await, "overview");
}

#[tokio::test]
async fn test_keeper_cannot_open_overview() {
    let ctx = signed_in(DEMO_KEEPER_EMAIL).await;

    let resp = ctx.post("/navigate", &[("screen", "overview")]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(!html.contains("data-stat"));
    assert!(html.contains("Showing 5 of 5 products"));
    assert_eq!(active_screen(&ctx).await, "catalog");
}

#[tokio::test]
async fn test_unknown_screen_falls_back_to_role_default() {
    let ctx = signed_in(DEMO_MANAGER_EMAIL).await;
    ctx.post("/navigate", &[("screen", "catalog")]).await;

    ctx.post("/navigate", &[("screen", "reports")]).await;
    assert_eq!(active_screen(&ctx).await, "overview");

    let keeper = signed_in(DEMO_KEEPER_EMAIL).await;
    keeper.post("/navigate", &[("screen", "new-item")]).await;
    keeper.post("/navigate", &[("screen", "")]).await;
    assert_eq!(active_screen(&keeper).await, "catalog");
}

#[tokio::test]
async fn test_anonymous_navigation_redirects_to_sign_in() {
    let ctx = TestContext::new().await;

    let resp = ctx.post("/navigate", &[("screen", "catalog")]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("Welcome Back"));

    let (status, _) = ctx.json("/api/navigation").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Catalog Filters
// =============================================================================

#[tokio::test]
async fn test_catalog_text_and_category_filters() {
    let ctx = signed_in(DEMO_KEEPER_EMAIL).await;

    let html = ctx.get("/?q=cable").await.text().await.unwrap();
    assert!(html.contains("Showing 1 of 5 products"));
    assert!(html.contains("USB-C Cable"));

    let html = ctx
        .get("/?category=Electronics")
        .await
        .text()
        .await
        .unwrap();
    assert!(html.contains("Showing 3 of 5 products"));
    assert!(!html.contains("Laptop Stand</h3>"));

    let html = ctx
        .get("/?q=cable&category=Electronics")
        .await
        .text()
        .await
        .unwrap();
    assert!(html.contains("No products found"));
}

// =============================================================================
// Item Editor
// =============================================================================

#[tokio::test]
async fn test_add_item_flow() {
    let ctx = signed_in(DEMO_KEEPER_EMAIL).await;

    let html = ctx.post("/catalog/new", &[]).await.text().await.unwrap();
    assert!(html.contains("Add New Product"));
    assert_eq!(active_screen(&ctx).await, "item-editor");

    let resp = ctx
        .post(
            "/editor/save",
            &[
                ("name", ""),
                ("category", "Electronics"),
                ("price", "-3"),
                ("quantity", "ten"),
                ("description", "A new gadget"),
            ],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Product name is required"));
    assert!(html.contains("Valid price is required"));
    assert!(html.contains("Valid quantity is required"));
    assert!(html.contains("A new gadget"));
    assert_eq!(active_screen(&ctx).await, "item-editor");

    let resp = ctx
        .post(
            "/editor/save",
            &[
                ("name", "Desk Lamp"),
                ("category", "Electronics"),
                ("price", "39.99"),
                ("quantity", "12"),
                ("description", "LED desk lamp"),
            ],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(active_screen(&ctx).await, "catalog");

    // Saves are not persisted.
    let html = resp.text().await.unwrap();
    assert!(html.contains("Showing 5 of 5 products"));
}

#[tokio::test]
async fn test_edit_item_prefills_form() {
    let ctx = signed_in(DEMO_MANAGER_EMAIL).await;

    let resp = ctx.post("/catalog/1/edit", &[]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Edit Product"));
    assert!(html.contains(r#"value="Wireless Headphones""#));
    assert!(html.contains(r#"value="150""#));
    assert!(html.contains(r#"value="45""#));
    assert!(html.contains(r#"<option value="Electronics" selected>"#));

    let (_, nav) = ctx.json("/api/navigation").await;
    assert_eq!(nav["active_screen"], "item-editor");
    assert_eq!(nav["edit_target"], 1);
}

#[tokio::test]
async fn test_edit_unknown_item_is_not_found() {
    let ctx = signed_in(DEMO_MANAGER_EMAIL).await;

    let resp = ctx.post("/catalog/99/edit", &[]).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(active_screen(&ctx).await, "overview");
}

#[tokio::test]
async fn test_cancel_returns_to_catalog() {
    let ctx = signed_in(DEMO_MANAGER_EMAIL).await;
    ctx.post("/catalog/2/edit", &[]).await;

    let resp = ctx.post("/editor/cancel", &[]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let (_, nav) = ctx.json("/api/navigation").await;
    assert_eq!(nav["active_screen"], "catalog");
    assert!(nav["edit_target"].is_null());
}

#[tokio::test]
async fn test_navigation_away_drops_edit_target() {
    let ctx = signed_in(DEMO_MANAGER_EMAIL).await;
    ctx.post("/catalog/3/edit", &[]).await;

    ctx.post("/navigate", &[("screen", "new-item")]).await;
    let (_, nav) = ctx.json("/api/navigation").await;
    assert_eq!(nav["active_screen"], "item-editor");
    assert!(nav["edit_target"].is_null());
}

#[tokio::test]
async fn test_save_outside_editor_is_ignored() {
    let ctx = signed_in(DEMO_KEEPER_EMAIL).await;

    let resp = ctx.post("/editor/save", &[("name", "Stray")]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(active_screen(&ctx).await, "catalog");
}

// =============================================================================
// Statistics API
// =============================================================================

#[tokio::test]
async fn test_stats_are_manager_only() {
    let anonymous = TestContext::new().await;
    let (status, _) = anonymous.json("/api/stats").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let keeper = signed_in(DEMO_KEEPER_EMAIL).await;
    let (status, _) = keeper.json("/api/stats").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let manager = signed_in(DEMO_MANAGER_EMAIL).await;
    let (status, stats) = manager.json("/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_items"], 5);
    assert_eq!(stats["low_stock"], 1);
    assert_eq!(stats["categories"], 3);
    assert_eq!(stats["recent_activity"].as_array().unwrap().len(), 4);
    assert_eq!(stats["top_items"][0]["name"], "Wireless Headphones");
}
