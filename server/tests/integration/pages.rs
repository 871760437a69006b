//! End-to-end tests for server-rendered pages.

use axum::http::StatusCode;

use crate::harness::{ADMIN, app, get, post, send};

#[tokio::test]
async fn test_health_is_ok() {
    let response = send(app(), get("/health", None)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_agents_page_for_admin() {
    let response = send(app(), get("/agents", Some(ADMIN))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<title>Agents - Gantry</title>"));
    assert!(response.body.contains("data-is-user-admin=\"true\""));
    assert!(response.body.contains("data-user-display-name=\"admin\""));
    assert!(response.body.contains("<div id=\"app-content\"><div id=\"agents\"></div></div>"));
}

#[tokio::test]
async fn test_root_page_for_anonymous_user() {
    let response = send(app(), get("/", None)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("data-is-user-admin=\"false\""));
    assert!(response.body.contains("data-user-display-name=\"anonymous\""));
}

#[tokio::test]
async fn test_page_shows_maintenance_banner_data() {
    let router = app();
    send(router.clone(), post("/api/admin/maintenance_mode/enable", ADMIN)).await;

    let response = send(router, get("/agents", Some(ADMIN))).await;

    assert!(response.body.contains("data-is-server-in-maintenance-mode=\"true\""));
    assert!(response.body.contains("data-maintenance-mode-updated-by=\"admin\""));
    assert!(response.body.contains("data-maintenance-mode-updated-on=\""));
}
