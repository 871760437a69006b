//! End-to-end tests for the maintenance-mode API.

use axum::http::StatusCode;

use crate::harness::{ADMIN, app, get, post, send};

#[tokio::test]
async fn test_info_defaults_to_off() {
    let response = send(app(), get("/api/admin/maintenance_mode/info", None)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["enabled"], false);
}

#[tokio::test]
async fn test_admin_enable_then_info_reports_on() {
    let router = app();

    let response = send(router.clone(), post("/api/admin/maintenance_mode/enable", ADMIN)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["updated_by"], ADMIN);

    let response = send(router.clone(), get("/api/admin/maintenance_mode/info", None)).await;
    assert_eq!(response.json()["enabled"], true);

    let response = send(router, post("/api/admin/maintenance_mode/disable", ADMIN)).await;
    assert_eq!(response.json()["enabled"], false);
}

#[tokio::test]
async fn test_non_admin_enable_is_403() {
    let response = send(app(), post("/api/admin/maintenance_mode/enable", "mallory")).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.json()["message"], "Unauthorized to edit.");
}
