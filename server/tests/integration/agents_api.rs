//! End-to-end tests for the agents JSON API.

#![allow(clippy::expect_used)]

use axum::http::StatusCode;
use serde_json::json;

use crate::harness::{ADMIN, app, get, patch, send};

#[tokio::test]
async fn test_list_agents_sorted() {
    let response = send(app(), get("/api/agents", None)).await;

    assert_eq!(response.status, StatusCode::OK);
    let hostnames: Vec<String> = response
        .json()
        .as_array()
        .map(|agents| {
            agents
                .iter()
                .filter_map(|a| a["hostname"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(hostnames, vec!["build-01", "ea-01", "fresh-01"]);
}

#[tokio::test]
async fn test_get_unknown_agent_is_404() {
    let response = send(app(), get("/api/agents/ghost", None)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body = response.json();
    assert_eq!(body["message"], "Agent 'ghost' not found.");
    assert_eq!(body["detail"], "Agent 'ghost' not found.");
    assert_eq!(body["scope"], "GLOBAL");
}

#[tokio::test]
async fn test_patch_updates_agent() {
    let body = json!({
        "hostname": "build-02",
        "resources": "linux,docker",
        "environments": ["prod", "qa"],
    });

    let response = send(app(), patch("/api/agents/enabled-1", ADMIN, &body)).await;

    assert_eq!(response.status, StatusCode::OK);
    let agent = response.json();
    assert_eq!(agent["hostname"], "build-02");
    assert_eq!(agent["resources"], json!(["linux", "docker"]));
    assert_eq!(agent["environments"], json!(["prod", "qa"]));
    assert_eq!(agent["config_state"], "Enabled");
}

#[tokio::test]
async fn test_patch_is_persisted_for_later_reads() {
    let router = app();
    let body = json!({ "agent_config_state": "Disabled" });

    let response = send(router.clone(), patch("/api/agents/enabled-1", ADMIN, &body)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = send(router, get("/api/agents/enabled-1", None)).await;
    assert_eq!(response.json()["config_state"], "Disabled");
}

#[tokio::test]
async fn test_patch_by_non_admin_is_403() {
    let body = json!({ "hostname": "build-02" });

    let response = send(app(), patch("/api/agents/enabled-1", "mallory", &body)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.json()["message"], "Unauthorized to edit.");
}

#[tokio::test]
async fn test_patch_without_changes_is_400() {
    let response = send(app(), patch("/api/agents/enabled-1", ADMIN, &json!({}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "No Operation performed on agent.");
}

#[tokio::test]
async fn test_patch_unknown_agent_is_404() {
    let body = json!({ "hostname": "build-02" });

    let response = send(app(), patch("/api/agents/ghost", ADMIN, &body)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_blank_resources_is_400() {
    let body = json!({ "resources": "   ", "hostname": "build-02" });

    let response = send(app(), patch("/api/agents/enabled-1", ADMIN, &body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["message"],
        "Resources are specified but they are blank."
    );
}

#[tokio::test]
async fn test_patch_empty_environments_is_400() {
    let body = json!({ "environments": [], "hostname": "build-02" });

    let response = send(app(), patch("/api/agents/enabled-1", ADMIN, &body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["message"],
        "Environments are specified but they are blank."
    );
}

#[tokio::test]
async fn test_patch_whitespace_environment_names_are_400() {
    let body = json!({ "environments": ["  ", "\t"], "hostname": "build-02" });

    let response = send(app(), patch("/api/agents/enabled-1", ADMIN, &body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["message"],
        "Environments are specified but they are blank."
    );
}

#[tokio::test]
async fn test_patch_blank_environment_names_are_dropped() {
    let body = json!({ "environments": ["prod", " "] });

    let response = send(app(), patch("/api/agents/enabled-1", ADMIN, &body)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["environments"], json!(["prod"]));
}

#[tokio::test]
async fn test_patch_pending_agent_needs_state() {
    let body = json!({ "hostname": "newhost" });

    let response = send(app(), patch("/api/agents/pending-1", ADMIN, &body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["message"],
        "Pending agent [pending-1] must be explicitly enabled or disabled when performing any operation on it."
    );
}

#[tokio::test]
async fn test_patch_elastic_resources_has_empty_detail() {
    let body = json!({ "resources": "linux" });

    let response = send(app(), patch("/api/agents/elastic-1", ADMIN, &body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(
        body["message"],
        "Resources on elastic agent with uuid [elastic-1] can not be updated."
    );
    assert_eq!(body["detail"], "");
}

#[tokio::test]
async fn test_patch_invalid_state_is_400() {
    let body = json!({ "agent_config_state": "maybe" });

    let response = send(app(), patch("/api/agents/enabled-1", ADMIN, &body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "Invalid agent_config_state 'maybe'.");
}

#[tokio::test]
async fn test_patch_malformed_json_is_400() {
    let request = axum::http::Request::patch("/api/agents/enabled-1")
        .header("X-Gantry-User", ADMIN)
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .expect("valid request");

    let response = send(app(), request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
