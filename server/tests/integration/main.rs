//! Integration tests for gantry server
//!
//! These tests drive the full axum router in-process with `tower::ServiceExt`.

mod agents_api;
mod maintenance_api;
mod pages;
