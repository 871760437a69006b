//! Tests for the maintenance-mode application service.

#![allow(clippy::unwrap_used)]

use gantry_server::application::ports::MaintenanceModeProvider;
use gantry_server::application::services::maintenance_mode::set_maintenance_mode;
use gantry_server::domain::AgentUpdateError;
use gantry_server::infra::{InMemoryMaintenanceMode, StaticAuthorization};

#[test]
fn test_admin_enables_and_disables() {
    let provider = InMemoryMaintenanceMode::new(false);
    let auth = StaticAuthorization::new(["admin"]);

    let info = set_maintenance_mode(&provider, &auth, "admin", true).unwrap();
    assert!(info.is_maintenance_mode());
    assert_eq!(info.updated_by(), Some("admin"));

    let info = set_maintenance_mode(&provider, &auth, "admin", false).unwrap();
    assert!(!info.is_maintenance_mode());
    assert!(!provider.info().is_maintenance_mode());
}

#[test]
fn test_non_admin_cannot_toggle() {
    let provider = InMemoryMaintenanceMode::new(false);
    let auth = StaticAuthorization::new(["admin"]);

    let err = set_maintenance_mode(&provider, &auth, "mallory", true).unwrap_err();

    assert_eq!(err, AgentUpdateError::Forbidden);
    assert!(!provider.info().is_maintenance_mode());
}
