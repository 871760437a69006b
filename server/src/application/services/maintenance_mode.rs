//! Application service: maintenance-mode toggling.

use gantry_common::MaintenanceModeInfo;

use crate::application::ports::{AuthorizationProvider, MaintenanceModeProvider};
use crate::domain::AgentUpdateError;

/// Switch maintenance mode on or off on behalf of `username`.
///
/// Only administrators may toggle it; the same forbidden outcome as agent
/// edits is returned otherwise.
///
/// # Errors
///
/// [`AgentUpdateError::Forbidden`] for non-administrators.
pub fn set_maintenance_mode(
    maintenance: &dyn MaintenanceModeProvider,
    authorization: &dyn AuthorizationProvider,
    username: &str,
    enabled: bool,
) -> Result<MaintenanceModeInfo, AgentUpdateError> {
    if !authorization.is_administrator(username) {
        tracing::warn!(user = username, enabled, "maintenance mode change rejected");
        return Err(AgentUpdateError::Forbidden);
    }

    let info = maintenance.set(enabled, username);
    tracing::info!(user = username, enabled, "maintenance mode changed");
    Ok(info)
}
