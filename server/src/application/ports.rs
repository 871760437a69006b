//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `gantry_common`, never
//! from `crate::infra` or `crate::api`.

use gantry_common::{AgentInstance, MaintenanceModeInfo};
use thiserror::Error;

use crate::domain::AgentUpdateError;

// ── Agent Ports ───────────────────────────────────────────────────────────────

/// Lookup and persistence of agent configuration.
pub trait AgentRegistry: Send + Sync {
    /// Resolve an agent by uuid. Unknown uuids yield [`AgentInstance::null`].
    fn find_agent(&self, uuid: &str) -> AgentInstance;
    /// All registered agents, in no particular order.
    fn list_agents(&self) -> Vec<AgentInstance>;
    /// Check and change one agent as a single step.
    ///
    /// `mutate` receives the current agent (the null agent for unknown
    /// uuids) and no other update of the registry interleaves between
    /// that read and the save of the changed agent.
    ///
    /// # Errors
    ///
    /// [`RegistryUpdateError::Rejected`] when `mutate` refuses the change
    /// (nothing is saved), [`RegistryUpdateError::Store`] when the write
    /// fails.
    fn update(
        &self,
        uuid: &str,
        mutate: &mut dyn FnMut(&mut AgentInstance) -> Result<(), AgentUpdateError>,
    ) -> Result<AgentInstance, RegistryUpdateError>;
}

/// Failure of [`AgentRegistry::update`].
#[derive(Debug, Error)]
pub enum RegistryUpdateError {
    #[error(transparent)]
    Rejected(#[from] AgentUpdateError),

    #[error("failed to save agent: {0:#}")]
    Store(#[source] anyhow::Error),
}

/// Decides what a caller is allowed to do.
pub trait AuthorizationProvider: Send + Sync {
    fn is_administrator(&self, username: &str) -> bool;
}

// ── Page Shell Ports ──────────────────────────────────────────────────────────

/// Source of the server's maintenance-mode status.
pub trait MaintenanceModeProvider: Send + Sync {
    fn info(&self) -> MaintenanceModeInfo;
    /// Switch maintenance mode on or off, recording who did it and when.
    fn set(&self, enabled: bool, updated_by: &str) -> MaintenanceModeInfo;
}

/// Maps logical asset names (`frameworks.css`) to servable paths.
pub trait AssetResolver: Send + Sync {
    fn asset_path(&self, name: &str) -> String;
}
