//! Application service: agent read and update use-cases.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use gantry_common::AgentInstance;
use thiserror::Error;

use crate::application::ports::{AgentRegistry, AuthorizationProvider, RegistryUpdateError};
use crate::domain::{AgentUpdateError, AgentUpdateRequest, AgentUpdateValidator, apply_update};

/// Failure of an agent use-case.
#[derive(Debug, Error)]
pub enum AgentServiceError {
    /// The request was rejected before anything was written.
    #[error(transparent)]
    Rejected(#[from] AgentUpdateError),

    /// The registry failed to persist an accepted update.
    #[error("failed to save agent: {0:#}")]
    Persistence(#[source] anyhow::Error),
}

/// Validate and apply `request` to the agent identified by `uuid`.
///
/// Steps:
/// 1. Resolve whether `username` is an administrator
/// 2. Inside one registry update, take the current agent (unknown uuids
///    become the null agent), run `can_continue` then `validate`, and apply
///    the change; the first failure is returned and nothing is saved
/// 3. The registry saves the changed agent before releasing it
///
/// # Errors
///
/// [`AgentServiceError::Rejected`] when a check fails (nothing is saved),
/// [`AgentServiceError::Persistence`] when the registry write fails.
pub fn update_agent(
    registry: &dyn AgentRegistry,
    authorization: &dyn AuthorizationProvider,
    username: &str,
    uuid: &str,
    request: &AgentUpdateRequest,
) -> Result<AgentInstance, AgentServiceError> {
    let is_administrator = authorization.is_administrator(username);

    let mut check_and_apply = |agent: &mut AgentInstance| -> Result<(), AgentUpdateError> {
        let validator = AgentUpdateValidator::new(is_administrator, agent, request);
        validator.can_continue().and_then(|()| validator.validate())?;
        apply_update(agent, request);
        Ok(())
    };
    let result = registry.update(uuid, &mut check_and_apply);

    let agent = match result {
        Ok(agent) => agent,
        Err(RegistryUpdateError::Rejected(err)) => {
            tracing::warn!(
                uuid,
                user = username,
                status = ?err.outcome().status,
                reason = %err,
                "agent update rejected",
            );
            return Err(err.into());
        }
        Err(RegistryUpdateError::Store(err)) => return Err(AgentServiceError::Persistence(err)),
    };

    tracing::info!(
        uuid,
        user = username,
        hostname = %agent.hostname,
        state = ?agent.config_state,
        "agent updated",
    );
    Ok(agent)
}

/// Fetch one agent.
///
/// # Errors
///
/// [`AgentUpdateError::NotFound`] when the registry does not know `uuid`.
pub fn find_agent(registry: &dyn AgentRegistry, uuid: &str) -> Result<AgentInstance, AgentUpdateError> {
    let agent = registry.find_agent(uuid);
    if agent.is_null_agent() {
        return Err(AgentUpdateError::NotFound {
            uuid: uuid.to_string(),
        });
    }
    Ok(agent)
}

/// All agents, sorted by hostname then uuid.
pub fn list_agents(registry: &dyn AgentRegistry) -> Vec<AgentInstance> {
    let mut agents = registry.list_agents();
    agents.sort_by(|a, b| a.hostname.cmp(&b.hostname).then_with(|| a.uuid.cmp(&b.uuid)));
    agents
}
