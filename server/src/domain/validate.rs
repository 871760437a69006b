//! Agent update validation: pure checks, no I/O, no async.
//!
//! The caller resolves the administrator flag and the agent before the
//! validator is built; every check here only reads those facts.

use gantry_common::AgentInstance;

use crate::domain::error::{AgentUpdateError, BLANK_ENVIRONMENTS, BLANK_RESOURCES};
use crate::domain::update::{AgentUpdateRequest, is_blank, trim_blank};

/// Gate for one agent-configuration mutation.
///
/// Checks run in a fixed order and the first failure is returned; later
/// checks never run once an earlier one fails.
#[derive(Debug)]
pub struct AgentUpdateValidator<'a> {
    is_administrator: bool,
    agent: &'a AgentInstance,
    request: &'a AgentUpdateRequest,
}

impl<'a> AgentUpdateValidator<'a> {
    pub fn new(
        is_administrator: bool,
        agent: &'a AgentInstance,
        request: &'a AgentUpdateRequest,
    ) -> Self {
        Self {
            is_administrator,
            agent,
            request,
        }
    }

    /// Succeeds only if the caller is an administrator and the request
    /// actually asks for a change.
    ///
    /// # Errors
    ///
    /// [`AgentUpdateError::Forbidden`] for non-administrators, otherwise
    /// [`AgentUpdateError::NoOperation`] when nothing would change.
    pub fn can_continue(&self) -> Result<(), AgentUpdateError> {
        if !self.is_administrator {
            return Err(AgentUpdateError::Forbidden);
        }

        if self.request.is_any_operation_requested() {
            Ok(())
        } else {
            Err(AgentUpdateError::NoOperation)
        }
    }

    /// Run the well-formedness checks: existence, empty environments,
    /// blank resources, pending agent, elastic resources.
    ///
    /// # Errors
    ///
    /// The first failing check's [`AgentUpdateError`].
    pub fn validate(&self) -> Result<(), AgentUpdateError> {
        self.ensure_agent_exists()?;
        self.ensure_environments_not_empty()?;
        self.ensure_resources_not_blank()?;
        self.ensure_pending_agent_state_given()?;
        self.ensure_elastic_resources_untouched()
    }

    fn ensure_agent_exists(&self) -> Result<(), AgentUpdateError> {
        if self.agent.is_null_agent() {
            return Err(AgentUpdateError::NotFound {
                uuid: self.agent.uuid.clone(),
            });
        }
        Ok(())
    }

    fn ensure_environments_not_empty(&self) -> Result<(), AgentUpdateError> {
        if self.request.environments.as_ref().is_some_and(|envs| envs.is_empty()) {
            return Err(AgentUpdateError::InvalidArgument(BLANK_ENVIRONMENTS.to_string()));
        }
        Ok(())
    }

    fn ensure_resources_not_blank(&self) -> Result<(), AgentUpdateError> {
        if let Some(resources) = self.request.resources.as_deref()
            && trim_blank(resources).is_empty()
        {
            return Err(AgentUpdateError::InvalidArgument(BLANK_RESOURCES.to_string()));
        }
        Ok(())
    }

    // A pending agent only accepts updates that also approve or deny it.
    fn ensure_pending_agent_state_given(&self) -> Result<(), AgentUpdateError> {
        if !self.agent.is_pending() || self.request.state.is_explicit() {
            return Ok(());
        }
        Err(AgentUpdateError::InvalidPendingAgentOperation {
            uuids: vec![self.agent.uuid.clone()],
        })
    }

    // Elastic agents get their resources from the plugin that started them.
    fn ensure_elastic_resources_untouched(&self) -> Result<(), AgentUpdateError> {
        if is_blank(self.request.resources.as_deref()) || !self.agent.is_elastic() {
            return Ok(());
        }
        Err(AgentUpdateError::ElasticAgentResourceUpdate {
            uuids: vec![self.agent.uuid.clone()],
        })
    }
}
