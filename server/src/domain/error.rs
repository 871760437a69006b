//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::api`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`.
//! Every variant maps to exactly one [`OperationOutcome`].

use thiserror::Error;

use crate::domain::outcome::OperationOutcome;

pub const FORBIDDEN_TO_EDIT: &str = "Unauthorized to edit.";
pub const NO_OPERATION_PERFORMED: &str = "No Operation performed on agent.";
pub const BLANK_ENVIRONMENTS: &str = "Environments are specified but they are blank.";
pub const BLANK_RESOURCES: &str = "Resources are specified but they are blank.";

// ── Agent update errors ───────────────────────────────────────────────────────

/// Rejection of a proposed agent-configuration update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentUpdateError {
    #[error("Unauthorized to edit.")]
    Forbidden,

    #[error("No Operation performed on agent.")]
    NoOperation,

    #[error("Agent '{uuid}' not found.")]
    NotFound { uuid: String },

    #[error("{0}")]
    InvalidArgument(String),

    #[error(
        "Pending agent [{}] must be explicitly enabled or disabled when performing any operation on it.",
        .uuids.join(", ")
    )]
    InvalidPendingAgentOperation { uuids: Vec<String> },

    #[error("Resources on elastic agent with uuid [{}] can not be updated.", .uuids.join(", "))]
    ElasticAgentResourceUpdate { uuids: Vec<String> },
}

impl AgentUpdateError {
    /// The single outcome this rejection reports to the caller.
    ///
    /// The elastic-resource rejection keeps an empty detail; existing
    /// clients only read its summary message.
    pub fn outcome(&self) -> OperationOutcome {
        let message = self.to_string();
        match self {
            AgentUpdateError::Forbidden => OperationOutcome::forbidden(message.clone(), message),
            AgentUpdateError::NotFound { .. } => {
                OperationOutcome::not_found(message.clone(), message)
            }
            AgentUpdateError::ElasticAgentResourceUpdate { .. } => {
                OperationOutcome::bad_request(message, String::new())
            }
            AgentUpdateError::NoOperation
            | AgentUpdateError::InvalidArgument(_)
            | AgentUpdateError::InvalidPendingAgentOperation { .. } => {
                OperationOutcome::bad_request(message.clone(), message)
            }
        }
    }

    /// Agent uuids the rejection is about, when it names any.
    pub fn identifiers(&self) -> &[String] {
        match self {
            AgentUpdateError::InvalidPendingAgentOperation { uuids }
            | AgentUpdateError::ElasticAgentResourceUpdate { uuids } => uuids,
            AgentUpdateError::NotFound { uuid } => std::slice::from_ref(uuid),
            _ => &[],
        }
    }
}
