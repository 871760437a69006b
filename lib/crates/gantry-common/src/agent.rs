// lib/crates/gantry-common/src/agent.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Administrative state of a registered agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AgentConfigState {
    /// Registered but not yet approved by an administrator.
    #[default]
    Pending,
    Enabled,
    Disabled,
}

/// Provisioning details of an agent started by an elastic-agent plugin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElasticAgentMetadata {
    pub plugin_id: String,
    pub agent_id: String,
}

/// One execution agent as known to the agent registry.
///
/// Unknown uuids resolve to the null agent (see [`AgentInstance::null`]),
/// which is never persisted and never serialized by the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentInstance {
    pub uuid: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub environments: BTreeSet<String>,
    #[serde(default)]
    pub config_state: AgentConfigState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elastic: Option<ElasticAgentMetadata>,
    #[serde(skip)]
    null: bool,
}

impl AgentInstance {
    /// A freshly registered agent, pending approval.
    #[must_use]
    pub fn new(uuid: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            hostname: hostname.into(),
            ip_address: String::new(),
            resources: Vec::new(),
            environments: BTreeSet::new(),
            config_state: AgentConfigState::Pending,
            elastic: None,
            null: false,
        }
    }

    /// Sentinel for a uuid the registry does not know about.
    #[must_use]
    pub fn null(uuid: impl Into<String>) -> Self {
        Self {
            null: true,
            ..Self::new(uuid, "")
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: AgentConfigState) -> Self {
        self.config_state = state;
        self
    }

    #[must_use]
    pub fn with_elastic(mut self, plugin_id: impl Into<String>, agent_id: impl Into<String>) -> Self {
        self.elastic = Some(ElasticAgentMetadata {
            plugin_id: plugin_id.into(),
            agent_id: agent_id.into(),
        });
        self
    }

    pub fn is_null_agent(&self) -> bool {
        self.null
    }

    pub fn is_pending(&self) -> bool {
        !self.null && self.config_state == AgentConfigState::Pending
    }

    pub fn is_elastic(&self) -> bool {
        self.elastic.is_some()
    }
}
