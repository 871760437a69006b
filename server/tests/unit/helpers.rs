//! Shared fixtures and recording ports for unit tests.

#![allow(dead_code)]

use std::sync::Mutex;

use gantry_common::{AgentConfigState, AgentInstance};
use gantry_server::application::ports::{AgentRegistry, RegistryUpdateError};
use gantry_server::domain::AgentUpdateError;
use gantry_server::infra::FileAgentRegistry;

pub const ENABLED_UUID: &str = "agent-enabled";
pub const PENDING_UUID: &str = "agent-pending";
pub const ELASTIC_UUID: &str = "agent-elastic";

pub fn seeded_registry() -> FileAgentRegistry {
    FileAgentRegistry::in_memory([
        AgentInstance::new(ENABLED_UUID, "build-01").with_state(AgentConfigState::Enabled),
        AgentInstance::new(PENDING_UUID, "fresh-01"),
        AgentInstance::new(ELASTIC_UUID, "ea-01")
            .with_state(AgentConfigState::Enabled)
            .with_elastic("cd.go.contrib.elastic-agent.docker", "ea-01"),
    ])
}

// ── Registry that records saves ───────────────────────────────────────────────

/// Wraps a registry and records every save, optionally failing it.
pub struct RecordingRegistry {
    inner: FileAgentRegistry,
    fail_saves: bool,
    pub saved: Mutex<Vec<AgentInstance>>,
}

impl RecordingRegistry {
    pub fn new(inner: FileAgentRegistry) -> Self {
        Self {
            inner,
            fail_saves: false,
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(inner: FileAgentRegistry) -> Self {
        Self {
            fail_saves: true,
            ..Self::new(inner)
        }
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().map(|s| s.len()).unwrap_or_default()
    }

    fn record(&self, agent: &AgentInstance) {
        if let Ok(mut saved) = self.saved.lock() {
            saved.push(agent.clone());
        }
    }
}

impl AgentRegistry for RecordingRegistry {
    fn find_agent(&self, uuid: &str) -> AgentInstance {
        self.inner.find_agent(uuid)
    }

    fn list_agents(&self) -> Vec<AgentInstance> {
        self.inner.list_agents()
    }

    fn update(
        &self,
        uuid: &str,
        mutate: &mut dyn FnMut(&mut AgentInstance) -> Result<(), AgentUpdateError>,
    ) -> Result<AgentInstance, RegistryUpdateError> {
        if self.fail_saves {
            let mut agent = self.inner.find_agent(uuid);
            mutate(&mut agent)?;
            self.record(&agent);
            return Err(RegistryUpdateError::Store(anyhow::anyhow!("disk full")));
        }
        let agent = self.inner.update(uuid, mutate)?;
        self.record(&agent);
        Ok(agent)
    }
}
