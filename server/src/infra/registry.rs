//! Infrastructure implementation of the `AgentRegistry` port.
//!
//! `FileAgentRegistry` keeps agents in memory and, when backed by a YAML
//! file, writes every update back with an atomic write (temp file + rename).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use anyhow::{Context, Result};
use gantry_common::AgentInstance;

use crate::application::ports::{AgentRegistry, RegistryUpdateError};
use crate::domain::AgentUpdateError;

/// Agent registry held in memory, optionally persisted to a YAML file.
#[derive(Debug, Default)]
pub struct FileAgentRegistry {
    agents: RwLock<HashMap<String, AgentInstance>>,
    path: Option<PathBuf>,
}

impl FileAgentRegistry {
    /// A registry that only lives in memory.
    #[must_use]
    pub fn in_memory(agents: impl IntoIterator<Item = AgentInstance>) -> Self {
        Self {
            agents: RwLock::new(
                agents
                    .into_iter()
                    .map(|agent| (agent.uuid.clone(), agent))
                    .collect(),
            ),
            path: None,
        }
    }

    /// Load agents from a YAML list at `path`; saves are written back to it.
    ///
    /// A missing file starts an empty registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let agents = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading agents file {}", path.display()))?;
            serde_yaml::from_str::<Vec<AgentInstance>>(&content)
                .with_context(|| format!("parsing agents file {}", path.display()))?
        } else {
            Vec::new()
        };

        tracing::info!(path = %path.display(), count = agents.len(), "agent registry loaded");
        let mut registry = Self::in_memory(agents);
        registry.path = Some(path);
        Ok(registry)
    }

    /// Store `agent` in the locked map and write the file back, undoing the
    /// in-memory change if the write fails.
    fn commit(
        &self,
        agents: &mut HashMap<String, AgentInstance>,
        agent: AgentInstance,
    ) -> Result<()> {
        let uuid = agent.uuid.clone();
        let previous = agents.insert(uuid.clone(), agent);

        if let Some(path) = &self.path
            && let Err(err) = Self::write_file(path, agents)
        {
            // Keep memory and file in step.
            match previous {
                Some(previous) => agents.insert(uuid, previous),
                None => agents.remove(&uuid),
            };
            return Err(err);
        }
        Ok(())
    }

    fn write_file(path: &Path, agents: &HashMap<String, AgentInstance>) -> Result<()> {
        let mut sorted: Vec<&AgentInstance> = agents.values().collect();
        sorted.sort_by(|a, b| a.uuid.cmp(&b.uuid));
        let content = serde_yaml::to_string(&sorted).context("serializing agents")?;

        let temp_path = path.with_extension("yaml.tmp");
        std::fs::write(&temp_path, &content)
            .with_context(|| format!("writing temp file {}", temp_path.display()))?;
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("finalizing agents file {}", path.display()))?;
        Ok(())
    }
}

impl AgentRegistry for FileAgentRegistry {
    fn find_agent(&self, uuid: &str) -> AgentInstance {
        self.agents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(uuid)
            .cloned()
            .unwrap_or_else(|| AgentInstance::null(uuid))
    }

    fn list_agents(&self) -> Vec<AgentInstance> {
        self.agents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    fn update(
        &self,
        uuid: &str,
        mutate: &mut dyn FnMut(&mut AgentInstance) -> Result<(), AgentUpdateError>,
    ) -> Result<AgentInstance, RegistryUpdateError> {
        // Held until the changed agent is committed.
        let mut agents = self.agents.write().unwrap_or_else(PoisonError::into_inner);
        let mut agent = agents
            .get(uuid)
            .cloned()
            .unwrap_or_else(|| AgentInstance::null(uuid));

        mutate(&mut agent)?;

        if agent.is_null_agent() {
            return Err(RegistryUpdateError::Store(anyhow::anyhow!(
                "cannot save unknown agent '{uuid}'"
            )));
        }
        self.commit(&mut agents, agent.clone())
            .map_err(RegistryUpdateError::Store)?;
        tracing::debug!(uuid, "agent committed");
        Ok(agent)
    }
}
