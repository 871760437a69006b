pub mod agent;
pub mod config;
pub mod types;

pub use agent::{AgentConfigState, AgentInstance, ElasticAgentMetadata};
pub use config::ServerConfig;
pub use types::*;
