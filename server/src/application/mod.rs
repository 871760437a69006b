//! Application layer: port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::api`, or `crate::web`.

pub mod ports;
pub mod services;

pub use ports::{
    AgentRegistry, AssetResolver, AuthorizationProvider, MaintenanceModeProvider,
    RegistryUpdateError,
};
