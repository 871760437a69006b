//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the file-backed agent
//! registry, the asset manifest, and in-memory authorization and
//! maintenance-mode state.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::api` or `crate::web` are forbidden.

pub mod assets;
pub mod authorization;
pub mod maintenance;
pub mod registry;

pub use assets::ManifestAssetResolver;
pub use authorization::StaticAuthorization;
pub use maintenance::InMemoryMaintenanceMode;
pub use registry::FileAgentRegistry;
