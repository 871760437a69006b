//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::api`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod outcome;
pub mod update;
pub mod validate;

pub use error::AgentUpdateError;
pub use outcome::{OperationOutcome, OutcomeStatus};
pub use update::{
    AgentUpdateRequest, apply_update, is_blank, is_blank_char, parse_resources, trim_blank,
};
pub use validate::AgentUpdateValidator;
