use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Three-valued flag: explicitly true, explicitly false, or not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    True,
    False,
    #[default]
    Unset,
}

impl TriState {
    pub fn is_true(self) -> bool {
        self == TriState::True
    }

    pub fn is_false(self) -> bool {
        self == TriState::False
    }

    /// `true` when the caller asked for an explicit change either way.
    pub fn is_explicit(self) -> bool {
        self != TriState::Unset
    }

    /// Parse an optional raw value; `None` and blank strings are unset.
    pub fn from_option(raw: Option<&str>) -> Result<Self, InvalidTriState> {
        raw.map_or(Ok(TriState::Unset), str::parse)
    }
}

/// A value that is none of the accepted tri-state spellings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid agent_config_state '{0}'.")]
pub struct InvalidTriState(pub String);

impl FromStr for TriState {
    type Err = InvalidTriState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(TriState::Unset),
            "true" | "enabled" => Ok(TriState::True),
            "false" | "disabled" => Ok(TriState::False),
            _ => Err(InvalidTriState(s.to_string())),
        }
    }
}

/// Scope a health-state outcome is reported against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStateScope {
    Global,
}

impl fmt::Display for HealthStateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStateScope::Global => f.write_str("GLOBAL"),
        }
    }
}

/// Category of a health-state outcome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStateKind {
    General,
    Forbidden,
}

/// Current maintenance-mode status of the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaintenanceModeInfo {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
}

impl MaintenanceModeInfo {
    pub fn is_maintenance_mode(&self) -> bool {
        self.enabled
    }

    pub fn updated_by(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }

    pub fn updated_on(&self) -> Option<DateTime<Utc>> {
        self.updated_on
    }
}
