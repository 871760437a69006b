//! Infrastructure implementation of the `MaintenanceModeProvider` port.

use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use gantry_common::MaintenanceModeInfo;

use crate::application::ports::MaintenanceModeProvider;

/// Process-local maintenance-mode flag.
#[derive(Debug, Default)]
pub struct InMemoryMaintenanceMode {
    info: RwLock<MaintenanceModeInfo>,
}

impl InMemoryMaintenanceMode {
    /// Start with maintenance mode on or off; a server started in
    /// maintenance mode records `updated_by` as `system`.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        let info = if enabled {
            MaintenanceModeInfo {
                enabled: true,
                updated_by: Some("system".to_string()),
                updated_on: Some(Utc::now()),
            }
        } else {
            MaintenanceModeInfo::default()
        };
        Self {
            info: RwLock::new(info),
        }
    }
}

impl MaintenanceModeProvider for InMemoryMaintenanceMode {
    fn info(&self) -> MaintenanceModeInfo {
        self.info
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, enabled: bool, updated_by: &str) -> MaintenanceModeInfo {
        let mut info = self.info.write().unwrap_or_else(PoisonError::into_inner);
        *info = MaintenanceModeInfo {
            enabled,
            updated_by: Some(updated_by.to_string()),
            updated_on: Some(Utc::now()),
        };
        info.clone()
    }
}
