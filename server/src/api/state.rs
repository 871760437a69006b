//! Shared application state for API handlers.

use std::sync::Arc;

use crate::application::ports::{
    AgentRegistry, AssetResolver, AuthorizationProvider, MaintenanceModeProvider,
};

/// Port implementations shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn AgentRegistry>,
    pub authorization: Arc<dyn AuthorizationProvider>,
    pub maintenance: Arc<dyn MaintenanceModeProvider>,
    pub assets: Arc<dyn AssetResolver>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("maintenance", &self.maintenance.info())
            .finish_non_exhaustive()
    }
}
