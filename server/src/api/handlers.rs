//! HTTP handlers for agents, maintenance mode and the page shell.

use std::collections::BTreeSet;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Html,
};
use gantry_common::{AgentInstance, MaintenanceModeInfo, TriState};
use serde::Deserialize;

use crate::api::caller::Caller;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::application::services::{agents, maintenance_mode};
use crate::domain::{AgentUpdateRequest, trim_blank};
use crate::web::{PageShell, PageUser};

// ===================================================================
// Request bodies
// ===================================================================

/// Body of `PATCH /api/agents/{uuid}`.
///
/// Absent and `null` fields are "not specified"; `agent_config_state`
/// accepts `Enabled`/`Disabled`, `true`/`false`, or blank.
#[derive(Debug, Default, Deserialize)]
pub struct AgentPatchBody {
    pub hostname: Option<String>,
    pub resources: Option<String>,
    pub environments: Option<Vec<String>>,
    pub agent_config_state: Option<String>,
}

impl AgentPatchBody {
    /// Convert into a domain request.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidBody`] when `agent_config_state` is not a tri-state value.
    pub fn into_request(self) -> ApiResult<AgentUpdateRequest> {
        let state = TriState::from_option(self.agent_config_state.as_deref())
            .map_err(|err| ApiError::InvalidBody(err.to_string()))?;
        Ok(AgentUpdateRequest {
            hostname: self.hostname,
            resources: self.resources,
            environments: self.environments.map(|envs| {
                envs.into_iter()
                    .map(|env| trim_blank(&env).to_string())
                    .filter(|env| !env.is_empty())
                    .collect::<BTreeSet<String>>()
            }),
            state,
        })
    }
}

// ===================================================================
// Health
// ===================================================================

/// Minimal health-check handler for load-balancer probes.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ===================================================================
// Agents
// ===================================================================

pub async fn list_agents(State(state): State<AppState>) -> Json<Vec<AgentInstance>> {
    Json(agents::list_agents(state.registry.as_ref()))
}

pub async fn get_agent(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<AgentInstance>> {
    let agent = agents::find_agent(state.registry.as_ref(), &uuid)?;
    Ok(Json(agent))
}

/// Validate and apply an agent update.
///
/// The registry may write to disk, so the use-case runs on the blocking pool.
pub async fn update_agent(
    State(state): State<AppState>,
    caller: Caller,
    Path(uuid): Path<String>,
    body: Result<Json<AgentPatchBody>, JsonRejection>,
) -> ApiResult<Json<AgentInstance>> {
    let Json(body) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    let request = body.into_request()?;

    let agent = tokio::task::spawn_blocking(move || {
        agents::update_agent(
            state.registry.as_ref(),
            state.authorization.as_ref(),
            caller.name(),
            &uuid,
            &request,
        )
    })
    .await
    .map_err(|err| ApiError::Internal(err.into()))??;

    Ok(Json(agent))
}

// ===================================================================
// Maintenance mode
// ===================================================================

pub async fn maintenance_mode_info(State(state): State<AppState>) -> Json<MaintenanceModeInfo> {
    Json(state.maintenance.info())
}

pub async fn enable_maintenance_mode(
    State(state): State<AppState>,
    caller: Caller,
) -> ApiResult<Json<MaintenanceModeInfo>> {
    set_maintenance_mode(&state, &caller, true)
}

pub async fn disable_maintenance_mode(
    State(state): State<AppState>,
    caller: Caller,
) -> ApiResult<Json<MaintenanceModeInfo>> {
    set_maintenance_mode(&state, &caller, false)
}

fn set_maintenance_mode(
    state: &AppState,
    caller: &Caller,
    enabled: bool,
) -> ApiResult<Json<MaintenanceModeInfo>> {
    let info = maintenance_mode::set_maintenance_mode(
        state.maintenance.as_ref(),
        state.authorization.as_ref(),
        caller.name(),
        enabled,
    )?;
    Ok(Json(info))
}

// ===================================================================
// Pages
// ===================================================================

/// The agents page: shell plus a mount point for the agents app.
pub async fn agents_page(State(state): State<AppState>, caller: Caller) -> Html<String> {
    let shell = PageShell {
        title: "Agents",
        controller_name: "agents",
        user: Some(PageUser {
            is_admin: state.authorization.is_administrator(caller.name()),
            display_name: caller.0,
        }),
        maintenance: state.maintenance.info(),
        show_header: true,
        content: "<div id=\"agents\"></div>",
    };
    Html(shell.render(state.assets.as_ref()))
}
