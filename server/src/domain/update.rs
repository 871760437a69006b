//! Agent update requests and how an accepted one is applied.
//!
//! Pure functions: no I/O, no async.

use std::collections::BTreeSet;

use gantry_common::{AgentConfigState, AgentInstance, TriState};

/// A requested mutation to one agent's configuration.
///
/// `None` means "not specified"; `Some` of a blank/empty value means the
/// field was specified but carries nothing, which validation rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentUpdateRequest {
    pub hostname: Option<String>,
    /// Comma-separated resource labels.
    pub resources: Option<String>,
    pub environments: Option<BTreeSet<String>>,
    pub state: TriState,
}

impl AgentUpdateRequest {
    /// `true` if at least one field actually asks for a change.
    pub fn is_any_operation_requested(&self) -> bool {
        !is_blank(self.resources.as_deref())
            || self.environments.as_ref().is_some_and(|envs| !envs.is_empty())
            || !is_blank(self.hostname.as_deref())
            || self.state.is_explicit()
    }
}

/// `None`, empty and whitespace-only values are all blank.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| trim_blank(v).is_empty())
}

/// Whitespace that makes a field blank.
///
/// Narrower than [`char::is_whitespace`]: the no-break spaces (U+00A0,
/// U+2007, U+202F) and NEL (U+0085) are content, while the ASCII
/// information separators U+001C..=U+001F count as blank.
pub fn is_blank_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | '\u{1c}'..='\u{1f}' | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

/// Strip leading and trailing [`is_blank_char`] characters.
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(is_blank_char)
}

/// Split a comma-separated resource string into trimmed, unique labels,
/// keeping first-seen order.
pub fn parse_resources(raw: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for label in raw.split(',').map(trim_blank).filter(|l| !l.is_empty()) {
        if !labels.iter().any(|existing| existing == label) {
            labels.push(label.to_string());
        }
    }
    labels
}

/// Apply an already-validated update to `agent`.
///
/// Blank hostname/resources and empty environments leave the current
/// value alone; an unset state keeps the current config state.
pub fn apply_update(agent: &mut AgentInstance, request: &AgentUpdateRequest) {
    if let Some(hostname) = request.hostname.as_deref()
        && !trim_blank(hostname).is_empty()
    {
        agent.hostname = trim_blank(hostname).to_string();
    }

    if let Some(resources) = request.resources.as_deref()
        && !trim_blank(resources).is_empty()
    {
        agent.resources = parse_resources(resources);
    }

    if let Some(environments) = &request.environments
        && !environments.is_empty()
    {
        agent.environments.clone_from(environments);
    }

    match request.state {
        TriState::True => agent.config_state = AgentConfigState::Enabled,
        TriState::False => agent.config_state = AgentConfigState::Disabled,
        TriState::Unset => {}
    }
}
