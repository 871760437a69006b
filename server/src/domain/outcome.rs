//! The structured result record a rejected operation reports.

use gantry_common::{HealthStateKind, HealthStateScope};
use serde::Serialize;

/// Status category of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Forbidden,
    NotFound,
    BadRequest,
}

/// One terminal rejection: status, summary message and user-facing detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationOutcome {
    #[serde(skip)]
    pub status: OutcomeStatus,
    pub message: String,
    pub detail: String,
    #[serde(skip)]
    pub kind: HealthStateKind,
    pub scope: HealthStateScope,
}

impl OperationOutcome {
    pub fn forbidden(message: String, detail: String) -> Self {
        Self {
            status: OutcomeStatus::Forbidden,
            message,
            detail,
            kind: HealthStateKind::Forbidden,
            scope: HealthStateScope::Global,
        }
    }

    pub fn not_found(message: String, detail: String) -> Self {
        Self {
            status: OutcomeStatus::NotFound,
            message,
            detail,
            kind: HealthStateKind::General,
            scope: HealthStateScope::Global,
        }
    }

    pub fn bad_request(message: String, detail: String) -> Self {
        Self {
            status: OutcomeStatus::BadRequest,
            message,
            detail,
            kind: HealthStateKind::General,
            scope: HealthStateScope::Global,
        }
    }
}
