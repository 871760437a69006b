//! HTTP surface: axum router, handlers, and error rendering.

pub mod caller;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use caller::Caller;
pub use error::{ApiError, ApiResult};
pub use router::create_router;
pub use state::AppState;
