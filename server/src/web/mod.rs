//! Server-rendered views.

pub mod page;

pub use page::{PageShell, PageUser, escape_html};
