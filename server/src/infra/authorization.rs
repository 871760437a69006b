//! Infrastructure implementation of the `AuthorizationProvider` port.

use std::collections::HashSet;

use crate::application::ports::AuthorizationProvider;

/// Administrators taken from configuration.
///
/// An empty list means security is disabled: every caller is an administrator.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthorization {
    admins: HashSet<String>,
}

impl StaticAuthorization {
    #[must_use]
    pub fn new<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            admins: admins
                .into_iter()
                .map(Into::into)
                .map(|name: String| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    pub fn is_security_enabled(&self) -> bool {
        !self.admins.is_empty()
    }
}

impl AuthorizationProvider for StaticAuthorization {
    fn is_administrator(&self, username: &str) -> bool {
        !self.is_security_enabled() || self.admins.contains(username)
    }
}
