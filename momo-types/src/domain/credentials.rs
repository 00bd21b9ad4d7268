//! Gateway credentials.

use std::fmt;

use crate::error::GatewayError;

use super::is_blank;

/// Base URL and Basic-Auth pair for one gateway account.
///
/// Immutable once built. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    base_url: String,
    username: String,
    password: String,
}

impl Credentials {
    /// Builds credentials, rejecting any blank field.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let base_url = base_url.into();
        let username = username.into();
        let password = password.into();

        let missing: Vec<String> = [
            ("baseUrl", &base_url),
            ("username", &username),
            ("password", &password),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(Some(value.as_str())))
        .map(|(key, _)| key.to_string())
        .collect();

        if !missing.is_empty() {
            return Err(GatewayError::Validation { missing });
        }

        Ok(Self {
            base_url,
            username,
            password,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Only read this when building the Authorization header.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
