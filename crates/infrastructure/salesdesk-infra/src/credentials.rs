//! Sources for the basic-auth credential attached to every record request.
//!
//! A source is consulted each time a request is built, so rotating the
//! underlying value takes effect on the next call.

use crate::net::GatewayError;

#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub trait CredentialSource: Send + Sync + 'static {
    /// `Ok(None)` sends the request without an Authorization header.
    fn credential(&self) -> Result<Option<Credential>, GatewayError>;
}

/// Reads the credential from the process environment on every request.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    username_var: String,
    password_var: String,
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(salesdesk_config::USERNAME_ENV, salesdesk_config::PASSWORD_ENV)
    }
}

impl EnvCredentials {
    pub fn new(username_var: impl Into<String>, password_var: impl Into<String>) -> Self {
        Self {
            username_var: username_var.into(),
            password_var: password_var.into(),
        }
    }
}

impl CredentialSource for EnvCredentials {
    fn credential(&self) -> Result<Option<Credential>, GatewayError> {
        let Ok(username) = std::env::var(&self.username_var) else {
            return Ok(None);
        };
        let password = std::env::var(&self.password_var).map_err(|_| {
            GatewayError::Credentials(format!(
                "{} is set but {} is not",
                self.username_var, self.password_var
            ))
        })?;
        Ok(Some(Credential { username, password }))
    }
}

/// A credential handed over explicitly by the caller.
#[derive(Debug, Clone)]
pub struct StaticCredentials(Credential);

impl StaticCredentials {
    pub fn new(credential: Credential) -> Self {
        Self(credential)
    }
}

impl CredentialSource for StaticCredentials {
    fn credential(&self) -> Result<Option<Credential>, GatewayError> {
        Ok(Some(self.0.clone()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialSource for NoCredentials {
    fn credential(&self) -> Result<Option<Credential>, GatewayError> {
        Ok(None)
    }
}
