use crate::auth::AuthMode;
use getset::Getters;
use std::fmt::{Debug, Formatter};

/// Validated authentication settings. Each variant holds exactly what its mode needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthConfig {
    None,
    SaslPlaintext(SaslCredentials),
    SaslSsl(SaslCredentials),
    SaslScramSha256(SaslCredentials),
    SaslScramSha512(SaslCredentials),
}

impl AuthConfig {
    /// Builds the variant for `mode`. Credentials are dropped for modes that don't use them.
    pub(crate) fn with_credentials(mode: AuthMode, credentials: SaslCredentials) -> Self {
        match mode {
            AuthMode::None => AuthConfig::None,
            AuthMode::SaslPlaintext => AuthConfig::SaslPlaintext(credentials),
            AuthMode::SaslSsl => AuthConfig::SaslSsl(credentials),
            AuthMode::SaslScramSha256 => AuthConfig::SaslScramSha256(credentials),
            AuthMode::SaslScramSha512 => AuthConfig::SaslScramSha512(credentials),
        }
    }

    pub fn mode(&self) -> AuthMode {
        match self {
            AuthConfig::None => AuthMode::None,
            AuthConfig::SaslPlaintext(_) => AuthMode::SaslPlaintext,
            AuthConfig::SaslSsl(_) => AuthMode::SaslSsl,
            AuthConfig::SaslScramSha256(_) => AuthMode::SaslScramSha256,
            AuthConfig::SaslScramSha512(_) => AuthMode::SaslScramSha512,
        }
    }

    pub fn credentials(&self) -> Option<&SaslCredentials> {
        match self {
            AuthConfig::None => None,
            AuthConfig::SaslPlaintext(credentials)
            | AuthConfig::SaslSsl(credentials)
            | AuthConfig::SaslScramSha256(credentials)
            | AuthConfig::SaslScramSha512(credentials) => Some(credentials),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct SaslCredentials {
    username: String,
    password: String,
}

impl SaslCredentials {
    pub(crate) fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl Debug for SaslCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaslCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
