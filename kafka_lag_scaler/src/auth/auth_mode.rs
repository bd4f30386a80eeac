use crate::enum_policy::{EnumField, EnumPolicy, EnumeratedValue};
use crate::error::ValidationError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AuthMode {
    None,
    SaslPlaintext,
    SaslSsl,
    SaslScramSha256,
    SaslScramSha512,
}

impl AuthMode {
    /// Modes that can't connect without a username and password.
    pub fn requires_credentials(&self) -> bool {
        match self {
            AuthMode::None => false,
            AuthMode::SaslPlaintext
            | AuthMode::SaslSsl
            | AuthMode::SaslScramSha256
            | AuthMode::SaslScramSha512 => true,
        }
    }
}

impl EnumeratedValue for AuthMode {
    const FIELD: EnumField = EnumField::AuthMode;
    const VARIANTS: &'static [Self] = &[
        AuthMode::None,
        AuthMode::SaslPlaintext,
        AuthMode::SaslSsl,
        AuthMode::SaslScramSha256,
        AuthMode::SaslScramSha512,
    ];
    const NAMES: &'static [&'static str] = &[
        "none",
        "sasl_plaintext",
        "sasl_ssl",
        "sasl_scram_sha256",
        "sasl_scram_sha512",
    ];

    fn as_str(&self) -> &'static str {
        match self {
            AuthMode::None => "none",
            AuthMode::SaslPlaintext => "sasl_plaintext",
            AuthMode::SaslSsl => "sasl_ssl",
            AuthMode::SaslScramSha256 => "sasl_scram_sha256",
            AuthMode::SaslScramSha512 => "sasl_scram_sha512",
        }
    }
}

impl Display for AuthMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnumPolicy::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_none_skips_credentials() {
        let without: Vec<_> = AuthMode::VARIANTS
            .iter()
            .filter(|mode| !mode.requires_credentials())
            .collect();

        assert_eq!(without, vec![&AuthMode::None]);
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!("sasl_plaintext".parse::<AuthMode>(), Ok(AuthMode::SaslPlaintext));
        assert!("SASL_PLAINTEXT".parse::<AuthMode>().is_err());
    }
}
