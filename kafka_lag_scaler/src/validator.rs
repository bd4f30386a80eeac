use crate::auth::{AuthConfig, AuthMode, SaslCredentials};
use crate::consumer_settings::OffsetResetPolicy;
use crate::enum_policy::EnumPolicy;
use crate::error::ValidationError;
use crate::metadata::ScalerMetadata;
use crate::raw_config::{RawAuthConfig, RawConfig};
use crate::schema;
use tracing::{debug, warn};

/// Turns raw trigger metadata and auth parameters into [`ScalerMetadata`].
///
/// Rules are checked in a fixed order and the first failure is returned:
/// brokers, consumer group, topic, offset reset policy, then auth.
pub fn validate(
    raw: &RawConfig,
    raw_auth: &RawAuthConfig,
) -> Result<ScalerMetadata, ValidationError> {
    report_unrecognized_keys(raw, raw_auth);

    let bootstrap_servers =
        parse_bootstrap_servers(schema::BOOTSTRAP_SERVERS.require(raw, AuthMode::None)?)?;
    let group = schema::CONSUMER_GROUP.require(raw, AuthMode::None)?.to_owned();
    let topic = schema::TOPIC.require(raw, AuthMode::None)?.to_owned();

    let consumer_offset_reset = EnumPolicy::resolve_or_default::<OffsetResetPolicy>(
        schema::CONSUMER_OFFSET_RESET.resolve(raw, AuthMode::None)?,
    )?;

    let auth = parse_auth(raw_auth)?;

    debug!(
        "Validated scaler metadata for group {group}, topic {topic}, {} broker(s)",
        bootstrap_servers.len()
    );

    Ok(ScalerMetadata::new(
        bootstrap_servers,
        group,
        topic,
        consumer_offset_reset,
        auth,
    ))
}

fn parse_bootstrap_servers(value: &str) -> Result<Vec<String>, ValidationError> {
    value
        .split(',')
        .enumerate()
        .map(|(index, server)| {
            if server.is_empty() {
                Err(ValidationError::EmptyBootstrapServer { index })
            } else {
                Ok(server.to_owned())
            }
        })
        .collect()
}

fn parse_auth(raw_auth: &RawAuthConfig) -> Result<Option<AuthConfig>, ValidationError> {
    if raw_auth.is_empty() {
        return Ok(None);
    }

    let mode = schema::AUTH_MODE.resolve(raw_auth, AuthMode::None)?;
    let mode = EnumPolicy::resolve::<AuthMode>(mode)?.unwrap_or(AuthMode::None);

    let username = schema::USERNAME.resolve(raw_auth, mode)?;
    let password = schema::PASSWORD.resolve(raw_auth, mode)?;

    match (username, password) {
        (Some(username), Some(password)) if mode.requires_credentials() => {
            Ok(Some(AuthConfig::with_credentials(
                mode,
                SaslCredentials::new(username.to_owned(), password.to_owned()),
            )))
        }
        (username, password) => {
            if username.is_some() || password.is_some() {
                debug!("Auth mode {mode} doesn't use credentials, ignoring them");
            }
            Ok(Some(AuthConfig::None))
        }
    }
}

fn report_unrecognized_keys(raw: &RawConfig, raw_auth: &RawAuthConfig) {
    let unknown = schema::unrecognized_keys(raw, schema::METADATA_FIELDS);
    if !unknown.is_empty() {
        warn!("Ignoring unrecognized metadata keys: {unknown:?}");
    }

    let unknown = schema::unrecognized_keys(raw_auth, schema::AUTH_FIELDS);
    if !unknown.is_empty() {
        warn!("Ignoring unrecognized auth parameter keys: {unknown:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_brokers_verbatim() {
        let servers = parse_bootstrap_servers("a:9092, b:9092").unwrap();
        assert_eq!(servers, vec!["a:9092", " b:9092"]);
    }

    #[test]
    fn rejects_empty_broker_entry() {
        assert_eq!(
            parse_bootstrap_servers("a:9092,,b:9092"),
            Err(ValidationError::EmptyBootstrapServer { index: 1 })
        );
        assert_eq!(
            parse_bootstrap_servers("a:9092,"),
            Err(ValidationError::EmptyBootstrapServer { index: 1 })
        );
    }
}
