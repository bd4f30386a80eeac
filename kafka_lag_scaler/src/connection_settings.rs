use crate::auth::AuthMode;
use crate::metadata::ScalerMetadata;
use anyhow::bail;
use rdkafka::ClientConfig;

fn security_protocol(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::None => "plaintext",
        AuthMode::SaslPlaintext => "sasl_plaintext",
        AuthMode::SaslSsl | AuthMode::SaslScramSha256 | AuthMode::SaslScramSha512 => "sasl_ssl",
    }
}

fn sasl_mechanism(mode: AuthMode) -> Option<&'static str> {
    match mode {
        AuthMode::None => None,
        AuthMode::SaslPlaintext | AuthMode::SaslSsl => Some("PLAIN"),
        AuthMode::SaslScramSha256 => Some("SCRAM-SHA-256"),
        AuthMode::SaslScramSha512 => Some("SCRAM-SHA-512"),
    }
}

/// Client settings for a non-consuming client that reads the group's committed offsets.
impl TryFrom<&ScalerMetadata> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(value: &ScalerMetadata) -> Result<Self, Self::Error> {
        if value.bootstrap_servers().is_empty() {
            bail!("No brokers specified")
        }

        let mut config = ClientConfig::new();

        let brokers_string = value.bootstrap_servers().join(",");
        config
            .set("bootstrap.servers", brokers_string)
            .set("group.id", value.group())
            .set("auto.offset.reset", value.consumer_offset_reset().to_string())
            .set("enable.auto.commit", "false");

        let mode = value.auth().map(|x| x.mode()).unwrap_or(AuthMode::None);
        config.set("security.protocol", security_protocol(mode));
        if let Some(mechanism) = sasl_mechanism(mode) {
            config.set("sasl.mechanisms", mechanism);
        }
        if let Some(credentials) = value.auth().and_then(|x| x.credentials()) {
            config
                .set("sasl.username", credentials.username())
                .set("sasl.password", credentials.password());
        }

        if let Ok(value) = std::env::var("RD_KAFKA_DEBUG") {
            config.set("debug", value);
        }

        Ok(config)
    }
}
