use crate::auth::AuthConfig;
use crate::consumer_settings::OffsetResetPolicy;
use getset::Getters;

/// Validated description of the consumer group whose lag drives scaling.
///
/// Only [`crate::validate`] creates it, so every value upholds:
/// - `bootstrap_servers` is non-empty and none of its entries are empty
/// - `group` and `topic` are non-empty
/// - `auth` is `None` only when no auth parameters were given
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ScalerMetadata {
    #[getset(get = "pub")]
    bootstrap_servers: Vec<String>,
    #[getset(get = "pub")]
    group: String,
    #[getset(get = "pub")]
    topic: String,
    #[getset(get = "pub")]
    consumer_offset_reset: OffsetResetPolicy,
    auth: Option<AuthConfig>,
}

impl ScalerMetadata {
    pub(crate) fn new(
        bootstrap_servers: Vec<String>,
        group: String,
        topic: String,
        consumer_offset_reset: OffsetResetPolicy,
        auth: Option<AuthConfig>,
    ) -> Self {
        Self {
            bootstrap_servers,
            group,
            topic,
            consumer_offset_reset,
            auth,
        }
    }

    pub fn auth(&self) -> Option<&AuthConfig> {
        self.auth.as_ref()
    }
}
