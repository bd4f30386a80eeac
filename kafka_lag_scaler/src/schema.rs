use crate::auth::AuthMode;
use crate::error::ValidationError;
use crate::raw_config::RawMap;

pub mod keys {
    pub const BOOTSTRAP_SERVERS: &str = "bootstrapServers";
    pub const CONSUMER_GROUP: &str = "consumerGroup";
    pub const TOPIC: &str = "topic";
    pub const CONSUMER_OFFSET_RESET: &str = "consumerOffsetReset";
    pub const AUTH_MODE: &str = "authMode";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    /// Required when the selected auth mode needs credentials.
    RequiredByAuthMode,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub requirement: Requirement,
}

impl FieldDescriptor {
    const fn new(key: &'static str, requirement: Requirement) -> Self {
        Self { key, requirement }
    }

    pub fn is_required(&self, mode: AuthMode) -> bool {
        match self.requirement {
            Requirement::Required => true,
            Requirement::Optional => false,
            Requirement::RequiredByAuthMode => mode.requires_credentials(),
        }
    }

    /// Reads the field, failing when it is absent but required under `mode`.
    /// Metadata fields are resolved with [`AuthMode::None`].
    pub fn resolve<'a>(
        &self,
        map: &'a impl RawMap,
        mode: AuthMode,
    ) -> Result<Option<&'a str>, ValidationError> {
        match map.get_non_empty(self.key) {
            Some(value) => Ok(Some(value)),
            None if self.is_required(mode) => Err(self.missing(mode)),
            None => Ok(None),
        }
    }

    /// Like [`Self::resolve`], but absence is always an error.
    pub fn require<'a>(
        &self,
        map: &'a impl RawMap,
        mode: AuthMode,
    ) -> Result<&'a str, ValidationError> {
        self.resolve(map, mode)?.ok_or_else(|| self.missing(mode))
    }

    fn missing(&self, mode: AuthMode) -> ValidationError {
        match self.requirement {
            Requirement::RequiredByAuthMode => ValidationError::MissingAuthField {
                mode,
                field: self.key,
            },
            Requirement::Required | Requirement::Optional => {
                ValidationError::MissingField(self.key)
            }
        }
    }
}

pub const BOOTSTRAP_SERVERS: FieldDescriptor =
    FieldDescriptor::new(keys::BOOTSTRAP_SERVERS, Requirement::Required);
pub const CONSUMER_GROUP: FieldDescriptor =
    FieldDescriptor::new(keys::CONSUMER_GROUP, Requirement::Required);
pub const TOPIC: FieldDescriptor = FieldDescriptor::new(keys::TOPIC, Requirement::Required);
pub const CONSUMER_OFFSET_RESET: FieldDescriptor =
    FieldDescriptor::new(keys::CONSUMER_OFFSET_RESET, Requirement::Optional);

pub const AUTH_MODE: FieldDescriptor = FieldDescriptor::new(keys::AUTH_MODE, Requirement::Optional);
pub const USERNAME: FieldDescriptor =
    FieldDescriptor::new(keys::USERNAME, Requirement::RequiredByAuthMode);
pub const PASSWORD: FieldDescriptor =
    FieldDescriptor::new(keys::PASSWORD, Requirement::RequiredByAuthMode);

/// Keys recognized in trigger metadata, in validation order.
pub const METADATA_FIELDS: &[FieldDescriptor] =
    &[BOOTSTRAP_SERVERS, CONSUMER_GROUP, TOPIC, CONSUMER_OFFSET_RESET];

/// Keys recognized in auth parameters, in validation order.
pub const AUTH_FIELDS: &[FieldDescriptor] = &[AUTH_MODE, USERNAME, PASSWORD];

/// Keys of `map` that `table` doesn't know about, sorted.
pub fn unrecognized_keys<'a>(map: &'a impl RawMap, table: &[FieldDescriptor]) -> Vec<&'a str> {
    let mut unknown = map
        .keys()
        .filter(|key| table.iter().all(|x| x.key != *key))
        .collect::<Vec<_>>();
    unknown.sort_unstable();
    unknown
}
