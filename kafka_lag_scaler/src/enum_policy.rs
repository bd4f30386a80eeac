use crate::auth::AuthMode;
use crate::consumer_settings::OffsetResetPolicy;
use crate::error::ValidationError;
use crate::schema::keys;

/// Config fields restricted to a closed set of values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EnumField {
    ConsumerOffsetReset,
    AuthMode,
}

impl EnumField {
    pub fn key(&self) -> &'static str {
        match self {
            EnumField::ConsumerOffsetReset => keys::CONSUMER_OFFSET_RESET,
            EnumField::AuthMode => keys::AUTH_MODE,
        }
    }

}

/// A typed enum backing one [`EnumField`]. `NAMES[i]` is the wire name of `VARIANTS[i]`.
pub trait EnumeratedValue: Copy + Sized + 'static {
    const FIELD: EnumField;
    const VARIANTS: &'static [Self];
    const NAMES: &'static [&'static str];

    fn as_str(&self) -> &'static str;

    fn default_value() -> Option<Self> {
        None
    }
}

pub struct EnumPolicy;

impl EnumPolicy {
    pub fn is_valid(field: EnumField, value: &str) -> bool {
        Self::allowed_values(field).contains(&value)
    }

    pub fn allowed_values(field: EnumField) -> &'static [&'static str] {
        match field {
            EnumField::ConsumerOffsetReset => OffsetResetPolicy::NAMES,
            EnumField::AuthMode => AuthMode::NAMES,
        }
    }

    pub fn default_for(field: EnumField) -> Option<&'static str> {
        match field {
            EnumField::ConsumerOffsetReset => {
                OffsetResetPolicy::default_value().map(|x| x.as_str())
            }
            EnumField::AuthMode => AuthMode::default_value().map(|x| x.as_str()),
        }
    }

    /// Exact, case-sensitive match against the field's closed set.
    pub fn parse<T: EnumeratedValue>(value: &str) -> Result<T, ValidationError> {
        T::VARIANTS
            .iter()
            .zip(T::NAMES)
            .find(|(_, name)| **name == value)
            .map(|(variant, _)| *variant)
            .ok_or_else(|| ValidationError::InvalidEnumValue {
                field: T::FIELD.key(),
                value: value.to_owned(),
                allowed: T::NAMES.join(", "),
            })
    }

    /// Parses `value` when given, otherwise falls back to the field default (if any).
    pub fn resolve<T: EnumeratedValue>(value: Option<&str>) -> Result<Option<T>, ValidationError> {
        match value {
            Some(value) => Self::parse(value).map(Some),
            None => Ok(T::default_value()),
        }
    }

    /// For fields that always have a default: the parsed value, or the default when absent.
    pub fn resolve_or_default<T: EnumeratedValue + Default>(
        value: Option<&str>,
    ) -> Result<T, ValidationError> {
        Ok(Self::resolve(value)?.unwrap_or_default())
    }
}
