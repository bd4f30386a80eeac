use crate::enum_policy::{EnumField, EnumPolicy, EnumeratedValue};
use crate::error::ValidationError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Where a group without committed offsets starts reading.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum OffsetResetPolicy {
    #[default]
    Earliest,
    Latest,
}

impl EnumeratedValue for OffsetResetPolicy {
    const FIELD: EnumField = EnumField::ConsumerOffsetReset;
    const VARIANTS: &'static [Self] = &[OffsetResetPolicy::Earliest, OffsetResetPolicy::Latest];
    const NAMES: &'static [&'static str] = &["earliest", "latest"];

    fn as_str(&self) -> &'static str {
        match self {
            OffsetResetPolicy::Earliest => "earliest",
            OffsetResetPolicy::Latest => "latest",
        }
    }

    fn default_value() -> Option<Self> {
        Some(Self::default())
    }
}

impl Display for OffsetResetPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OffsetResetPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnumPolicy::parse(s)
    }
}
