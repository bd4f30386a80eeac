use crate::schema::keys;
use serde::Deserialize;
use std::collections::HashMap;

/// Read access shared by both raw maps.
pub trait RawMap {
    /// Value for `key`, treating an empty string the same as a missing key.
    fn get_non_empty(&self, key: &str) -> Option<&str>;

    fn keys(&self) -> impl Iterator<Item = &str>;
}

/// String-keyed trigger metadata as handed over by the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawConfig(HashMap<String, String>);

/// String-keyed auth parameters, kept apart from [`RawConfig`].
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawAuthConfig(HashMap<String, String>);

macro_rules! raw_map {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl RawMap for $name {
            fn get_non_empty(&self, key: &str) -> Option<&str> {
                self.0
                    .get(key)
                    .map(String::as_str)
                    .filter(|value| !value.is_empty())
            }

            fn keys(&self) -> impl Iterator<Item = &str> {
                self.0.keys().map(String::as_str)
            }
        }

        impl From<HashMap<String, String>> for $name {
            fn from(value: HashMap<String, String>) -> Self {
                Self(value)
            }
        }

        impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for $name {
            fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
                Self(
                    iter.into_iter()
                        .map(|(k, v)| (k.into(), v.into()))
                        .collect(),
                )
            }
        }
    };
}

raw_map!(RawConfig);
raw_map!(RawAuthConfig);

impl std::fmt::Debug for RawAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.0 {
            if key == keys::PASSWORD {
                map.entry(key, &"***");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_treated_as_missing() {
        let raw: RawConfig = [("topic", ""), ("consumerGroup", "g")].into_iter().collect();

        assert_eq!(raw.get_non_empty("topic"), None);
        assert_eq!(raw.get_non_empty("consumerGroup"), Some("g"));
        assert_eq!(raw.get_non_empty("bootstrapServers"), None);
    }

    #[test]
    fn auth_debug_hides_password() {
        let raw: RawAuthConfig = [("username", "admin"), ("password", "hunter2")]
            .into_iter()
            .collect();

        let printed = format!("{raw:?}");
        assert!(printed.contains("admin"));
        assert!(!printed.contains("hunter2"));
    }
}
