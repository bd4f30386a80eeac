pub mod auth;
#[cfg(feature = "client-config")]
pub mod connection_settings;
pub mod consumer_settings;
pub mod enum_policy;
pub mod error;
pub mod metadata;
pub mod raw_config;
pub mod schema;
pub mod validator;

pub use error::ValidationError;
pub use metadata::ScalerMetadata;
pub use raw_config::{RawAuthConfig, RawConfig, RawMap};
pub use validator::validate;
