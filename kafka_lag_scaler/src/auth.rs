mod auth_config;
mod auth_mode;

pub use auth_config::*;
pub use auth_mode::*;
