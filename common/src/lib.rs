pub mod env_config;
pub mod error;
pub mod validation;
