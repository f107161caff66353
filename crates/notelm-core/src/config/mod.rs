//! Unified configuration layer.
//!
//! All environment-variable reads are centralized here; business code goes
//! through structured config instead of calling `std::env::var` directly.
//!
//! - `loader`: env_or, env_optional, env_bool helpers
//! - `schema`: ObservabilityConfig
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

#[allow(unused_imports)]
pub use loader::{env_bool, env_optional, env_or};
pub use schema::ObservabilityConfig;
