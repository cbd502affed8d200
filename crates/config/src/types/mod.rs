//! Configuration types.

mod auth;
mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
