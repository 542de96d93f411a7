//! Registry loading for the backoffice console.
//!
//! The role/project registries are process-wide constants: built once at
//! startup from the bundled default (or a deploy-time TOML override) and
//! passed by reference into the access resolver, read-only afterward.

pub mod builtin;
pub mod error;
pub mod loader;

pub use builtin::default_registry;
pub use error::RegistryError;
pub use loader::{load_registry, parse_registry};
