#![deny(unsafe_code)]

use backoffice_access::AccessRegistry;

use crate::{RegistryError, parse_registry};

const DEFAULT_REGISTRY_TOML: &str = include_str!("../assets/default.toml");

/// The registry compiled into the application: the three console modules
/// (agricultura, gamificacion, educacion) and the four deployed roles.
///
/// Goes through the same parse/validate path as deploy-time files, so the
/// bundled asset is held to the same rules.
pub fn default_registry() -> Result<AccessRegistry, RegistryError> {
    parse_registry(DEFAULT_REGISTRY_TOML)
}
