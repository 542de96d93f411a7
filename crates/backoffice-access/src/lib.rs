//! Role-based module access for the backoffice console.
//!
//! A signed-in user carries a role; the static role/project registries
//! decide which modules that role may open and whether the admin chrome
//! renders. Resolution is pure and synchronous; the decision is derived once
//! per session and memoized by role.

pub mod cache;
pub mod config;
pub mod resolver;
pub mod surface;

pub use cache::AccessCache;
pub use config::{AccessRegistry, ProjectConfig, RoleConfig};
pub use resolver::{AccessDecision, AccessError, primary_role, resolve_access};
pub use surface::{ModuleSurfaces, Surface, SurfaceRegistry};
