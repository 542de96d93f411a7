#![deny(unsafe_code)]

use backoffice_model::RoleId;
use tracing::debug;

use crate::{AccessRegistry, ProjectConfig};

#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("role not present in registry: {0}")]
    UnknownRole(RoleId),
    #[error("authenticated user carries no roles")]
    NoRoles,
}

/// The modules a role may open plus the admin-panel flag.
///
/// Read-only for the rest of the session once derived; the shell re-derives
/// it only when the authenticated role changes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccessDecision {
    /// Reachable modules, in registry (menu) order.
    pub modules: Vec<ProjectConfig>,
    pub has_admin_panel: bool,
}

impl AccessDecision {
    /// The safe-deny fallback: no modules, no admin chrome. The resolver
    /// never applies this itself; callers opt in on [`AccessError`].
    pub fn deny_all() -> Self {
        Self {
            modules: Vec::new(),
            has_admin_panel: false,
        }
    }
}

/// Resolve which modules `role` may open.
///
/// A project is included iff both sides agree: the role appears in the
/// project's `roles` set AND the project appears in the role's
/// `allowed_projects` set. Unknown roles are an explicit error; the caller
/// decides the fallback (typically [`AccessDecision::deny_all`]).
pub fn resolve_access(
    registry: &AccessRegistry,
    role: &RoleId,
) -> Result<AccessDecision, AccessError> {
    let config = registry
        .role(role)
        .ok_or_else(|| AccessError::UnknownRole(role.clone()))?;

    let modules: Vec<ProjectConfig> = registry
        .projects()
        .iter()
        .filter(|project| {
            project.roles.contains(role) && config.allowed_projects.contains(&project.id)
        })
        .cloned()
        .collect();

    debug!(
        role = %role,
        modules = modules.len(),
        has_admin_panel = config.has_admin_panel,
        "resolved module access"
    );

    Ok(AccessDecision {
        modules,
        has_admin_panel: config.has_admin_panel,
    })
}

/// The role the resolver inspects for a multi-role user.
///
/// Matches the deployed console's behavior: only the first role counts and
/// any further roles are ignored. Known limitation, kept until the intended
/// multi-role semantics are decided.
pub fn primary_role(roles: &[RoleId]) -> Result<&RoleId, AccessError> {
    roles.first().ok_or(AccessError::NoRoles)
}
