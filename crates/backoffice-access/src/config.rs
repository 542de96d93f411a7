#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use backoffice_model::{ProjectId, RoleId};

/// Static configuration for one role.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoleConfig {
    pub id: RoleId,
    /// Display name for chrome ("Administrador", ...).
    pub name: String,
    /// Whether the admin-only chrome renders for this role.
    pub has_admin_panel: bool,
    /// Projects this role may open. Access requires agreement with the
    /// project's own `roles` set; omission on either side revokes.
    pub allowed_projects: BTreeSet<ProjectId>,
    /// Global roles exist across every deployment tenant.
    pub is_global_role: bool,
}

/// Static configuration for one project module.
///
/// Menu/dashboard view handles are registered separately (see
/// [`SurfaceRegistry`](crate::SurfaceRegistry)); this struct stays pure data
/// so registries can be loaded, compared, and serialized.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectConfig {
    pub id: ProjectId,
    pub name: String,
    /// Roles the project declares it serves.
    pub roles: BTreeSet<RoleId>,
}

/// The two registries, immutable after construction.
///
/// Built once at startup (compiled-in defaults or a deploy-time TOML file)
/// and passed by reference into the resolver; project order is the declared
/// order and drives menu rendering order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccessRegistry {
    roles: BTreeMap<RoleId, RoleConfig>,
    projects: Vec<ProjectConfig>,
}

impl AccessRegistry {
    pub fn new(roles: impl IntoIterator<Item = RoleConfig>, projects: Vec<ProjectConfig>) -> Self {
        let roles = roles
            .into_iter()
            .map(|config| (config.id.clone(), config))
            .collect();
        Self { roles, projects }
    }

    pub fn role(&self, id: &RoleId) -> Option<&RoleConfig> {
        self.roles.get(id)
    }

    /// Roles in id order.
    pub fn roles(&self) -> impl Iterator<Item = &RoleConfig> {
        self.roles.values()
    }

    /// Projects in declared (menu) order.
    pub fn projects(&self) -> &[ProjectConfig] {
        &self.projects
    }

    pub fn project(&self, id: &ProjectId) -> Option<&ProjectConfig> {
        self.projects.iter().find(|project| &project.id == id)
    }
}
