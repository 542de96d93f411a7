#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::Path;

use backoffice_access::{AccessRegistry, ProjectConfig, RoleConfig};
use backoffice_model::{ProjectId, RoleId};
use tracing::info;

use crate::RegistryError;

/// On-disk shape of the registry file. Ids arrive as plain strings and are
/// validated into their newtypes before any cross-checking.
#[derive(Debug, serde::Deserialize)]
struct RegistryFile {
    #[serde(default, rename = "role")]
    roles: Vec<RoleEntry>,
    #[serde(default, rename = "project")]
    projects: Vec<ProjectEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct RoleEntry {
    id: String,
    name: String,
    #[serde(default)]
    has_admin_panel: bool,
    #[serde(default)]
    allowed_projects: Vec<String>,
    #[serde(default)]
    is_global_role: bool,
}

#[derive(Debug, serde::Deserialize)]
struct ProjectEntry {
    id: String,
    name: String,
    #[serde(default)]
    roles: Vec<String>,
}

/// Parse and validate a registry from TOML text.
///
/// Validation is strict: duplicate ids and dangling cross-references are
/// hard errors. A role allowed a project the file never declares (or vice
/// versa) is a configuration mistake, not a silent revocation.
pub fn parse_registry(contents: &str) -> Result<AccessRegistry, RegistryError> {
    let file: RegistryFile = toml::from_str(contents)?;

    let mut roles = Vec::with_capacity(file.roles.len());
    let mut role_ids = BTreeSet::new();
    for entry in file.roles {
        let id = RoleId::new(entry.id)?;
        if !role_ids.insert(id.clone()) {
            return Err(RegistryError::DuplicateRole {
                role: id.as_str().to_string(),
            });
        }
        let allowed_projects = entry
            .allowed_projects
            .into_iter()
            .map(ProjectId::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        roles.push(RoleConfig {
            id,
            name: entry.name,
            has_admin_panel: entry.has_admin_panel,
            allowed_projects,
            is_global_role: entry.is_global_role,
        });
    }

    let mut projects = Vec::with_capacity(file.projects.len());
    let mut project_ids = BTreeSet::new();
    for entry in file.projects {
        let id = ProjectId::new(entry.id)?;
        if !project_ids.insert(id.clone()) {
            return Err(RegistryError::DuplicateProject {
                project: id.as_str().to_string(),
            });
        }
        let declared_roles = entry
            .roles
            .into_iter()
            .map(RoleId::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        projects.push(ProjectConfig {
            id,
            name: entry.name,
            roles: declared_roles,
        });
    }

    for role in &roles {
        for project in &role.allowed_projects {
            if !project_ids.contains(project) {
                return Err(RegistryError::UnknownProjectReference {
                    role: role.id.as_str().to_string(),
                    project: project.as_str().to_string(),
                });
            }
        }
    }
    for project in &projects {
        for role in &project.roles {
            if !role_ids.contains(role) {
                return Err(RegistryError::UnknownRoleReference {
                    project: project.id.as_str().to_string(),
                    role: role.as_str().to_string(),
                });
            }
        }
    }

    info!(
        roles = roles.len(),
        projects = projects.len(),
        "registry parsed"
    );
    Ok(AccessRegistry::new(roles, projects))
}

/// Load a registry from a TOML file (deploy-time override of the built-in
/// registry).
pub fn load_registry(path: &Path) -> Result<AccessRegistry, RegistryError> {
    let contents = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
    parse_registry(&contents)
}
