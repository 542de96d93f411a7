#![deny(unsafe_code)]

use std::path::PathBuf;

use backoffice_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read registry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("duplicate role in registry: {role}")]
    DuplicateRole { role: String },

    #[error("duplicate project in registry: {project}")]
    DuplicateProject { project: String },

    #[error("role {role} allows unknown project: {project}")]
    UnknownProjectReference { role: String, project: String },

    #[error("project {project} declares unknown role: {role}")]
    UnknownRoleReference { project: String, role: String },
}

impl RegistryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
