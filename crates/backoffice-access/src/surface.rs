#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;

use backoffice_model::ProjectId;

/// An opaque render capability the shell invokes without knowing the
/// module's internals. Each module contributes one for its menu entry and
/// one for its dashboard.
pub trait Surface: Send + Sync {
    /// Short label shown in chrome.
    fn title(&self) -> &str;

    /// Render to plain text. Presentation beyond text is out of scope here;
    /// richer frontends wrap their own widget types behind this trait.
    fn render(&self) -> String;
}

/// The pair of surfaces one module supplies.
pub struct ModuleSurfaces {
    pub menu: Box<dyn Surface>,
    pub dashboard: Box<dyn Surface>,
}

impl fmt::Debug for ModuleSurfaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleSurfaces")
            .field("menu", &self.menu.title())
            .field("dashboard", &self.dashboard.title())
            .finish()
    }
}

/// Maps each project to its supplied surfaces.
///
/// Kept apart from [`ProjectConfig`](crate::ProjectConfig) so the access
/// registry stays pure data; modules register their surfaces at startup.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: BTreeMap<ProjectId, ModuleSurfaces>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        project: ProjectId,
        menu: Box<dyn Surface>,
        dashboard: Box<dyn Surface>,
    ) {
        self.surfaces
            .insert(project, ModuleSurfaces { menu, dashboard });
    }

    pub fn get(&self, project: &ProjectId) -> Option<&ModuleSurfaces> {
        self.surfaces.get(project)
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
