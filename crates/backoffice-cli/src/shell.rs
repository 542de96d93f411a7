//! Shell/navigation glue: pairs an access decision with the surfaces each
//! module registered, producing the ordered menu the chrome renders.

use backoffice_access::{AccessDecision, ModuleSurfaces, ProjectConfig, Surface, SurfaceRegistry};
use backoffice_model::ModelError;
use backoffice_model::ProjectId;
use tracing::warn;

/// One reachable module with its registered surfaces.
pub struct MenuEntry<'a> {
    pub project: &'a ProjectConfig,
    pub surfaces: &'a ModuleSurfaces,
}

/// Build the menu for a resolved access decision.
///
/// Entries keep the decision's (registry) order. A reachable module without
/// registered surfaces is skipped with a warning; the module stays
/// reachable, its presentation just has not been wired in.
pub fn build_menu<'a>(
    decision: &'a AccessDecision,
    surfaces: &'a SurfaceRegistry,
) -> Vec<MenuEntry<'a>> {
    decision
        .modules
        .iter()
        .filter_map(|project| match surfaces.get(&project.id) {
            Some(module_surfaces) => Some(MenuEntry {
                project,
                surfaces: module_surfaces,
            }),
            None => {
                warn!(project = %project.id, "no surfaces registered for reachable module");
                None
            }
        })
        .collect()
}

/// Text-only surface for modules whose chrome is static.
struct StaticSurface {
    title: String,
    body: String,
}

impl Surface for StaticSurface {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self) -> String {
        self.body.clone()
    }
}

fn static_surface(title: &str, body: &str) -> Box<dyn Surface> {
    Box::new(StaticSurface {
        title: title.to_string(),
        body: body.to_string(),
    })
}

/// Surfaces for the three console modules.
pub fn builtin_surfaces() -> Result<SurfaceRegistry, ModelError> {
    let mut registry = SurfaceRegistry::new();
    registry.register(
        ProjectId::new("agricultura")?,
        static_surface("Agricultura", "Cultivos, fincas y producción"),
        static_surface(
            "Panel de Agricultura",
            "Resumen de cultivos registrados y producción por finca",
        ),
    );
    registry.register(
        ProjectId::new("gamificacion")?,
        static_surface("Gamificación", "Retos, insignias y puntajes"),
        static_surface(
            "Panel de Gamificación",
            "Participación en retos y ranking de usuarios",
        ),
    );
    registry.register(
        ProjectId::new("educacion")?,
        static_surface("Educación", "Cursos, lecciones y evaluaciones"),
        static_surface(
            "Panel de Educación",
            "Avance de estudiantes y cursos activos",
        ),
    );
    Ok(registry)
}
