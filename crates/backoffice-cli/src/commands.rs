use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::info;

use backoffice_access::{AccessError, AccessRegistry, resolve_access};
use backoffice_cli::shell::{build_menu, builtin_surfaces};
use backoffice_model::{FieldName, Record, RoleId};
use backoffice_registry::{default_registry, load_registry};
use backoffice_view::CollectionView;

use crate::cli::{BrowseArgs, ModulesArgs};
use crate::table::{apply_table_style, header_cell};

/// Built-in registry, or the deploy-time TOML override when given.
pub fn load_access_registry(path: Option<&Path>) -> Result<AccessRegistry> {
    let registry = match path {
        Some(path) => load_registry(path)
            .with_context(|| format!("load registry {}", path.display()))?,
        None => default_registry().context("load built-in registry")?,
    };
    info!(
        roles = registry.roles().count(),
        projects = registry.projects().len(),
        "registry loaded"
    );
    Ok(registry)
}

pub fn run_modules(args: &ModulesArgs, registry: &AccessRegistry) -> Result<i32> {
    let role = RoleId::new(args.role.clone()).context("parse role id")?;
    let decision = match resolve_access(registry, &role) {
        Ok(decision) => decision,
        Err(AccessError::UnknownRole(role)) => {
            // Safe-deny fallback: the shell stays up, the user sees nothing.
            eprintln!("error: role not present in registry: {role}");
            println!("Access denied: no modules, no admin panel.");
            return Ok(2);
        }
        Err(error) => return Err(error.into()),
    };

    let surfaces = builtin_surfaces().context("build module surfaces")?;
    let menu = build_menu(&decision, &surfaces);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Module"),
        header_cell("Menu"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for entry in &menu {
        table.add_row(vec![
            Cell::new(entry.project.id.as_str()),
            Cell::new(entry.surfaces.menu.title()),
            Cell::new(entry.surfaces.menu.render()),
        ]);
    }
    println!("{table}");
    println!(
        "Admin panel: {}",
        if decision.has_admin_panel { "yes" } else { "no" }
    );

    if args.dashboards {
        for entry in &menu {
            println!();
            println!("== {} ==", entry.surfaces.dashboard.title());
            println!("{}", entry.surfaces.dashboard.render());
        }
    }
    Ok(0)
}

pub fn run_roles(registry: &AccessRegistry) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Name"),
        header_cell("Admin panel"),
        header_cell("Global"),
        header_cell("Allowed projects"),
    ]);
    apply_table_style(&mut table);
    for role in registry.roles() {
        let allowed: Vec<&str> = role
            .allowed_projects
            .iter()
            .map(|project| project.as_str())
            .collect();
        table.add_row(vec![
            Cell::new(role.id.as_str()),
            Cell::new(&role.name),
            Cell::new(if role.has_admin_panel { "yes" } else { "no" }),
            Cell::new(if role.is_global_role { "yes" } else { "no" }),
            Cell::new(allowed.join(", ")),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_browse(args: &BrowseArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.data)
        .with_context(|| format!("read {}", args.data.display()))?;
    let records: Vec<Record> = serde_json::from_str(&contents)
        .with_context(|| format!("parse records from {}", args.data.display()))?;

    let fields = args
        .fields
        .iter()
        .map(|field| FieldName::new(field.clone()))
        .collect::<Result<Vec<_>, _>>()
        .context("parse search fields")?;

    let page_size = usize::try_from(args.page_size).context("page size")?;
    let mut view = CollectionView::new(fields, page_size);
    if let Some(term) = &args.search {
        view.set_search_term(term.clone());
    }
    // First pass establishes total_pages so the requested page can clamp.
    let probe = view.recompute(&records);
    view.set_page(args.page, probe.total_pages);
    let result = view.recompute(&records);

    let columns: BTreeSet<&FieldName> = result
        .paginated
        .iter()
        .flat_map(|record| record.field_names())
        .collect();

    let mut table = Table::new();
    table.set_header(
        columns
            .iter()
            .map(|column| header_cell(column.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for record in &result.paginated {
        table.add_row(
            columns
                .iter()
                .map(|column| Cell::new(record.search_text(column)))
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
    println!(
        "page {} of {} ({} matching, {} total)",
        result.current_page,
        result.total_pages,
        result.total_items,
        records.len()
    );
    Ok(())
}
