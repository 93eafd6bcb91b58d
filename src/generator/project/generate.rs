use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::ast::{CompilationUnit, Param, RcContent, Resource};
use crate::generator::endpoint::render_endpoint;
use crate::generator::render::{controller_class_name, doc_lines, render_annotations};
use crate::generator::templates::{write_controller, ControllerTemplateData, MethodBlock};
use crate::generator::traits::TraitTable;

/// One controller class rendered from one resource node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedController {
    /// Class name, e.g. `UsersController`
    pub class_name: String,
    /// Full route prefix of the resource (ancestors plus its own segment)
    pub route_prefix: String,
    /// Complete compilation-unit text
    pub source: String,
}

impl RenderedController {
    /// File name inside the package directory.
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name)
    }
}

/// Options for [`generate_controllers`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Render and report target paths without touching the filesystem
    pub dry_run: bool,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Directory the controllers were (or would be) written to
    pub output_dir: PathBuf,
    /// Files in emission order
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Shared, read-only state of one rendering run.
struct RenderContext<'a> {
    unit: &'a CompilationUnit,
    traits: TraitTable<'a>,
}

/// Output directory for a unit: `root` joined with the package's segments.
pub fn output_dir(unit: &CompilationUnit, root: &Path) -> PathBuf {
    match unit.package.as_deref().map(str::trim) {
        Some(pkg) if !pkg.is_empty() => pkg
            .split('.')
            .fold(root.to_path_buf(), |dir, seg| dir.join(seg)),
        _ => root.to_path_buf(),
    }
}

/// Render every resource of `unit` (nested ones included) into controller text.
///
/// Units come out depth-first: a resource before its nested resources, siblings
/// in declaration order. An unresolvable trait-use aborts the whole run.
pub fn render_controllers(unit: &CompilationUnit) -> anyhow::Result<Vec<RenderedController>> {
    let ctx = RenderContext {
        unit,
        traits: TraitTable::new(&unit.traits)?,
    };
    let mut out = Vec::new();
    for resource in &unit.resources {
        render_resource(&ctx, resource, Vec::new(), &mut out)?;
    }
    Ok(out)
}

fn render_resource<'a>(
    ctx: &RenderContext<'a>,
    res: &'a Resource,
    ancestors: Vec<&'a str>,
    out: &mut Vec<RenderedController>,
) -> anyhow::Result<()> {
    let class_name = controller_class_name(&res.path);
    let mut prefix = ancestors;
    prefix.push(&res.path);

    let mut methods: Vec<MethodBlock> = Vec::new();
    for content in &res.content {
        match content {
            RcContent::Endpoint(ep) => methods.push(render_endpoint(ep, &prefix)),
            RcContent::Use(use_site) => {
                for ep in ctx.traits.resolve(use_site)? {
                    methods.push(render_endpoint(&ep, &prefix));
                }
            }
            // Emitted as its own unit once this class is closed.
            RcContent::Resource(_) => {}
        }
    }

    let data = ControllerTemplateData {
        package: ctx.unit.package.as_deref().unwrap_or_default().trim().to_string(),
        imports: ctx.unit.imports.clone(),
        doc_lines: doc_lines(&res.annotations),
        annotations: render_annotations(&res.annotations),
        class_name: class_name.clone(),
        resource_params: res.params.iter().map(describe_param).collect(),
        methods,
    };
    let source = data
        .render_source()
        .with_context(|| format!("Failed to render {class_name}"))?;
    tracing::debug!(
        class = %class_name,
        methods = data.methods.len(),
        "Rendered controller"
    );
    out.push(RenderedController {
        class_name,
        route_prefix: prefix.concat(),
        source,
    });

    for content in &res.content {
        if let RcContent::Resource(child) = content {
            render_resource(ctx, child, prefix.clone(), out)?;
        }
    }
    Ok(())
}

fn describe_param(p: &Param) -> String {
    format!("{} : {}", p.name, p.ty)
}

/// Render `unit` and write one `<Class>.java` per resource under `root`.
///
/// Rendering completes before anything is written, so an unknown trait leaves
/// the filesystem untouched. Existing files are overwritten.
pub fn generate_controllers(
    unit: &CompilationUnit,
    root: &Path,
    options: &GenerateOptions,
) -> anyhow::Result<GenerationReport> {
    let controllers = render_controllers(unit)?;
    let out_dir = output_dir(unit, root);

    if !options.dry_run {
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    }

    let mut seen = HashSet::new();
    let mut files = Vec::with_capacity(controllers.len());
    for controller in &controllers {
        if !seen.insert(controller.class_name.as_str()) {
            tracing::warn!(
                class = %controller.class_name,
                route = %controller.route_prefix,
                "Controller class generated more than once; later resource overwrites earlier"
            );
        }
        let path = out_dir.join(controller.file_name());
        if !options.dry_run {
            write_controller(&path, &controller.source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        files.push(path);
    }

    tracing::info!(
        output_dir = %out_dir.display(),
        controllers = files.len(),
        dry_run = options.dry_run,
        "Controller generation finished"
    );
    Ok(GenerationReport {
        output_dir: out_dir,
        files,
        dry_run: options.dry_run,
    })
}
