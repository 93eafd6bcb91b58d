//! # Generator Module
//!
//! The generator turns a parsed RDL compilation unit into controller class
//! stubs, one class per resource.
//!
//! ## Overview
//!
//! For every resource (and, recursively, every nested resource) the generator emits:
//! - **Header** - package declaration, user imports and the fixed framework imports
//! - **Class** - doc comment, class-level annotations and `<Name>Controller` declaration
//! - **Methods** - one handler stub per endpoint, including endpoints mixed in by traits
//!
//! ## Architecture
//!
//! ```text
//! CompilationUnit → Trait Resolution → Endpoint Rendering → Template Layout → Files
//! ```
//!
//! 1. **Trait Resolution** ([`TraitTable`]) - expands `use` sites into trait member endpoints
//! 2. **Path Resolution** ([`route_path`], [`path_variables`]) - composes routes and binds params
//! 3. **Endpoint Rendering** ([`render_endpoint`]) - markers, signature and placeholder body
//! 4. **Template Layout** ([`ControllerTemplateData`]) - Askama lays out the class text
//! 5. **Project Output** ([`generate_controllers`]) - writes `<Class>.java` under the package dir
//!
//! Data flows one way. The AST is only borrowed; nothing writes back into it.
//!
//! ## Generated Structure
//!
//! ```text
//! <output-root>/
//! └── com/example/api/        # package segments
//!     ├── UsersController.java
//!     └── PostsController.java  # nested resource, separate unit
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rdl_codegen::ast::load_unit;
//! use rdl_codegen::generator::{generate_controllers, GenerateOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! let unit = load_unit("api.yaml".as_ref())?;
//! let report = generate_controllers(&unit, "out".as_ref(), &GenerateOptions::default())?;
//! println!("{} controllers", report.files.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Template Customization
//!
//! The class layout lives in `templates/controller.java.txt`. All text placed in
//! it is pre-rendered, so the template never makes decisions.

mod endpoint;
mod paths;
mod project;
mod render;
mod templates;
mod traits;

pub use endpoint::*;
pub use paths::*;
pub use project::*;
pub use render::*;
pub use templates::*;
pub use traits::*;
