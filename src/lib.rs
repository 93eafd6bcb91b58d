//! # rdl-codegen
//!
//! **rdl-codegen** compiles a parsed Resource Definition Language (RDL) tree into
//! Spring-style controller stubs: one class per resource, with route markers,
//! parameter bindings and `TODO` method bodies.
//!
//! ## Overview
//!
//! RDL describes nested HTTP resources, their endpoints, reusable trait mixins
//! and per-endpoint modifiers (request body type, response status, role guard,
//! transactional flag). Lexing and parsing RDL text happen upstream; this crate
//! starts from the finished AST.
//!
//! ## Architecture
//!
//! - **[`ast`]** - AST node types and loaders for serialized units (YAML/JSON)
//! - **[`generator`]** - trait resolution, path/parameter binding, rendering and file output
//! - **[`cli`]** - the `rdl` command line
//! - **[`logging`]** - `tracing-subscriber` setup driven by environment variables
//!
//! ### Code Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(rdl)
//!     participant Load as ast::load_unit
//!     participant Gen as generator::render_controllers
//!     participant Traits as generator::TraitTable
//!     participant Templates as generator::templates
//!     participant FS as File System
//!
//!     User->>CLI: rdl api.yaml out/
//!     CLI->>Load: load_unit("api.yaml")
//!     Load-->>CLI: CompilationUnit
//!     CLI->>Gen: generate_controllers(&unit, "out/")
//!     Gen->>Traits: TraitTable::new(&unit.traits)
//!     loop every resource, depth-first
//!         Gen->>Traits: resolve(trait use)
//!         Traits-->>Gen: member endpoints
//!         Gen->>Templates: ControllerTemplateData
//!         Templates-->>Gen: class text
//!     end
//!     Gen->>FS: write <Class>.java per resource
//!     CLI-->>User: ✅ Controllers generated in: out/
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rdl_codegen::ast::{CompilationUnit, Endpoint, HttpVerb, Param, RcContent, Resource, TypeRef};
//! use rdl_codegen::generator::render_controllers;
//!
//! let mut show = Endpoint::new(HttpVerb::Get, "/{id}");
//! show.params.push(Param::new("id", TypeRef::simple("int")));
//! let unit = CompilationUnit {
//!     resources: vec![Resource {
//!         path: "users".to_string(),
//!         annotations: vec![],
//!         params: vec![],
//!         content: vec![RcContent::Endpoint(show)],
//!     }],
//!     ..CompilationUnit::default()
//! };
//!
//! let controllers = render_controllers(&unit)?;
//! assert_eq!(controllers[0].class_name, "UsersController");
//! assert!(controllers[0].source.contains("@PathVariable int id"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod ast;
pub mod cli;
pub mod generator;
pub mod logging;

pub use ast::{load_unit, CompilationUnit};
pub use generator::{generate_controllers, render_controllers, GenerateOptions};
