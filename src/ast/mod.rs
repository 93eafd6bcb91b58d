//! # AST Module
//!
//! Node types produced by the external RDL lexer/parser stage, plus loaders
//! for the serialized form of a parsed compilation unit.
//!
//! The tree is pure data. Every closed set of variants ([`TypeRef`],
//! [`Literal`], [`Modifier`], [`RcContent`]) is an enum, so adding a variant
//! is flagged by the compiler at every `match` that handles it.

mod load;
mod types;

pub use load::*;
pub use types::*;
