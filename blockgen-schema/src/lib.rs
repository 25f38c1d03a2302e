//! # Blockgen Schema
//!
//! Block catalog loader and type definitions.
//!
//! This crate provides:
//! - JSON catalog parsing (block name → properties and states)
//! - Property collection across the whole catalog
//! - Catalog validation
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{BlockShape, CatalogIr, ResolvedBlock, ResolvedProperty, ResolvedState, sanitize};
pub use parser::{load, parse_catalog, parse_catalog_file};
pub use types::{BlockDef, Catalog, PropertyKind, PropertyMap, StateEntry};
pub use validation::validate_catalog;
