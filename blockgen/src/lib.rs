//! # Blockgen
//!
//! Generates statically typed block-state definitions from a block catalog.
//!
//! A catalog lists every block, the properties it exposes and the numeric id
//! of each legal combination of property values. Blockgen turns it into one
//! Rust source unit: an enum or `u8` newtype per property and a type per
//! block whose `get_id`/`get_name` resolve a value to its catalog entry.
//!
//! ## Quick Start
//!
//! ```
//! let json = r#"{"stone": {"states": [{"id": 1}]}}"#;
//! let code = blockgen::codegen::generate_from_json(json)?;
//! assert!(code.contains("pub struct Stone;"));
//! # Ok::<(), blockgen::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Traits implemented by generated code
//! - [`schema`] - Catalog parsing, validation and intermediate representation
//! - [`codegen`] - Rust code generation from catalogs
//! - [`cli`] - Command-line front end used by the `blockgen` binary

pub mod cli;

/// Traits implemented by generated code.
pub mod core {
    pub use blockgen_core::*;
}

/// Catalog parsing and validation.
pub mod schema {
    pub use blockgen_schema::*;
}

/// Code generation from block catalogs.
pub mod codegen {
    pub use blockgen_codegen::*;
}
