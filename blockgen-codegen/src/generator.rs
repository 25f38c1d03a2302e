//! Top-level generator assembling one generated source unit.

use crate::rust::{BlockStateGenerator, PropertyGenerator, StateTableGenerator};
use blockgen_schema::CatalogIr;

/// Banner marking the start and end of generated code.
pub const AUTO_GENERATED: &str = "\
// ----------------------------------------------------------------------------
// @generated by blockgen from the block catalog. DO NOT EDIT THIS FILE MANUALLY.
// ----------------------------------------------------------------------------";

/// Default license text placed at the top of generated files.
pub const DEFAULT_LICENSE_HEADER: &str = "\
Block-state definitions generated from the block catalog.

Licensed under the MIT license. The catalog data keeps the license of its source.";

/// Default module the generated code imports the block traits from.
pub const DEFAULT_TRAIT_PATH: &str = "crate::block";

/// Options controlling the generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// License text for the leading banner, without comment markers.
    pub license_header: String,
    /// Module path that exports `BlockProperty` and `BlockState`.
    pub trait_path: String,
    /// Whether to emit `all_block_states()`.
    pub emit_state_table: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            license_header: DEFAULT_LICENSE_HEADER.to_string(),
            trait_path: DEFAULT_TRAIT_PATH.to_string(),
            emit_state_table: false,
        }
    }
}

impl CodegenOptions {
    /// Sets the license banner text.
    #[must_use]
    pub fn with_license_header(mut self, header: impl Into<String>) -> Self {
        self.license_header = header.into();
        self
    }

    /// Sets the module the block traits are imported from.
    #[must_use]
    pub fn with_trait_path(mut self, path: impl Into<String>) -> Self {
        self.trait_path = path.into();
        self
    }

    /// Enables or disables the state table.
    #[must_use]
    pub fn with_state_table(mut self, enabled: bool) -> Self {
        self.emit_state_table = enabled;
        self
    }
}

/// Generates Rust source for a resolved catalog.
pub struct Generator<'a> {
    ir: &'a CatalogIr,
    options: CodegenOptions,
}

impl<'a> Generator<'a> {
    /// Creates a generator with default options.
    #[must_use]
    pub fn new(ir: &'a CatalogIr) -> Self {
        Self::with_options(ir, CodegenOptions::default())
    }

    /// Creates a generator with the given options.
    #[must_use]
    pub fn with_options(ir: &'a CatalogIr, options: CodegenOptions) -> Self {
        Self { ir, options }
    }

    /// Generates the complete source unit.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.generate_license());
        output.push_str(AUTO_GENERATED);
        output.push_str("\n\n");

        output.push_str("#[allow(unused_imports)]\n");
        output.push_str(&format!(
            "use {}::{{BlockProperty, BlockState}};\n\n",
            self.options.trait_path
        ));

        output.push_str(&PropertyGenerator::new(self.ir).generate());
        output.push_str(&BlockStateGenerator::new(self.ir).generate());

        if self.options.emit_state_table {
            output.push_str(&StateTableGenerator::new(self.ir).generate());
        }

        output.push_str(AUTO_GENERATED);
        output.push('\n');

        tracing::info!(
            properties = self.ir.properties.len(),
            blocks = self.ir.blocks.len(),
            states = self.ir.state_count(),
            bytes = output.len(),
            "generated block-state definitions"
        );

        output
    }

    /// Wraps the license text in a block comment.
    fn generate_license(&self) -> String {
        let header = self.options.license_header.trim();
        if header.is_empty() {
            return String::new();
        }

        let mut output = String::from("/*\n");
        for line in header.lines() {
            let line = line.replace("*/", "* /");
            if line.is_empty() {
                output.push('\n');
            } else {
                output.push_str(&format!("  {}\n", line));
            }
        }
        output.push_str("*/\n\n");
        output
    }
}
