//! State table code generation.
//!
//! The table lists one constructed value per catalog state together with the
//! id and name the catalog assigns it, so host tests can check that every
//! generated lookup agrees with the catalog.

use super::string_literal;
use blockgen_schema::ir::{BlockShape, CatalogIr};

const VEC: &str = "::std::vec::Vec";
const BOX: &str = "::std::boxed::Box";

/// Generator for the `all_block_states` function.
pub struct StateTableGenerator<'a> {
    ir: &'a CatalogIr,
}

impl<'a> StateTableGenerator<'a> {
    /// Creates a new state table generator.
    #[must_use]
    pub fn new(ir: &'a CatalogIr) -> Self {
        Self { ir }
    }

    /// Generates the state table function.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("/// Every catalog state with the id and name the catalog assigns it.\n");
        output.push_str("#[must_use]\n");
        // Std paths are spelled out: a block named `box` or `vec` shadows the prelude.
        output.push_str(&format!(
            "pub fn all_block_states() -> {VEC}<({BOX}<dyn BlockState>, u16, &'static str)> {{\n"
        ));
        output.push_str("    vec![\n");

        for block in &self.ir.blocks {
            // Simple blocks only ever report their first state.
            let states = match block.shape {
                BlockShape::Simple => &block.states[..block.states.len().min(1)],
                _ => &block.states[..],
            };
            for state in states {
                output.push_str(&format!(
                    "        ({BOX}::new({}) as {BOX}<dyn BlockState>, {}, {}),\n",
                    block.state_expr(state),
                    state.id,
                    string_literal(&block.state_name(state))
                ));
            }
        }

        output.push_str("    ]\n");
        output.push_str("}\n\n");

        output
    }
}
