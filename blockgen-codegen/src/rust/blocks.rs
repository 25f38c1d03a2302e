//! Block-state code generation.
//!
//! Each block becomes one type whose shape depends on its properties:
//! a unit struct for blocks without properties, a single-field struct for
//! one symbolic or numeric property, and a multi-field struct otherwise.
//! `get_id` and `get_name` match on the fields, one arm per catalog state.

use super::string_literal;
use blockgen_schema::ir::{BlockShape, CatalogIr, ResolvedBlock, ResolvedState};

/// Derives shared by every generated block-state type.
const DERIVES: &str = "Debug, Clone, Copy, PartialEq, Eq, Hash";

/// Generator for block-state types.
pub struct BlockStateGenerator<'a> {
    ir: &'a CatalogIr,
}

impl<'a> BlockStateGenerator<'a> {
    /// Creates a new block-state generator.
    #[must_use]
    pub fn new(ir: &'a CatalogIr) -> Self {
        Self { ir }
    }

    /// Generates all block-state definitions.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for block in &self.ir.blocks {
            tracing::debug!(block = %block.name, shape = ?block.shape, "emitting block state");
            output.push_str(&self.generate_block(block));
        }

        output
    }

    /// Generates the type and `BlockState` impl for one block.
    #[must_use]
    pub fn generate_block(&self, block: &ResolvedBlock) -> String {
        match block.shape {
            BlockShape::Simple => self.generate_simple(block),
            BlockShape::Tuple | BlockShape::Numeric | BlockShape::Composite => {
                self.generate_matched(block)
            }
        }
    }

    /// Generates a unit struct with a fixed id and name.
    fn generate_simple(&self, block: &ResolvedBlock) -> String {
        let mut output = String::new();
        let rust_name = &block.type_name;

        let Some(state) = block.states.first() else {
            return output;
        };
        if block.states.len() > 1 {
            tracing::warn!(
                block = %block.name,
                states = block.states.len(),
                "block without properties has several states, using the first"
            );
        }

        output.push_str(&format!("/// Block state of `{}`.\n", block.name));
        output.push_str(&format!("#[derive({}, Default)]\n", DERIVES));
        output.push_str(&format!("pub struct {};\n\n", rust_name));

        output.push_str(&format!("impl BlockState for {} {{\n", rust_name));
        output.push_str("    fn get_id(&self) -> u16 {\n");
        output.push_str(&format!("        {}\n", state.id));
        output.push_str("    }\n\n");
        output.push_str("    fn get_name(&self) -> &'static str {\n");
        output.push_str(&format!(
            "        {}\n",
            string_literal(&block.state_name(state))
        ));
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }

    /// Generates a struct with one field per property and matching lookups.
    fn generate_matched(&self, block: &ResolvedBlock) -> String {
        let mut output = String::new();
        let rust_name = &block.type_name;

        let fields: Vec<String> = block
            .properties
            .iter()
            .map(|p| format!("pub {}", p.type_name))
            .collect();

        output.push_str(&format!("/// Block state of `{}`.\n", block.name));
        output.push_str(&format!("#[derive({})]\n", DERIVES));
        output.push_str(&format!("pub struct {}({});\n\n", rust_name, fields.join(", ")));

        // A complete catalog makes the fallback arm dead.
        output.push_str("#[allow(unreachable_patterns)]\n");
        output.push_str(&format!("impl BlockState for {} {{\n", rust_name));

        output.push_str("    fn get_id(&self) -> u16 {\n");
        output.push_str(&self.generate_match(block, |state| state.id.to_string()));
        output.push_str("    }\n\n");

        output.push_str("    fn get_name(&self) -> &'static str {\n");
        output.push_str(&self.generate_match(block, |state| {
            string_literal(&block.state_name(state))
        }));
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }

    /// Generates the `match` body shared by `get_id` and `get_name`.
    fn generate_match(
        &self,
        block: &ResolvedBlock,
        arm_value: impl Fn(&ResolvedState) -> String,
    ) -> String {
        let mut output = String::new();

        let scrutinee = match block.shape {
            BlockShape::Numeric => "self.0.0",
            BlockShape::Tuple => "self.0",
            BlockShape::Composite | BlockShape::Simple => "self",
        };
        output.push_str(&format!("        match {} {{\n", scrutinee));

        for state in &block.states {
            let pattern = match block.shape {
                BlockShape::Numeric => state.values.concat(),
                BlockShape::Tuple => block.field_exprs(state).concat(),
                BlockShape::Composite | BlockShape::Simple => block.state_expr(state),
            };
            output.push_str(&format!("            {} => {},\n", pattern, arm_value(state)));
        }

        output.push_str("            _ => unreachable!(\"invalid block state: {:?}\", self),\n");
        output.push_str("        }\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockgen_schema::parse_catalog;

    fn create_test_ir(json: &str) -> CatalogIr {
        let catalog = parse_catalog(json).expect("Failed to parse");
        CatalogIr::from_catalog(&catalog).expect("Failed to resolve")
    }

    #[test]
    fn test_generate_simple() {
        let ir = create_test_ir(r#"{"stone": {"states": [{"id": 1}]}}"#);
        let output = BlockStateGenerator::new(&ir).generate();

        assert!(output.contains("pub struct Stone;"));
        assert!(output.contains("Hash, Default)]"));
        assert!(output.contains("impl BlockState for Stone {"));
        assert!(output.contains("fn get_id(&self) -> u16 {\n        1\n    }"));
        assert!(output.contains("fn get_name(&self) -> &'static str {\n        \"stone\"\n    }"));
        assert!(!output.contains("match"));
    }

    #[test]
    fn test_generate_simple_uses_first_state() {
        let ir = create_test_ir(r#"{"air": {"states": [{"id": 0}, {"id": 7}]}}"#);
        let output = BlockStateGenerator::new(&ir).generate();

        assert!(output.contains("        0\n"));
        assert!(!output.contains("        7\n"));
    }

    #[test]
    fn test_generate_tuple() {
        let ir = create_test_ir(
            r#"{"lever": {"properties": {"facing": ["north", "south"]},
                "states": [{"id": 10, "properties": {"facing": "north"}},
                           {"id": 11, "properties": {"facing": "south"}}]}}"#,
        );
        let output = BlockStateGenerator::new(&ir).generate();

        assert!(output.contains("pub struct Lever(pub Facing);"));
        assert!(output.contains("match self.0 {"));
        assert!(output.contains("Facing::North => 10,"));
        assert!(output.contains("Facing::South => 11,"));
        assert!(output.contains("Facing::North => \"lever::north\","));
        assert!(output.contains("#[allow(unreachable_patterns)]"));
        assert!(output.contains("_ => unreachable!(\"invalid block state: {:?}\", self),"));
    }

    #[test]
    fn test_generate_numeric() {
        let ir = create_test_ir(
            r#"{"wheat": {"properties": {"age": ["0", "1"]},
                "states": [{"id": 5, "properties": {"age": "0"}},
                           {"id": 6, "properties": {"age": "1"}}]}}"#,
        );
        let output = BlockStateGenerator::new(&ir).generate();

        assert!(output.contains("pub struct Wheat(pub Age);"));
        assert!(output.contains("match self.0.0 {"));
        assert!(output.contains("            0 => 5,\n            1 => 6,\n"));
        assert!(output.contains("1 => \"wheat::1\","));
    }

    #[test]
    fn test_generate_composite() {
        let ir = create_test_ir(
            r#"{"minecraft:furnace": {
                "properties": {"facing": ["north"], "lit": ["true", "false"]},
                "states": [{"id": 15, "properties": {"facing": "north", "lit": "true"}},
                           {"id": 16, "properties": {"lit": "false", "facing": "north"}}]}}"#,
        );
        let output = BlockStateGenerator::new(&ir).generate();

        assert!(output.contains("pub struct MinecraftFurnace(pub Facing, pub Lit);"));
        assert!(output.contains("match self {"));
        assert!(output.contains("MinecraftFurnace(Facing::North, Lit::True) => 15,"));
        assert!(output.contains("MinecraftFurnace(Facing::North, Lit::False) => 16,"));
        assert!(output.contains(
            "MinecraftFurnace(Facing::North, Lit::False) => \"minecraft:furnace::north,false\","
        ));
    }

    #[test]
    fn test_generate_composite_mixed_kinds() {
        let ir = create_test_ir(
            r#"{"note_block": {
                "properties": {"note": ["0", "1"], "powered": ["true", "false"]},
                "states": [{"id": 23, "properties": {"note": "1", "powered": "false"}}]}}"#,
        );
        let output = BlockStateGenerator::new(&ir).generate();

        assert!(output.contains("pub struct NoteBlock(pub Note, pub Powered);"));
        assert!(output.contains("NoteBlock(Note(1), Powered::False) => 23,"));
    }
}
