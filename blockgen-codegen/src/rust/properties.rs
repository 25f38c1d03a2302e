//! Property type code generation.

use blockgen_schema::PropertyKind;
use blockgen_schema::ir::{CatalogIr, ResolvedProperty};

/// Largest number of variants that still fits a `#[repr(u8)]` enum.
const MAX_REPR_U8_VARIANTS: usize = 256;

/// Generator for property enums and numeric wrappers.
pub struct PropertyGenerator<'a> {
    ir: &'a CatalogIr,
}

impl<'a> PropertyGenerator<'a> {
    /// Creates a new property generator.
    #[must_use]
    pub fn new(ir: &'a CatalogIr) -> Self {
        Self { ir }
    }

    /// Generates one type per distinct property.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for property in self.ir.properties.values() {
            tracing::debug!(
                property = %property.name,
                kind = ?property.kind,
                values = property.values.len(),
                "emitting property"
            );
            match property.kind {
                PropertyKind::Numeric => output.push_str(&self.generate_numeric(property)),
                PropertyKind::Symbolic => output.push_str(&self.generate_enum(property)),
            }
        }

        output
    }

    /// Generates an enum with one variant per symbolic value.
    fn generate_enum(&self, property: &ResolvedProperty) -> String {
        let mut output = String::new();
        let rust_name = &property.type_name;

        output.push_str(&format!("/// Values of the `{}` property.\n", property.name));
        output.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
        if property.values.len() <= MAX_REPR_U8_VARIANTS {
            output.push_str("#[repr(u8)]\n");
        }
        output.push_str(&format!("pub enum {} {{\n", rust_name));
        for value in &property.values {
            output.push_str(&format!("    {},\n", property.variant_name(value)));
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl BlockProperty for {} {{}}\n\n", rust_name));

        output
    }

    /// Generates a `u8` newtype for a numeric property.
    fn generate_numeric(&self, property: &ResolvedProperty) -> String {
        let mut output = String::new();
        let rust_name = &property.type_name;

        output.push_str(&format!("/// Values of the `{}` property.\n", property.name));
        output.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
        output.push_str(&format!("pub struct {}(pub u8);\n\n", rust_name));

        output.push_str(&format!("impl BlockProperty for {} {{}}\n\n", rust_name));

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
    fn test_generate_enum() {
        let ir = create_test_ir(
            r#"{"lever": {"properties": {"facing": ["north", "south"]},
                "states": [{"id": 10, "properties": {"facing": "north"}},
                           {"id": 11, "properties": {"facing": "south"}}]}}"#,
        );
        let output = PropertyGenerator::new(&ir).generate();

        assert!(output.contains("#[repr(u8)]\npub enum Facing {\n    North,\n    South,\n}"));
        assert!(output.contains("impl BlockProperty for Facing {}"));
        assert!(output.contains("Clone, Copy, PartialEq, Eq"));
    }

    #[test]
    fn test_generate_numeric() {
        let ir = create_test_ir(
            r#"{"wheat": {"properties": {"age": ["0", "1", "2"]},
                "states": [{"id": 5, "properties": {"age": "0"}}]}}"#,
        );
        let output = PropertyGenerator::new(&ir).generate();

        assert!(output.contains("pub struct Age(pub u8);"));
        assert!(output.contains("impl BlockProperty for Age {}"));
        assert!(!output.contains("enum Age"));
    }

    #[test]
    fn test_generate_union_once() {
        let ir = create_test_ir(
            r#"{
                "lever": {"properties": {"facing": ["north", "south"]},
                          "states": [{"id": 1, "properties": {"facing": "north"}}]},
                "furnace": {"properties": {"facing": ["south", "east"]},
                            "states": [{"id": 2, "properties": {"facing": "east"}}]}
            }"#,
        );
        let output = PropertyGenerator::new(&ir).generate();

        assert_eq!(output.matches("pub enum Facing").count(), 1);
        assert!(output.contains("    North,\n    South,\n    East,\n}"));
    }

    #[test]
    fn test_generate_empty_ir() {
        let ir = create_test_ir(r#"{"stone": {"states": [{"id": 1}]}}"#);
        let output = PropertyGenerator::new(&ir).generate();
        assert!(output.is_empty());
    }
}
