//! # Blockgen Codegen
//!
//! Code generation from block catalogs.
//!
//! This crate provides:
//! - Property type generation (enums and numeric wrappers)
//! - Block-state type generation with `get_id`/`get_name` lookups
//! - Optional state table for catalog coverage tests
//! - Build script integration
//!
//! Generation is a pure function of the catalog text: the same catalog always
//! produces byte-identical output.

pub mod error;
pub mod generator;
pub mod rust;

pub use error::CodegenError;
pub use generator::{CodegenOptions, Generator};

use std::path::Path;

/// Generates Rust code from a JSON block catalog string.
///
/// # Arguments
/// * `json` - Block catalog content
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or validation fails.
pub fn generate_from_json(json: &str) -> Result<String, CodegenError> {
    generate_from_json_with(json, &CodegenOptions::default())
}

/// Generates Rust code from a JSON block catalog string with custom options.
///
/// # Errors
/// Returns `CodegenError` if parsing or validation fails.
pub fn generate_from_json_with(
    json: &str,
    options: &CodegenOptions,
) -> Result<String, CodegenError> {
    let catalog = blockgen_schema::parse_catalog(json)?;
    let ir = blockgen_schema::CatalogIr::from_catalog(&catalog)?;
    let generator = Generator::with_options(&ir, options.clone());
    Ok(generator.generate())
}

/// Generates Rust code from a JSON block catalog file.
///
/// # Arguments
/// * `path` - Path to the catalog file
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or validation fails.
pub fn generate_from_file(path: &Path) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json)
}

/// Generates Rust code from a catalog file and writes it to `output`,
/// creating parent directories as needed.
///
/// Nothing is written when generation fails.
///
/// # Errors
/// Returns `CodegenError` if reading, generation, or writing fails.
pub fn generate_to_file(
    input: &Path,
    output: &Path,
    options: &CodegenOptions,
) -> Result<(), CodegenError> {
    let json = std::fs::read_to_string(input)?;
    let code = generate_from_json_with(&json, options)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, code)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        "wrote generated block states"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVER: &str = r#"{"lever": {"properties": {"facing": ["north", "south"]},
        "states": [{"id": 10, "properties": {"facing": "north"}},
                   {"id": 11, "properties": {"facing": "south"}}]}}"#;

    #[test]
    fn test_generate_from_json() {
        let output = generate_from_json(LEVER).expect("generate");
        assert!(output.contains("pub enum Facing {\n    North,\n    South,\n}"));
        assert!(output.contains("Facing::North => 10,"));
    }

    #[test]
    fn test_generate_from_json_missing_states() {
        let err = generate_from_json(r#"{"stone": {}}"#).unwrap_err();
        assert!(matches!(err, CodegenError::Parse(_)));
    }

    #[test]
    fn test_generate_from_json_invalid_catalog() {
        let err = generate_from_json(r#"{"stone": {"states": []}}"#).unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
    }

    #[test]
    fn test_generate_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("blocks.json");
        std::fs::write(&path, LEVER).expect("write");

        let output = generate_from_file(&path).expect("generate");
        assert_eq!(output, generate_from_json(LEVER).expect("generate"));
    }

    #[test]
    fn test_generate_to_file_creates_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("blocks.json");
        let output = dir.path().join("src").join("generated").join("block.rs");
        std::fs::write(&input, LEVER).expect("write");

        generate_to_file(&input, &output, &CodegenOptions::default()).expect("generate");

        let code = std::fs::read_to_string(&output).expect("read");
        assert!(code.contains("pub struct Lever(pub Facing);"));
    }

    #[test]
    fn test_generate_to_file_does_not_write_on_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("blocks.json");
        let output = dir.path().join("block.rs");
        std::fs::write(&input, r#"{"stone": {"states": []}}"#).expect("write");

        assert!(generate_to_file(&input, &output, &CodegenOptions::default()).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_from_file_missing() {
        let err = generate_from_file(Path::new("/nonexistent/blocks.json")).unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
