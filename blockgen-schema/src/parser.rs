//! Block catalog parser.
//!
//! This module reads the JSON block catalog into [`Catalog`]. The catalog is
//! an object keyed by raw block name; each entry has an optional
//! `properties` object and a required `states` array.

use crate::error::ParseError;
use crate::types::{BlockDef, Catalog, PropertyMap, StateEntry};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Catalog entry as it appears in the JSON file.
#[derive(Debug, Deserialize)]
struct RawBlock {
    #[serde(default)]
    properties: IndexMap<String, Vec<String>>,
    states: Option<Vec<StateEntry>>,
}

/// Parses a block catalog from a JSON string.
///
/// # Arguments
/// * `json` - Catalog content
///
/// # Returns
/// Parsed catalog, preserving block, property and value order.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a block has no `states`.
pub fn parse_catalog(json: &str) -> Result<Catalog, ParseError> {
    let raw: IndexMap<String, RawBlock> = serde_json::from_str(json)?;
    let mut catalog = Catalog::new();

    for (name, block) in raw {
        let states = block
            .states
            .ok_or_else(|| ParseError::missing_states(&name))?;
        catalog.add_block(BlockDef {
            name,
            properties: block.properties,
            states,
        });
    }

    tracing::debug!(
        blocks = catalog.len(),
        states = catalog.state_count(),
        "parsed block catalog"
    );

    Ok(catalog)
}

/// Parses a block catalog from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_catalog_file(path: &Path) -> Result<Catalog, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_catalog(&json)
}

/// Parses a catalog and collects its property map.
///
/// # Returns
/// The union of every property's values and the block table.
///
/// # Errors
/// Returns `ParseError` if parsing fails.
pub fn load(json: &str) -> Result<(PropertyMap, Catalog), ParseError> {
    let catalog = parse_catalog(json)?;
    Ok((catalog.property_map(), catalog))
}
