//! Catalog validation.
//!
//! This module checks a parsed catalog before code generation: property kinds
//! must be consistent, every state must assign exactly the block's declared
//! properties, and every generated identifier must be valid and unique.

use crate::error::SchemaError;
use crate::ir::sanitize;
use crate::types::{BlockDef, Catalog, PropertyKind, PropertyMap};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Names imported into every generated unit.
const RESERVED_TYPE_NAMES: [&str; 2] = ["BlockProperty", "BlockState"];

/// Validates a parsed catalog against its collected property map.
///
/// # Arguments
/// * `catalog` - The catalog to validate
/// * `properties` - Property map collected from `catalog`
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_catalog(catalog: &Catalog, properties: &PropertyMap) -> Result<(), SchemaError> {
    validate_properties(properties)?;
    for block in catalog.blocks.values() {
        validate_block(block)?;
    }
    validate_identifiers(catalog, properties)?;
    Ok(())
}

/// Validates property kinds and numeric ranges.
fn validate_properties(properties: &PropertyMap) -> Result<(), SchemaError> {
    for (name, values) in properties {
        let Some(first) = values.first() else {
            return Err(SchemaError::EmptyProperty {
                property: name.clone(),
            });
        };

        let kind = PropertyKind::of(first);
        if let Some(mixed) = values.iter().find(|v| PropertyKind::of(v) != kind) {
            return Err(SchemaError::MixedPropertyKind {
                property: name.clone(),
                value: mixed.clone(),
            });
        }

        if kind.is_numeric() {
            let mut numbers = IdentifierTable::new(format!("values of property '{name}'"));
            for value in values {
                let digits = value.chars().all(|c| c.is_ascii_digit());
                let Some(number) = value.parse::<u8>().ok().filter(|_| digits) else {
                    return Err(SchemaError::InvalidNumericValue {
                        property: name.clone(),
                        value: value.clone(),
                    });
                };
                numbers.claim(value, &number.to_string())?;
            }
        }
    }
    Ok(())
}

/// Validates that every state of a block matches its declared properties and
/// that no two states share a property combination.
fn validate_block(block: &BlockDef) -> Result<(), SchemaError> {
    if block.states.is_empty() {
        return Err(SchemaError::EmptyStates {
            block: block.name.clone(),
        });
    }

    let mut seen: HashMap<Vec<&String>, u16> = HashMap::new();
    for state in &block.states {
        for (property, values) in &block.properties {
            let Some(value) = state.properties.get(property) else {
                return Err(SchemaError::MissingStateProperty {
                    block: block.name.clone(),
                    property: property.clone(),
                    id: state.id,
                });
            };
            if !values.contains(value) {
                return Err(SchemaError::UnknownPropertyValue {
                    block: block.name.clone(),
                    property: property.clone(),
                    value: value.clone(),
                    id: state.id,
                });
            }
        }

        if !block.properties.is_empty() {
            let combination: Vec<&String> = block
                .properties
                .keys()
                .filter_map(|p| state.properties.get(p))
                .collect();
            if let Some(first) = seen.insert(combination, state.id) {
                return Err(SchemaError::DuplicateState {
                    block: block.name.clone(),
                    first,
                    second: state.id,
                });
            }
        }

        if let Some(extra) = state
            .properties
            .keys()
            .find(|p| !block.properties.contains_key(*p))
        {
            return Err(SchemaError::UndeclaredStateProperty {
                block: block.name.clone(),
                property: extra.clone(),
                id: state.id,
            });
        }
    }
    Ok(())
}

/// Validates generated identifiers: all must be well formed, type names must
/// be unique in the generated unit and variant names unique per enum.
fn validate_identifiers(catalog: &Catalog, properties: &PropertyMap) -> Result<(), SchemaError> {
    let mut type_names = IdentifierTable::new("type names");
    for reserved in RESERVED_TYPE_NAMES {
        type_names.claim(reserved, reserved)?;
    }

    for (name, values) in properties {
        type_names.claim(name, &checked_identifier(name)?)?;

        if !values.first().is_some_and(|v| PropertyKind::of(v).is_numeric()) {
            let mut variants = IdentifierTable::new(format!("variants of property '{name}'"));
            for value in values {
                variants.claim(value, &checked_identifier(value)?)?;
            }
        }
    }

    for name in catalog.blocks.keys() {
        type_names.claim(name, &checked_identifier(name)?)?;
    }

    Ok(())
}

/// Sanitizes `raw` and checks the result is a usable type identifier.
fn checked_identifier(raw: &str) -> Result<String, SchemaError> {
    let identifier = sanitize(raw);
    if is_valid_identifier(&identifier) {
        Ok(identifier)
    } else {
        Err(SchemaError::invalid_identifier(raw, identifier))
    }
}

/// Returns true if `ident` can name a generated type or variant.
#[must_use]
pub fn is_valid_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_with_letter
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && ident != "Self"
}

/// Tracks which raw name claimed each identifier within one scope.
struct IdentifierTable {
    scope: String,
    claimed: IndexMap<String, String>,
}

impl IdentifierTable {
    fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            claimed: IndexMap::new(),
        }
    }

    fn claim(&mut self, raw: &str, identifier: &str) -> Result<(), SchemaError> {
        if let Some(first) = self.claimed.get(identifier) {
            return Err(SchemaError::collision(
                self.scope.clone(),
                identifier,
                first.clone(),
                raw,
            ));
        }
        self.claimed.insert(identifier.to_string(), raw.to_string());
        Ok(())
    }
}
