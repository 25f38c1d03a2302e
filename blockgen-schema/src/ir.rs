//! Intermediate representation for code generation.
//!
//! This module provides a validated, resolved view of the catalog: every
//! property carries its generated type name and kind, and every block carries
//! its shape and its states as value lists in field order.

use crate::error::SchemaError;
use crate::types::{BlockDef, Catalog, PropertyKind};
use crate::validation::validate_catalog;
use indexmap::IndexMap;

/// Intermediate representation of a catalog for code generation.
#[derive(Debug, Clone)]
pub struct CatalogIr {
    /// Every distinct property, in first-seen order.
    pub properties: IndexMap<String, ResolvedProperty>,
    /// Blocks in catalog order.
    pub blocks: Vec<ResolvedBlock>,
}

impl CatalogIr {
    /// Validates a parsed catalog and builds its intermediate representation.
    ///
    /// # Errors
    /// Returns `SchemaError` if the catalog fails validation.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, SchemaError> {
        let property_map = catalog.property_map();
        validate_catalog(catalog, &property_map)?;

        let properties: IndexMap<String, ResolvedProperty> = property_map
            .iter()
            .map(|(name, values)| (name.clone(), ResolvedProperty::new(name, values.clone())))
            .collect();

        let blocks = catalog
            .blocks
            .values()
            .map(|block| ResolvedBlock::from_block_def(block, &properties))
            .collect();

        Ok(Self { properties, blocks })
    }

    /// Gets a resolved property by raw name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&ResolvedProperty> {
        self.properties.get(name)
    }

    /// Gets a resolved block by raw name.
    #[must_use]
    pub fn get_block(&self, name: &str) -> Option<&ResolvedBlock> {
        self.blocks.iter().find(|b| b.name == name)
    }

    /// Returns the total number of states over all blocks.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.blocks.iter().map(|b| b.states.len()).sum()
    }
}

/// Resolved property information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProperty {
    /// Raw property name.
    pub name: String,
    /// Generated type name.
    pub type_name: String,
    /// Value kind, fixed by the first value.
    pub kind: PropertyKind,
    /// Union of the values used by any block, in first-seen order.
    pub values: Vec<String>,
}

impl ResolvedProperty {
    /// Creates a resolved property from its raw name and value union.
    #[must_use]
    pub fn new(name: &str, values: Vec<String>) -> Self {
        let kind = values
            .first()
            .map_or(PropertyKind::Symbolic, |v| PropertyKind::of(v));
        Self {
            name: name.to_string(),
            type_name: sanitize(name),
            kind,
            values,
        }
    }

    /// Returns the enum variant name for a symbolic value.
    #[must_use]
    pub fn variant_name(&self, value: &str) -> String {
        sanitize(value)
    }

    /// Returns the expression (and pattern) denoting `value` of this property,
    /// `Age(3)` for numeric properties and `Facing::North` for symbolic ones.
    #[must_use]
    pub fn value_expr(&self, value: &str) -> String {
        match self.kind {
            PropertyKind::Numeric => format!("{}({})", self.type_name, value),
            PropertyKind::Symbolic => format!("{}::{}", self.type_name, self.variant_name(value)),
        }
    }
}

/// Structural pattern of a generated block-state type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockShape {
    /// No properties: a unit struct with a fixed id and name.
    Simple,
    /// One symbolic property: a struct wrapping its enum.
    Tuple,
    /// One numeric property: a struct wrapping its numeric newtype.
    Numeric,
    /// Two or more properties: one field per property.
    Composite,
}

impl BlockShape {
    /// Classifies a block by the arity and kind of its properties.
    #[must_use]
    pub fn classify(properties: &[ResolvedProperty]) -> Self {
        match properties {
            [] => Self::Simple,
            [single] if single.kind.is_numeric() => Self::Numeric,
            [_] => Self::Tuple,
            _ => Self::Composite,
        }
    }
}

/// Resolved block information.
#[derive(Debug, Clone)]
pub struct ResolvedBlock {
    /// Raw block name.
    pub name: String,
    /// Generated type name.
    pub type_name: String,
    /// Generated shape.
    pub shape: BlockShape,
    /// Field properties in declaration order.
    pub properties: Vec<ResolvedProperty>,
    /// States in catalog order.
    pub states: Vec<ResolvedState>,
}

impl ResolvedBlock {
    /// Creates a resolved block from a validated block definition.
    #[must_use]
    pub fn from_block_def(
        block: &BlockDef,
        properties: &IndexMap<String, ResolvedProperty>,
    ) -> Self {
        let fields: Vec<ResolvedProperty> = block
            .properties
            .iter()
            .map(|(name, values)| {
                properties
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| ResolvedProperty::new(name, values.clone()))
            })
            .collect();

        let states = block
            .states
            .iter()
            .map(|state| ResolvedState {
                id: state.id,
                values: block
                    .properties
                    .keys()
                    .map(|name| state.properties.get(name).cloned().unwrap_or_default())
                    .collect(),
            })
            .collect();

        Self {
            name: block.name.clone(),
            type_name: sanitize(&block.name),
            shape: BlockShape::classify(&fields),
            properties: fields,
            states,
        }
    }

    /// Returns the canonical state name: `"<block>"` for simple blocks,
    /// `"<block>::<v1>,<v2>,..."` otherwise.
    #[must_use]
    pub fn state_name(&self, state: &ResolvedState) -> String {
        if state.values.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.name, state.values.join(","))
        }
    }

    /// Returns the expression constructing `state`, e.g.
    /// `OakDoor(Facing::North, Half::Upper)`.
    #[must_use]
    pub fn state_expr(&self, state: &ResolvedState) -> String {
        if self.properties.is_empty() {
            return self.type_name.clone();
        }
        format!("{}({})", self.type_name, self.field_exprs(state).join(", "))
    }

    /// Returns the expression of each field of `state`, in field order.
    #[must_use]
    pub fn field_exprs(&self, state: &ResolvedState) -> Vec<String> {
        self.properties
            .iter()
            .zip(&state.values)
            .map(|(property, value)| property.value_expr(value))
            .collect()
    }
}

/// A state with its property values in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedState {
    /// State identifier.
    pub id: u16,
    /// Values in the block's property order; empty for simple blocks.
    pub values: Vec<String>,
}

/// Converts a raw schema name into a type identifier.
///
/// Splits on `_`, `:` and `-`, upper-cases the first character of each
/// segment and joins the segments. The rest of each segment keeps its case.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());

    for segment in raw.split(['_', ':', '-']) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}
