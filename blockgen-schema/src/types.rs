//! Catalog type definitions.
//!
//! This module contains the data structures for a parsed block catalog:
//! blocks, their declared properties and their enumerated states.

use indexmap::IndexMap;
use serde::Deserialize;

/// Union of every property's values across the catalog, in first-seen order.
pub type PropertyMap = IndexMap<String, Vec<String>>;

/// Complete block catalog, keyed by raw block name in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Block definitions.
    pub blocks: IndexMap<String, BlockDef>,
}

impl Catalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a block definition, replacing any block with the same raw name.
    pub fn add_block(&mut self, block: BlockDef) {
        self.blocks.insert(block.name.clone(), block);
    }

    /// Looks up a block by raw name.
    #[must_use]
    pub fn get_block(&self, name: &str) -> Option<&BlockDef> {
        self.blocks.get(name)
    }

    /// Returns the number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the catalog has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the total number of states over all blocks.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.blocks.values().map(|b| b.states.len()).sum()
    }

    /// Collects every property used in the catalog together with the union
    /// of the values it is assigned by any block.
    #[must_use]
    pub fn property_map(&self) -> PropertyMap {
        let mut properties = PropertyMap::new();

        for block in self.blocks.values() {
            for (name, values) in &block.properties {
                let known = properties.entry(name.clone()).or_default();
                for value in values {
                    if !known.contains(value) {
                        known.push(value.clone());
                    }
                }
            }
        }

        properties
    }
}

/// A single block of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDef {
    /// Raw schema name (e.g. `minecraft:oak_log`).
    pub name: String,
    /// Declared properties and the values this block uses, in schema order.
    pub properties: IndexMap<String, Vec<String>>,
    /// Legal configurations of the block.
    pub states: Vec<StateEntry>,
}

impl BlockDef {
    /// Creates a block without properties.
    #[must_use]
    pub fn new(name: impl Into<String>, states: Vec<StateEntry>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
            states,
        }
    }

    /// Returns true if the block declares no properties.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.properties.is_empty()
    }
}

/// One legal configuration of a block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StateEntry {
    /// State identifier.
    pub id: u16,
    /// Value assigned to each property; empty for blocks without properties.
    #[serde(default)]
    pub properties: IndexMap<String, String>,
}

impl StateEntry {
    /// Creates a state without property assignments.
    #[must_use]
    pub fn new(id: u16) -> Self {
        Self {
            id,
            properties: IndexMap::new(),
        }
    }
}

/// Value kind of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Integer values, wrapped in a `u8` newtype.
    Numeric,
    /// Named values, emitted as an enum.
    Symbolic,
}

impl PropertyKind {
    /// Returns the kind of a single value: numeric when it starts with an
    /// ASCII digit.
    #[must_use]
    pub fn of(value: &str) -> Self {
        if value.starts_with(|c: char| c.is_ascii_digit()) {
            Self::Numeric
        } else {
            Self::Symbolic
        }
    }

    /// Returns true for numeric properties.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric)
    }
}
