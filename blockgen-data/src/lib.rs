//! # Blockgen Data
//!
//! Block-state types generated at build time from `data/blocks.json`.
//!
//! Every block of the catalog is a type in [`generated`] implementing
//! [`block::BlockState`]; every property is an enum or `u8` newtype
//! implementing [`block::BlockProperty`].
//!
//! ```
//! use blockgen_data::block::BlockState;
//! use blockgen_data::generated::{Facing, MinecraftLever};
//!
//! let lever = MinecraftLever(Facing::North);
//! assert_eq!(lever.get_id(), 13);
//! assert_eq!(lever.get_name(), "minecraft:lever::north");
//! ```

/// Traits implemented by the generated code.
pub mod block {
    pub use blockgen_core::{BlockProperty, BlockState, StateId};
}

/// Generated property and block-state types.
pub mod generated {
    include!(concat!(env!("OUT_DIR"), "/block.rs"));
}

#[cfg(test)]
mod tests {
    use super::block::{BlockProperty, BlockState};
    use super::generated::*;
    use std::collections::HashSet;

    const CATALOG: &str = include_str!("../data/blocks.json");

    fn assert_property<P: BlockProperty>(_: &P) {}

    #[test]
    fn test_every_state_resolves() {
        for (state, id, name) in all_block_states() {
            assert_eq!(state.get_id(), id, "id of {name}");
            assert_eq!(state.get_name(), name);
        }
    }

    #[test]
    fn test_table_covers_catalog() {
        let catalog = blockgen_schema::parse_catalog(CATALOG).expect("Failed to parse");
        let table = all_block_states();
        assert_eq!(table.len(), catalog.state_count());

        let ids: HashSet<u16> = table.iter().map(|(state, _, _)| state.get_id()).collect();
        for block in catalog.blocks.values() {
            for entry in &block.states {
                assert!(ids.contains(&entry.id), "state {} of {}", entry.id, block.name);
            }
        }
        for (state, _, _) in &table {
            assert!(catalog.blocks.keys().any(|b| state.get_name().starts_with(b.as_str())));
        }
    }

    #[test]
    fn test_simple_block() {
        assert_eq!(MinecraftStone.get_id(), 1);
        assert_eq!(MinecraftStone.get_name(), "minecraft:stone");
        assert_eq!(MinecraftAir::default().get_id(), 0);
    }

    #[test]
    fn test_tuple_block() {
        assert_eq!(MinecraftOakLog(Axis::Y).get_id(), 3);
        assert_eq!(MinecraftOakLog(Axis::Z).get_name(), "minecraft:oak_log::z");
        assert_eq!(MinecraftLever(Facing::South).get_id(), 14);
    }

    #[test]
    fn test_numeric_block() {
        assert_eq!(MinecraftWheat(Age(0)).get_id(), 5);
        assert_eq!(MinecraftWheat(Age(7)).get_id(), 12);
        assert_eq!(MinecraftWheat(Age(7)).get_name(), "minecraft:wheat::7");
    }

    #[test]
    fn test_composite_block() {
        assert_eq!(MinecraftFurnace(Facing::East, Lit::False).get_id(), 22);
        assert_eq!(
            MinecraftFurnace(Facing::North, Lit::True).get_name(),
            "minecraft:furnace::north,true"
        );
        let note = MinecraftNoteBlock(Instrument::Basedrum, Note(1), Powered::False);
        assert_eq!(note.get_id(), 30);
        assert_eq!(note.get_name(), "minecraft:note_block::basedrum,1,false");
    }

    #[test]
    fn test_value_semantics() {
        let furnace = MinecraftFurnace(Facing::West, Lit::True);
        let copy = furnace;
        assert_eq!(furnace, copy);
        assert_ne!(furnace, MinecraftFurnace(Facing::West, Lit::False));
        assert_eq!(Age(3), Age(3));
        assert_property(&Facing::North);
        assert_property(&Age(0));
    }

    #[test]
    fn test_shared_property_union() {
        // The lever declares north/south only; the furnace adds west/east.
        let lever = MinecraftLever(Facing::South);
        assert_eq!(MinecraftFurnace(lever.0, Lit::True).get_id(), 17);
        assert_eq!(Facing::East as u8, 3);
    }

    #[test]
    #[should_panic(expected = "invalid block state")]
    fn test_tuple_value_outside_block_panics() {
        let _ = MinecraftLever(Facing::West).get_id();
    }

    #[test]
    #[should_panic(expected = "invalid block state")]
    fn test_numeric_value_outside_catalog_panics() {
        let _ = MinecraftWheat(Age(8)).get_name();
    }

    #[test]
    #[should_panic(expected = "invalid block state")]
    fn test_missing_combination_panics() {
        let _ = MinecraftOakSlab(Type::Double, Waterlogged::True).get_id();
    }

    #[test]
    fn test_block_named_like_std_type() {
        let block = super::generated::Vec;
        assert_eq!(block.get_id(), 36);
        assert_eq!(block.get_name(), "vec");
        assert!(all_block_states().iter().any(|(_, id, _)| *id == 36));
    }

    #[test]
    fn test_incomplete_block_known_states() {
        assert_eq!(MinecraftOakSlab(Type::Double, Waterlogged::False).get_id(), 35);
        assert_eq!(MinecraftOakSlab(Type::Top, Waterlogged::True).get_id(), 31);
    }
}
