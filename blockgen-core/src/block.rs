//! Block traits.
//!
//! Every generated property type implements [`BlockProperty`] and every
//! generated block-state type implements [`BlockState`].

/// Numeric identifier of a single block state.
pub type StateId = u16;

/// Marker for a generated block property.
///
/// Property types are plain values: they compare by value and can be copied
/// freely, since block-state lookups match on them.
pub trait BlockProperty: Clone + PartialEq + Eq + std::fmt::Debug {}

/// A concrete, fully specified block state.
///
/// The generated `get_id` and `get_name` are total over every value that
/// appears in the catalog. A value with no catalog entry is a data-integrity
/// bug and panics through `unreachable!`.
pub trait BlockState {
    /// Returns the numeric identifier of this state.
    fn get_id(&self) -> StateId;

    /// Returns the canonical name of this state, `"<block>"` for blocks
    /// without properties and `"<block>::<values>"` otherwise.
    fn get_name(&self) -> &'static str;
}
