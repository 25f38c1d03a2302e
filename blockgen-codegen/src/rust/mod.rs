//! Rust code generation modules.

pub mod blocks;
pub mod properties;
pub mod table;

pub use blocks::BlockStateGenerator;
pub use properties::PropertyGenerator;
pub use table::StateTableGenerator;

/// Formats `s` as a Rust string literal.
pub(crate) fn string_literal(s: &str) -> String {
    format!("{s:?}")
}
