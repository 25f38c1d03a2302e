//! # Blockgen Core
//!
//! Traits shared between the generator and the host program.
//!
//! This crate provides:
//! - [`BlockProperty`] - marker for generated property types
//! - [`BlockState`] - id and name resolution for generated block states
//!
//! Generated code imports both traits (by default from `crate::block`, so a
//! host crate usually re-exports them from a `block` module).

pub mod block;

pub use block::{BlockProperty, BlockState, StateId};
