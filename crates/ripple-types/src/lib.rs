//! Shared types for the Ripple compiler.
//!
//! This crate defines the value-type and precision-mode enumerations used
//! across the compiler stages: the type pass assigns a [`ValueType`] to
//! every signal-graph node, and the backend derives storage and slot widths
//! from the module's [`Precision`].

mod value;

pub use value::{Precision, ValueType, QUAD_SLOT_WIDTH};
