//! Prelude module for the htime crate.
//!
//! Re-exports the derive_more macros used across the crate.

pub use derive_more::{Deref, Display};
