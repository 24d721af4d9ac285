// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod outcome;
pub mod palette;

// Re-export public types for convenient access via `collapse::core::TypeName`
pub use error::{CollapseError, Result};
pub use outcome::{CanonicalKey, RawOutcome, canonicalize, display_label, is_bit_string};
pub use palette::Palette;

pub mod constants;
pub use constants::layout_constants; // Re-export
