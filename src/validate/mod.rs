//! Field-level validation primitives.
//!
//! This module provides:
//! - CSS length checks for font-size tokens (`length`)
//! - Content glob compilation (`content`)

pub mod content;
pub mod length;

pub use content::ContentGlobs;
pub use length::{CssLength, LengthUnit};
