//! Layer 3: Color
//!
//! # Purpose
//!
//! This layer provides the color collaborators built on the numeric core:
//! validated HSV/RGB value types, conversions between the two spaces, and
//! sort-key functions for ordering palettes. Channel validation consumes the
//! math layer's interval primitive.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Color ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Color-space value types and conversions.
pub mod spaces;

/// Sort-key functions for ordering colors.
pub mod sorters;
