//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions shared by the rest of the
//! crate: the crate-wide error type and the tagged numeric value that carries
//! per-element integer/float identity through the sequence transforms. It has
//! zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Color
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Tagged integer/float numeric value.
pub mod number;
