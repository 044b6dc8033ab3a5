//! # designtools — numeric utilities for design tooling
//!
//! A small toolkit of numeric primitives used by palette-oriented design
//! tools: interval membership tests with configurable bound inclusivity,
//! elementwise sequence transforms that preserve per-element numeric type,
//! and thin HSV/RGB color collaborators built on top of them.
//!
//! ## Quick Start
//!
//! ```rust
//! use designtools::prelude::*;
//!
//! // Wrap hue angles that spun past a full circle back onto the wheel.
//! let hues = [Number::from(410.0), Number::from(120.0), Number::from(30)];
//! let wheel = fmod_sequence(&hues, Number::from(360))?;
//! assert_eq!(wheel[0], Number::from(50.0));
//! assert_eq!(wheel[2], Number::from(30));
//!
//! // Grow a geometric ladder two steps down and two steps up from 16.
//! let ladder = ratio_sequence(Number::from(16), Number::from(2), 2)?;
//! assert_eq!(ladder.len(), 5);
//! assert_eq!(ladder[2], Number::from(16));
//!
//! // Membership on the half-open unit interval.
//! let unit = Range::new(0.0, 1.0)?;
//! assert!(unit.contains(0.25));
//! assert!(!unit.contains(1.0));
//! # Result::<(), DesignToolsError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<_, DesignToolsError>`; every failure is
//! a synchronous argument or construction failure surfaced before any work is
//! done. The `?` operator is idiomatic throughout.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! designtools = { version = "0.4", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - shared error type and the tagged numeric value.
mod primitives;

// Layer 2: Math - pure numeric functions (ranges, rounding, transforms).
mod math;

// Layer 3: Color - collaborators consuming the numeric core.
mod color;

// Standard designtools prelude.
pub mod prelude {
    pub use crate::color::sorters::{hue_key, saturation_key, value_key};
    pub use crate::color::spaces::{hsv_color, rgb_color, Hsv, Rgb};
    pub use crate::math::range::Range;
    pub use crate::math::sequence::{
        fmod_sequence, ratio_sequence, round_sequence, scale_sequence,
    };
    pub use crate::primitives::errors::DesignToolsError;
    pub use crate::primitives::number::Number;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod color {
        pub use crate::color::*;
    }
}
