//! Tagged numeric values with per-element type preservation.
//!
//! ## Purpose
//!
//! Design-tool sequences freely mix integral and floating-point members, and
//! the transforms are contractually obliged to keep each element's own
//! numeric identity: an integer that passes through untouched must come out
//! an integer. This module provides the tagged value that carries that
//! identity.
//!
//! ## Design notes
//!
//! * **Promotion rules**: Division always produces a float (true division).
//!   Multiplication keeps integers integral when both operands are integral.
//!   The flooring remainder keeps integers integral for integral operands.
//! * **Equality**: Comparisons are numeric across variants, so
//!   `Int(27) == Float(27.0)` holds and `Int(382) >= Float(360.0)` orders as
//!   expected.
//! * **Overflow**: Integer products that overflow `i64` fall back to the
//!   floating-point product rather than wrapping.
//!
//! ## Non-goals
//!
//! * No arbitrary-precision arithmetic.
//! * No implicit narrowing back from float to integer.

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};
use core::ops::{Div, Mul};

// ============================================================================
// Number
// ============================================================================

/// A numeric value that is either integral or floating-point.
///
/// Sequence transforms operate on slices of `Number` and decide per element
/// whether the result stays integral or becomes a float.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An integral value.
    Int(i64),

    /// A floating-point value.
    Float(f64),
}

impl Number {
    /// Returns the value as an `f64`, widening integral values.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(value) => *value as f64,
            Self::Float(value) => *value,
        }
    }

    /// Returns `true` for the integral variant.
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Flooring remainder of `self` divided by `modulus`.
    ///
    /// The result lies in `[0, modulus)` and takes the sign of the modulus.
    /// Integral operands produce an integral result; any float operand
    /// produces a float.
    ///
    /// # Panics
    ///
    /// Panics if both operands are integral and `modulus` is zero. Callers
    /// validate the modulus first (see `fmod_sequence`).
    pub fn rem_floor(self, modulus: Number) -> Number {
        match (self, modulus) {
            (Self::Int(value), Self::Int(modulus)) => {
                let remainder = value % modulus;
                if remainder != 0 && ((remainder < 0) != (modulus < 0)) {
                    Self::Int(remainder + modulus)
                } else {
                    Self::Int(remainder)
                }
            }
            _ => {
                let modulus = modulus.as_f64();
                let remainder = self.as_f64() % modulus;
                if remainder != 0.0 && ((remainder < 0.0) != (modulus < 0.0)) {
                    Self::Float(remainder + modulus)
                } else {
                    Self::Float(remainder)
                }
            }
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => {
                (*a as f64) == *b
            }
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_mul(b)
                .map(Self::Int)
                .unwrap_or_else(|| Self::Float(a as f64 * b as f64)),
            _ => Self::Float(self.as_f64() * rhs.as_f64()),
        }
    }
}

impl Div for Number {
    type Output = Self;

    // True division: the result is always floating-point.
    fn div(self, rhs: Self) -> Self {
        Self::Float(self.as_f64() / rhs.as_f64())
    }
}

// ============================================================================
// Conversions & Formatting
// ============================================================================

impl From<i64> for Number {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}
