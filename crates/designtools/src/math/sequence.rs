//! Elementwise sequence transforms.
//!
//! ## Purpose
//!
//! Batch numeric transformations used when deriving palettes and scales:
//! proportional rescaling around an anchor element, geometric ratio
//! expansion, rounding, and periodic reduction (e.g. wrapping hue angles
//! back onto the color wheel).
//!
//! ## Design notes
//!
//! * **Elementwise**: Every transform maps an input sequence to a freshly
//!   allocated output of identical length and order; inputs are never
//!   mutated.
//! * **Type fidelity**: Each output element keeps its own integer/float
//!   variant according to the transform's promotion rules (see [`Number`]).
//! * **Fail fast**: Argument validation happens before any element is
//!   touched; there is no partial output.
//!
//! ## Key concepts
//!
//! * **Anchor scaling**: `scale_sequence` maps one chosen element onto a
//!   target value and scales the rest proportionally.
//! * **Ratio expansion**: `ratio_sequence` grows a geometric ladder downward
//!   and upward from a base value.
//! * **Periodic reduction**: `fmod_sequence` wraps values at or above the
//!   modulus back into `[0, modulus)`.
//!
//! ## Invariants
//!
//! * Output length equals input length (`ratio_sequence`: `2 * count + 1`).
//! * Rounding ties break to the even neighbor everywhere.
//!
//! ## Non-goals
//!
//! * No filtering, reduction, or statistical aggregation.
//! * No arbitrary-precision arithmetic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::rounding::{round_number, round_number_digits};
use crate::primitives::errors::DesignToolsError;
use crate::primitives::number::Number;

// ============================================================================
// Scaling
// ============================================================================

/// Scales a sequence so the element at `anchor` maps onto `value`.
///
/// The scale factor is `value / sequence[anchor]` and every element is
/// multiplied by it, so relative proportions are preserved while the anchor
/// element itself becomes `value`. When `anchor` is `None` the middle element
/// (`len / 2`) anchors the scale. Scaled output is always floating-point.
///
/// A zero-valued anchor element cannot be mapped onto a target; the sequence
/// is returned unchanged, original variants intact.
///
/// # Errors
///
/// * [`DesignToolsError::EmptySequence`] for an empty input.
/// * [`DesignToolsError::AnchorOutOfBounds`] when `anchor` is past the end.
pub fn scale_sequence(
    sequence: &[Number],
    value: f64,
    anchor: Option<usize>,
) -> Result<Vec<Number>, DesignToolsError> {
    if sequence.is_empty() {
        return Err(DesignToolsError::EmptySequence);
    }

    let index = anchor.unwrap_or(sequence.len() / 2);
    if index >= sequence.len() {
        return Err(DesignToolsError::AnchorOutOfBounds {
            index,
            len: sequence.len(),
        });
    }

    let pivot = sequence[index].as_f64();
    if pivot == 0.0 {
        return Ok(sequence.to_vec());
    }

    let factor = value / pivot;
    Ok(sequence
        .iter()
        .map(|element| Number::Float(element.as_f64() * factor))
        .collect())
}

// ============================================================================
// Ratio Expansion
// ============================================================================

/// Builds a geometric ladder centered on `base`.
///
/// The output holds `count` divided terms in ascending order, then `base`
/// itself (variant untouched), then `count` multiplied terms — `2 * count + 1`
/// values in total. Division always yields floats; multiplication keeps
/// integral terms integral.
///
/// A ratio of one is a legal degenerate case producing a constant ladder.
///
/// # Errors
///
/// * [`DesignToolsError::ZeroRatio`] when `ratio` equals zero.
pub fn ratio_sequence(
    base: Number,
    ratio: Number,
    count: usize,
) -> Result<Vec<Number>, DesignToolsError> {
    if ratio.as_f64() == 0.0 {
        return Err(DesignToolsError::ZeroRatio);
    }

    let mut terms = Vec::with_capacity(2 * count + 1);

    // Divided terms are generated largest-first and reversed into place.
    let mut descending = Vec::with_capacity(count);
    let mut current = base;
    for _ in 0..count {
        current = current / ratio;
        descending.push(current);
    }
    terms.extend(descending.into_iter().rev());

    terms.push(base);

    let mut current = base;
    for _ in 0..count {
        current = current * ratio;
        terms.push(current);
    }

    Ok(terms)
}

// ============================================================================
// Rounding
// ============================================================================

/// Rounds every element of a sequence.
///
/// Without `digits` each element is rounded to the nearest integer (ties to
/// even) and the output is integral. With `digits` (zero included) floats are
/// rounded to that many fractional digits and stay floats, while integral
/// elements pass through unchanged in value and type.
pub fn round_sequence(sequence: &[Number], digits: Option<u32>) -> Vec<Number> {
    match digits {
        None => sequence.iter().map(|n| round_number(*n)).collect(),
        Some(digits) => sequence
            .iter()
            .map(|n| round_number_digits(*n, digits))
            .collect(),
    }
}

// ============================================================================
// Periodic Reduction
// ============================================================================

/// Wraps sequence elements at or above `modulus` back into `[0, modulus)`.
///
/// Elements below the modulus (negatives included) pass through unchanged
/// with their original variant; elements at or above it are replaced by the
/// flooring remainder. Integral elements reduced by an integral modulus stay
/// integral.
///
/// Applying the transform twice with the same modulus is a no-op on the
/// second pass.
///
/// # Errors
///
/// * [`DesignToolsError::ZeroModulus`] when `modulus` equals zero.
pub fn fmod_sequence(
    sequence: &[Number],
    modulus: Number,
) -> Result<Vec<Number>, DesignToolsError> {
    if modulus.as_f64() == 0.0 {
        return Err(DesignToolsError::ZeroModulus);
    }

    Ok(sequence
        .iter()
        .map(|element| {
            if *element >= modulus {
                element.rem_floor(modulus)
            } else {
                *element
            }
        })
        .collect())
}
