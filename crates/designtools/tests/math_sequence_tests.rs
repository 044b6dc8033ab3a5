//! Tests for the elementwise sequence transforms.
//!
//! These tests verify the four transform families:
//! - Anchor scaling (proportional rescaling onto a target value)
//! - Geometric ratio expansion
//! - Rounding (nearest-integer and fractional-digit modes)
//! - Periodic reduction
//!
//! ## Test Organization
//!
//! 1. **Scaling** - Anchored, defaulted, and degenerate inputs
//! 2. **Ratio Expansion** - Ladder shape, type promotion, and validation
//! 3. **Rounding** - Tie-breaking and per-element type fidelity
//! 4. **Periodic Reduction** - Wrapping, pass-through, and idempotence

use approx::assert_relative_eq;

use designtools::prelude::*;

fn n<T: Into<Number>>(value: T) -> Number {
    value.into()
}

// ============================================================================
// Scaling Tests
// ============================================================================

/// Test scaling anchored at an explicit index.
///
/// The element at index 2 maps onto 6; everything else scales by the same
/// factor.
#[test]
fn test_scale_sequence_explicit_anchor() {
    let sequence = [n(1), n(2), n(3), n(4), n(5)];
    let scaled = scale_sequence(&sequence, 6.0, Some(2)).unwrap();

    assert_eq!(scaled, vec![n(2), n(4), n(6), n(8), n(10)]);
}

/// Test scaling anchored at the first element.
#[test]
fn test_scale_sequence_first_anchor() {
    let sequence = [n(1.0), n(2.0), n(3.0)];
    let scaled = scale_sequence(&sequence, 10.0, Some(0)).unwrap();

    assert_eq!(scaled, vec![n(10.0), n(20.0), n(30.0)]);
}

/// Test scaling with the default (middle) anchor.
///
/// For five elements the anchor is index 2, so the factor is 0.5 / 3.
#[test]
fn test_scale_sequence_default_anchor() {
    let sequence = [n(1), n(2), n(3), n(4), n(5)];
    let scaled = scale_sequence(&sequence, 0.5, None).unwrap();

    let expected = [1.0 / 6.0, 1.0 / 3.0, 0.5, 2.0 / 3.0, 5.0 / 6.0];
    assert_eq!(scaled.len(), expected.len());
    for (actual, expected) in scaled.iter().zip(expected) {
        assert_relative_eq!(actual.as_f64(), expected, epsilon = 1e-12);
    }
}

/// Test that a zero-valued anchor leaves the sequence unchanged.
///
/// A zero anchor cannot be mapped onto a target value; the input comes back
/// untouched, integral variants intact.
#[test]
fn test_scale_sequence_zero_anchor_passthrough() {
    let sequence = [n(0), n(1), n(2), n(3), n(4)];
    let scaled = scale_sequence(&sequence, 100.0, Some(0)).unwrap();

    assert_eq!(scaled, vec![n(0), n(1), n(2), n(3), n(4)]);
    assert!(scaled.iter().all(Number::is_int));
}

/// Test that scaled output is floating-point.
#[test]
fn test_scale_sequence_output_is_float() {
    let sequence = [n(1), n(2), n(3)];
    let scaled = scale_sequence(&sequence, 4.0, Some(1)).unwrap();

    assert!(scaled.iter().all(|element| !element.is_int()));
}

/// Test that an empty input is rejected.
#[test]
fn test_scale_sequence_empty() {
    assert_eq!(
        scale_sequence(&[], 6.0, None).unwrap_err(),
        DesignToolsError::EmptySequence
    );
}

/// Test that an anchor past the end is rejected with context.
#[test]
fn test_scale_sequence_anchor_out_of_bounds() {
    let sequence = [n(1), n(2), n(3)];

    assert_eq!(
        scale_sequence(&sequence, 6.0, Some(3)).unwrap_err(),
        DesignToolsError::AnchorOutOfBounds { index: 3, len: 3 }
    );
}

/// Test that scaling back with the inverse target restores the input.
#[test]
fn test_scale_sequence_round_trip() {
    let sequence = [n(1.5), n(2.25), n(4.5), n(9.0)];
    let scaled = scale_sequence(&sequence, 100.0, Some(0)).unwrap();
    let restored = scale_sequence(&scaled, 1.5, Some(0)).unwrap();

    for (actual, original) in restored.iter().zip(&sequence) {
        assert_relative_eq!(actual.as_f64(), original.as_f64(), epsilon = 1e-12);
    }
}

// ============================================================================
// Ratio Expansion Tests
// ============================================================================

/// Test the full ladder: divided terms, the base, multiplied terms.
#[test]
fn test_ratio_sequence_ladder() {
    let ladder = ratio_sequence(n(10), n(2), 3).unwrap();

    assert_eq!(
        ladder,
        vec![n(1.25), n(2.5), n(5.0), n(10), n(20), n(40), n(80)]
    );
}

/// Test that a unit ratio produces a constant ladder.
#[test]
fn test_ratio_sequence_unit_ratio() {
    let ladder = ratio_sequence(n(1), n(1), 2).unwrap();

    assert_eq!(ladder, vec![n(1), n(1), n(1), n(1), n(1)]);
}

/// Test that a zero count yields the untouched singleton base.
#[test]
fn test_ratio_sequence_zero_count() {
    let ladder = ratio_sequence(n(5), n(5), 0).unwrap();

    assert_eq!(ladder, vec![n(5)]);
    assert!(ladder[0].is_int());
}

/// Test a single step in each direction.
#[test]
fn test_ratio_sequence_single_step() {
    let ladder = ratio_sequence(n(5), n(5), 1).unwrap();

    assert_eq!(ladder, vec![n(1), n(5), n(25)]);
}

/// Test per-element type promotion.
///
/// Division always yields floats; the base keeps its variant; integral
/// multiplication stays integral.
#[test]
fn test_ratio_sequence_type_promotion() {
    let ladder = ratio_sequence(n(10), n(2), 3).unwrap();

    assert!(ladder[..3].iter().all(|term| !term.is_int()));
    assert!(ladder[3..].iter().all(Number::is_int));
}

/// Test that a float base propagates floats through the whole ladder.
#[test]
fn test_ratio_sequence_float_base() {
    let ladder = ratio_sequence(n(16.0), n(2.0), 1).unwrap();

    assert_eq!(ladder, vec![n(8.0), n(16.0), n(32.0)]);
    assert!(ladder.iter().all(|term| !term.is_int()));
}

/// Test that a zero ratio is rejected, regardless of count.
#[test]
fn test_ratio_sequence_zero_ratio() {
    assert_eq!(
        ratio_sequence(n(10), n(0), 3).unwrap_err(),
        DesignToolsError::ZeroRatio
    );
    assert_eq!(
        ratio_sequence(n(10), n(0.0), 0).unwrap_err(),
        DesignToolsError::ZeroRatio
    );
}

// ============================================================================
// Rounding Tests
// ============================================================================

/// Test nearest-integer rounding with half-to-even ties.
#[test]
fn test_round_sequence_nearest() {
    let rounded = round_sequence(&[n(5.1), n(11.9), n(3.5), n(4.5)], None);

    assert_eq!(rounded, vec![n(5), n(12), n(4), n(4)]);
    assert!(rounded.iter().all(Number::is_int));
}

/// Test tie-breaking across zero.
#[test]
fn test_round_sequence_nearest_signed_ties() {
    let rounded = round_sequence(&[n(-3.5), n(0.0), n(3.5)], None);

    assert_eq!(rounded, vec![n(-4), n(0), n(4)]);
}

/// Test nearest-integer rounding of arbitrary fractions.
#[test]
fn test_round_sequence_nearest_fractions() {
    let rounded = round_sequence(&[n(2.5123), n(6.2815), n(43.1412), n(-0.2311)], None);

    assert_eq!(rounded, vec![n(3), n(6), n(43), n(0)]);
}

/// Test that integral elements pass through the no-digits mode.
#[test]
fn test_round_sequence_nearest_int_passthrough() {
    let rounded = round_sequence(&[n(1)], None);

    assert_eq!(rounded, vec![n(1)]);
    assert!(rounded[0].is_int());
}

/// Test rounding to two fractional digits.
#[test]
fn test_round_sequence_two_digits() {
    let rounded = round_sequence(&[n(2.5123), n(6.2815), n(43.1412), n(-0.2311)], Some(2));
    assert_eq!(rounded, vec![n(2.51), n(6.28), n(43.14), n(-0.23)]);

    let rounded = round_sequence(&[n(5.1123), n(11.9412), n(3.5572), n(4.5)], Some(2));
    assert_eq!(rounded, vec![n(5.11), n(11.94), n(3.56), n(4.5)]);
}

/// Test rounding to zero digits.
///
/// Values round to integers but stay floating-point, matching the
/// digit-mode's type policy.
#[test]
fn test_round_sequence_zero_digits() {
    let rounded = round_sequence(&[n(5.1), n(11.9), n(3.5), n(4.5)], Some(0));

    assert_eq!(rounded, vec![n(5), n(12), n(4), n(4)]);
    assert!(rounded.iter().all(|element| !element.is_int()));
}

/// Test that integral elements ignore digit rounding entirely.
#[test]
fn test_round_sequence_digits_int_passthrough() {
    let rounded = round_sequence(&[n(1), n(2), n(3)], Some(2));

    assert_eq!(rounded, vec![n(1), n(2), n(3)]);
    assert!(rounded.iter().all(Number::is_int));
}

// ============================================================================
// Periodic Reduction Tests
// ============================================================================

/// Test reduction of a mixed sequence by a float modulus.
///
/// Elements below the modulus pass through with their own variant; elements
/// at or above it wrap into `[0, modulus)`.
#[test]
fn test_fmod_sequence_mixed() {
    let sequence = [n(180.5), n(45.32), n(27), n(382), n(522)];
    let reduced = fmod_sequence(&sequence, n(360.0)).unwrap();

    assert_eq!(reduced, vec![n(180.5), n(45.32), n(27), n(22.0), n(162.0)]);

    // Untouched elements keep their variant; reduced ones follow promotion.
    assert!(reduced[2].is_int());
    assert!(!reduced[3].is_int());
}

/// Test reduction of an integral sequence by an integral modulus.
#[test]
fn test_fmod_sequence_integral() {
    let sequence = [n(180), n(45), n(27), n(382), n(522)];
    let reduced = fmod_sequence(&sequence, n(360)).unwrap();

    assert_eq!(reduced, vec![n(180), n(45), n(27), n(22), n(162)]);
    assert!(reduced.iter().all(Number::is_int));
}

/// Test that in-range sequences come back unchanged and type-preserved.
#[test]
fn test_fmod_sequence_unchanged() {
    let floats = [n(180.5), n(45.32), n(27)];
    assert_eq!(
        fmod_sequence(&floats, n(360.0)).unwrap(),
        vec![n(180.5), n(45.32), n(27)]
    );

    let ints = [n(180), n(45), n(27)];
    let reduced = fmod_sequence(&ints, n(360)).unwrap();
    assert_eq!(reduced, vec![n(180), n(45), n(27)]);
    assert!(reduced.iter().all(Number::is_int));
}

/// Test that negative elements pass through unreduced.
#[test]
fn test_fmod_sequence_negative_passthrough() {
    let reduced = fmod_sequence(&[n(-10), n(400)], n(360)).unwrap();

    assert_eq!(reduced, vec![n(-10), n(40)]);
}

/// Test idempotence on an already-reduced sequence.
#[test]
fn test_fmod_sequence_idempotent() {
    let sequence = [n(180.5), n(45.32), n(27), n(382), n(522)];
    let reduced = fmod_sequence(&sequence, n(360.0)).unwrap();
    let again = fmod_sequence(&reduced, n(360.0)).unwrap();

    assert_eq!(again, reduced);
}

/// Test that a zero modulus is rejected.
#[test]
fn test_fmod_sequence_zero_modulus() {
    assert_eq!(
        fmod_sequence(&[n(1)], n(0)).unwrap_err(),
        DesignToolsError::ZeroModulus
    );
    assert_eq!(
        fmod_sequence(&[n(1)], n(0.0)).unwrap_err(),
        DesignToolsError::ZeroModulus
    );
}
