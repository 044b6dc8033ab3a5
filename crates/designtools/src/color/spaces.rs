//! HSV and RGB color values.
//!
//! ## Purpose
//!
//! Minimal color-space support for palette tooling: validated HSV/RGB value
//! types and conversions between them. All channels live on the closed unit
//! interval; hue is expressed in turns (1.0 is a full trip around the wheel)
//! rather than degrees.
//!
//! ## Design notes
//!
//! * **Validation**: Constructors check every channel against the closed
//!   unit range and report the offending channel by name.
//! * **Conversion**: Sector-based HSV<->RGB; exact for the six primary and
//!   secondary anchor colors.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Non-goals
//!
//! * No perceptual spaces (Lab, LCh), no gamma handling, no alpha channel.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::range::Range;
use crate::primitives::errors::DesignToolsError;

// ============================================================================
// Value Types
// ============================================================================

/// A color in HSV space, every channel on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv<T> {
    hue: T,
    saturation: T,
    value: T,
}

/// A color in RGB space, every channel on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb<T> {
    red: T,
    green: T,
    blue: T,
}

// ============================================================================
// Constructors
// ============================================================================

/// Builds an HSV color, validating every channel against `[0, 1]`.
///
/// # Errors
///
/// [`DesignToolsError::InvalidChannel`] naming the first channel that falls
/// outside the closed unit interval.
pub fn hsv_color<T: Float>(
    hue: T,
    saturation: T,
    value: T,
) -> Result<Hsv<T>, DesignToolsError> {
    let unit = Range::with_bounds(T::zero(), T::one(), true, true)?;

    for (channel, sample) in [("hue", hue), ("saturation", saturation), ("value", value)] {
        if !unit.contains(sample) {
            return Err(DesignToolsError::InvalidChannel {
                channel,
                value: sample.to_f64().unwrap_or(f64::NAN),
            });
        }
    }

    Ok(Hsv {
        hue,
        saturation,
        value,
    })
}

/// Builds an RGB color, validating every channel against `[0, 1]`.
///
/// # Errors
///
/// [`DesignToolsError::InvalidChannel`] naming the first channel that falls
/// outside the closed unit interval.
pub fn rgb_color<T: Float>(red: T, green: T, blue: T) -> Result<Rgb<T>, DesignToolsError> {
    let unit = Range::with_bounds(T::zero(), T::one(), true, true)?;

    for (channel, sample) in [("red", red), ("green", green), ("blue", blue)] {
        if !unit.contains(sample) {
            return Err(DesignToolsError::InvalidChannel {
                channel,
                value: sample.to_f64().unwrap_or(f64::NAN),
            });
        }
    }

    Ok(Rgb { red, green, blue })
}

// ============================================================================
// HSV
// ============================================================================

impl<T: Float> Hsv<T> {
    /// The hue channel, in turns.
    #[inline]
    pub fn hue(&self) -> T {
        self.hue
    }

    /// The saturation channel.
    #[inline]
    pub fn saturation(&self) -> T {
        self.saturation
    }

    /// The value (brightness) channel.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Converts to RGB using the standard sector decomposition.
    pub fn to_rgb(&self) -> Rgb<T> {
        // Zero saturation collapses to the gray axis.
        if self.saturation == T::zero() {
            return Rgb {
                red: self.value,
                green: self.value,
                blue: self.value,
            };
        }

        let six = T::from(6.0).unwrap_or(T::one());
        let scaled = self.hue * six;
        let sector = scaled.floor();
        let fraction = scaled - sector;

        let p = self.value * (T::one() - self.saturation);
        let q = self.value * (T::one() - self.saturation * fraction);
        let t = self.value * (T::one() - self.saturation * (T::one() - fraction));

        // A hue of exactly 1.0 lands in sector 6, which wraps back to red.
        let (red, green, blue) = match sector.to_i32().unwrap_or(0).rem_euclid(6) {
            0 => (self.value, t, p),
            1 => (q, self.value, p),
            2 => (p, self.value, t),
            3 => (p, q, self.value),
            4 => (t, p, self.value),
            _ => (self.value, p, q),
        };

        Rgb { red, green, blue }
    }
}

// ============================================================================
// RGB
// ============================================================================

impl<T: Float> Rgb<T> {
    /// The red channel.
    #[inline]
    pub fn red(&self) -> T {
        self.red
    }

    /// The green channel.
    #[inline]
    pub fn green(&self) -> T {
        self.green
    }

    /// The blue channel.
    #[inline]
    pub fn blue(&self) -> T {
        self.blue
    }

    /// Converts to HSV via the max/min/delta decomposition.
    pub fn to_hsv(&self) -> Hsv<T> {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        let delta = max - min;

        let value = max;
        let saturation = if max == T::zero() {
            T::zero()
        } else {
            delta / max
        };

        let hue = if delta == T::zero() {
            T::zero()
        } else {
            let two = T::one() + T::one();
            let four = two + two;
            let six = two + four;

            let segment = if max == self.red {
                ((self.green - self.blue) / delta) % six
            } else if max == self.green {
                (self.blue - self.red) / delta + two
            } else {
                (self.red - self.green) / delta + four
            };

            let hue = segment / six;
            if hue < T::zero() {
                hue + T::one()
            } else {
                hue
            }
        };

        Hsv {
            hue,
            saturation,
            value,
        }
    }
}
