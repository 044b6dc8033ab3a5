//! Sort keys for ordering colors.
//!
//! ## Purpose
//!
//! Key functions for sorting palettes by a single HSV channel. Each function
//! extracts one channel; callers pair it with `sort_by` and a partial-order
//! comparator (`partial_cmp(..).unwrap_or(Equal)`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::color::spaces::Hsv;

/// Sort key: the hue channel.
#[inline]
pub fn hue_key<T: Float>(color: &Hsv<T>) -> T {
    color.hue()
}

/// Sort key: the saturation channel.
#[inline]
pub fn saturation_key<T: Float>(color: &Hsv<T>) -> T {
    color.saturation()
}

/// Sort key: the value (brightness) channel.
#[inline]
pub fn value_key<T: Float>(color: &Hsv<T>) -> T {
    color.value()
}
