// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering, fmt::Debug};

/// Anything that can be placed in a sequence that the runner sorts or searches. The
/// runner only ever looks at [`Element::sort_key()`], so an element can carry a payload
/// (an id, a label, a color) along with its key. This is what makes stability
/// observable: two elements with equal keys but different payloads.
///
/// Keys must be finite, and must survive the trip to `f64` without losing precision.
/// The runner validates both before the first step and returns
/// [`crate::RunError::InvalidInput`] otherwise.
pub trait Element: Clone + Debug + Send {
    fn sort_key(&self) -> f64;

    /// `false` when [`Element::sort_key()`] rounds, so that two different elements could
    /// end up with the same key.
    fn is_key_exact(&self) -> bool { true }
}

macro_rules! impl_element_for_number {
    ($($it:ty),*) => {
        $(
            impl Element for $it {
                #[allow(trivial_numeric_casts, clippy::cast_lossless, clippy::cast_precision_loss)]
                fn sort_key(&self) -> f64 { *self as f64 }
            }
        )*
    };
}

/// Integers wider than the 53 bit `f64` mantissa. Their keys are only exact up to
/// [`MAX_EXACT_INTEGER`] in magnitude.
macro_rules! impl_element_for_wide_integer {
    ($($it:ty),*) => {
        $(
            impl Element for $it {
                #[allow(clippy::cast_precision_loss)]
                fn sort_key(&self) -> f64 { *self as f64 }

                #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
                fn is_key_exact(&self) -> bool {
                    (*self as i128).unsigned_abs() <= u128::from(MAX_EXACT_INTEGER)
                }
            }
        )*
    };
}

impl_element_for_number!(f64, f32, i32, u32);
impl_element_for_wide_integer!(i64, u64, usize);

/// A key with a payload riding along, eg: `(3, 'a')`. Only the key is compared.
impl<K, P> Element for (K, P)
where
    K: Element,
    P: Clone + Debug + Send,
{
    fn sort_key(&self) -> f64 { self.0.sort_key() }

    fn is_key_exact(&self) -> bool { self.0.is_key_exact() }
}

/// Compare two keys. Keys are validated to be finite before a run starts, so the
/// fallback to [`Ordering::Equal`] is never taken in practice.
#[must_use]
pub fn cmp_keys(left: f64, right: f64) -> Ordering {
    left.partial_cmp(&right).unwrap_or(Ordering::Equal)
}

/// Largest integer magnitude that survives a round trip through `f64` (2^53).
pub const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// [`MAX_EXACT_INTEGER`] as a key.
pub const MAX_EXACT_INTEGER_KEY: f64 = 9_007_199_254_740_992.0;

/// Returns `Some(key)` if `key` is a whole number that fits in the exactly representable
/// integer range of `f64`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn integer_key(key: f64) -> Option<i64> {
    if key.is_finite() && key.fract() == 0.0 && key.abs() <= MAX_EXACT_INTEGER_KEY {
        Some(key as i64)
    } else {
        None
    }
}
