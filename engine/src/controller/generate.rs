// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::Rng;

/// Smallest bar value a generated array can contain.
pub const MIN_BAR_VALUE: u32 = 5;

/// Largest bar value a generated array can contain (inclusive).
pub const MAX_BAR_VALUE: u32 = 104;

/// A fresh random array of `size` positive integers, each drawn uniformly from
/// [`MIN_BAR_VALUE`]`..=`[`MAX_BAR_VALUE`].
#[must_use]
pub fn generate_random_array(size: usize) -> Vec<u32> {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| rng.random_range(MIN_BAR_VALUE..=MAX_BAR_VALUE))
        .collect()
}
