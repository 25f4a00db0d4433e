// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mixed-radix counter.
//!
//! Enumerates every digit vector of a fixed length over a fixed base, in
//! increasing numeric order. Digit 0 is the least significant: the counter
//! increments it first and carries into digit 1 on overflow, and so on.
//! The enumeration stops instead of wrapping back to all zeros, so it yields
//! exactly `base^length` vectors.
//!
//! # Examples
//!
//! ```
//! use arrangements::MixedRadixCounter;
//!
//! let numbers: Vec<Vec<usize>> = MixedRadixCounter::new(2, 2).unwrap().all_numbers().collect();
//! assert_eq!(numbers, vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]);
//! ```

use crate::error::{ArrangementError, Result};
use std::iter::FusedIterator;

/// A counter over digit vectors of `length` digits in base `base`.
///
/// The counter is consumed by [`MixedRadixCounter::all_numbers`], so one
/// instance enumerates its space exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedRadixCounter {
    base: usize,
    length: usize,
}

impl MixedRadixCounter {
    /// Create a counter.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangementError::InvalidArgument`] naming `base` if `base < 2`.
    /// A `length` of zero is valid and yields the empty vector once.
    pub fn new(base: usize, length: usize) -> Result<Self> {
        if base < 2 {
            return Err(ArrangementError::InvalidArgument {
                parameter: "base",
                reason: "must be at least 2",
            });
        }
        Ok(Self { base, length })
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Lazily enumerate all digit vectors, starting from all zeros.
    pub fn all_numbers(self) -> AllNumbers {
        AllNumbers {
            base: self.base,
            digits: vec![0; self.length],
            remaining: u32::try_from(self.length)
                .ok()
                .and_then(|exponent| self.base.checked_pow(exponent)),
            exhausted: false,
        }
    }
}

/// Iterator over the digit vectors of a [`MixedRadixCounter`].
///
/// Each item is a fresh copy of the internal digit vector.
#[derive(Debug, Clone)]
pub struct AllNumbers {
    base: usize,
    digits: Vec<usize>,
    /// Vectors still to yield, when `base^length` fits in a `usize`.
    remaining: Option<usize>,
    exhausted: bool,
}

impl AllNumbers {
    /// Add one to the little-endian digit vector.
    ///
    /// Returns false when the carry runs off the most significant digit,
    /// i.e. the vector has wrapped back to all zeros.
    fn increment(&mut self) -> bool {
        for digit in self.digits.iter_mut() {
            *digit += 1;
            if *digit < self.base {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for AllNumbers {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.digits.clone();
        if !self.increment() {
            self.exhausted = true;
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for AllNumbers {}
