// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arrangement generator facade.
//!
//! Each public operation takes a source slice and an arrangement length,
//! validates them, and returns a lazy producer of `Vec<T>`. Nothing is
//! computed until the producer is pulled, and dropping it releases all
//! state. Invalid arguments are reported by the call itself, never
//! mid-iteration.
//!
//! Ordered families come in two flavours:
//! - the plain operation uses [`DirectArrangements`], which extends shorter
//!   arrangements and keeps one frame per output position;
//! - the `_stack_safe` operation uses [`CounterArrangements`], which filters
//!   the digit vectors of a [`MixedRadixCounter`](crate::MixedRadixCounter).
//!
//! Both flavours produce the same set of arrangements, in different orders.
//! Unordered families only have the counter-driven form.
//!
//! # Examples
//!
//! ```
//! use arrangements::{get_ordered_samples_without_replacement, generate_ordered_different_permutations_of_length};
//!
//! let samples: Vec<Vec<i32>> = get_ordered_samples_without_replacement(&[1, 2], 2).unwrap().collect();
//! assert_eq!(samples, vec![vec![1, 2], vec![2, 1]]);
//!
//! let combinations: Vec<Vec<i32>> = generate_ordered_different_permutations_of_length(&[1, 2, 3], 2)
//!     .unwrap()
//!     .collect();
//! assert_eq!(combinations, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
//! ```

pub mod direct;
pub mod stack_safe;

pub use direct::DirectArrangements;
pub use stack_safe::CounterArrangements;

use crate::error::{ArrangementError, Result};
use crate::family::{Family, Strategy};
use std::iter::FusedIterator;

/// Checks shared by every family and both strategies.
pub(crate) fn validate<T>(source: &[T], length: usize, family: Family) -> Result<()> {
    if source.is_empty() {
        return Err(ArrangementError::InvalidArgument {
            parameter: "source",
            reason: "should not be empty",
        });
    }
    if !family.with_replacement() && length > source.len() {
        return Err(ArrangementError::OutOfRange {
            parameter: "length",
            length,
            size: source.len(),
        });
    }
    Ok(())
}

/// A producer chosen at run time by [`arrangements`].
#[derive(Debug, Clone)]
pub enum Arrangements<'a, T> {
    Direct(DirectArrangements<'a, T>),
    StackSafe(CounterArrangements<'a, T>),
}

impl<T> Arrangements<'_, T> {
    pub fn strategy(&self) -> Strategy {
        match self {
            Arrangements::Direct(_) => Strategy::Direct,
            Arrangements::StackSafe(_) => Strategy::StackSafe,
        }
    }
}

impl<T: Clone> Iterator for Arrangements<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Arrangements::Direct(producer) => producer.next(),
            Arrangements::StackSafe(producer) => producer.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Arrangements::Direct(producer) => producer.size_hint(),
            Arrangements::StackSafe(producer) => producer.size_hint(),
        }
    }
}

impl<T: Clone> FusedIterator for Arrangements<'_, T> {}

/// Generate the arrangements of `family` with the given `strategy`.
///
/// # Errors
///
/// - [`ArrangementError::UnsupportedStrategy`] if `family` has no rule for `strategy`.
/// - [`ArrangementError::InvalidArgument`] if `source` is empty.
/// - [`ArrangementError::OutOfRange`] if `family` is without replacement and
///   `length > source.len()`.
///
/// # Examples
///
/// ```
/// use arrangements::{arrangements, Family, Strategy};
///
/// let direct: Vec<_> = arrangements(&['x', 'y'], 2, Family::AllSequences, Strategy::Direct)
///     .unwrap()
///     .collect();
/// assert_eq!(direct.len(), 4);
///
/// assert!(arrangements(&['x', 'y'], 2, Family::SortedSequences, Strategy::Direct).is_err());
/// ```
pub fn arrangements<T: Clone>(
    source: &[T],
    length: usize,
    family: Family,
    strategy: Strategy,
) -> Result<Arrangements<'_, T>> {
    match strategy {
        Strategy::Direct => DirectArrangements::new(source, length, family).map(Arrangements::Direct),
        Strategy::StackSafe => {
            CounterArrangements::new(source, length, family).map(Arrangements::StackSafe)
        }
    }
}

/// All sequences of `length` over `source`, order significant, elements may repeat.
///
/// For `[1, 2]` and length 2: `[1,1]`, `[1,2]`, `[2,1]`, `[2,2]`.
pub fn generate_all_sequences_of_length<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<DirectArrangements<'_, T>> {
    DirectArrangements::new(source, length, Family::AllSequences)
}

/// Same arrangements as [`generate_all_sequences_of_length`], without
/// recursion depth proportional to `length`.
pub fn generate_all_sequences_of_length_stack_safe<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<CounterArrangements<'_, T>> {
    CounterArrangements::new(source, length, Family::AllSequences)
}

/// Sequences whose source positions are non-decreasing.
///
/// Each multiset of positions appears exactly once. For `[1, 2]` and
/// length 2: `[1,1]`, `[1,2]`, `[2,2]`.
pub fn generate_sorted_different_sequences_of_length<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<CounterArrangements<'_, T>> {
    CounterArrangements::new(source, length, Family::SortedSequences)
}

/// All permutations of `length` distinct source positions.
///
/// For `[1, 2]` and length 2: `[1,2]`, `[2,1]`.
///
/// # Errors
///
/// [`ArrangementError::OutOfRange`] if `length > source.len()`.
pub fn generate_all_permutations_of_length<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<DirectArrangements<'_, T>> {
    DirectArrangements::new(source, length, Family::AllPermutations)
}

/// Same arrangements as [`generate_all_permutations_of_length`], counter-driven.
pub fn generate_all_permutations_of_length_stack_safe<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<CounterArrangements<'_, T>> {
    CounterArrangements::new(source, length, Family::AllPermutations)
}

/// Arrangements whose source positions are distinct and strictly increasing.
///
/// These are combinations: elements always appear in source order. For
/// `[1, 2, 3]` and length 2: `[1,2]`, `[1,3]`, `[2,3]`.
pub fn generate_ordered_different_permutations_of_length<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<CounterArrangements<'_, T>> {
    CounterArrangements::new(source, length, Family::OrderedDifferentPermutations)
}

/// Samples with replacement where order matters.
pub fn get_ordered_samples_with_replacement<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<DirectArrangements<'_, T>> {
    DirectArrangements::new(source, length, Family::OrderedSamplesWithReplacement)
}

pub fn get_ordered_samples_with_replacement_stack_safe<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<CounterArrangements<'_, T>> {
    CounterArrangements::new(source, length, Family::OrderedSamplesWithReplacement)
}

/// Samples with replacement where order does not matter.
///
/// For `[1, 2]` and length 2: `[1,1]`, `[1,2]`, `[2,2]`.
pub fn get_unordered_samples_with_replacement<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<CounterArrangements<'_, T>> {
    CounterArrangements::new(source, length, Family::UnorderedSamplesWithReplacement)
}

/// Samples without replacement where order matters.
pub fn get_ordered_samples_without_replacement<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<DirectArrangements<'_, T>> {
    DirectArrangements::new(source, length, Family::OrderedSamplesWithoutReplacement)
}

pub fn get_ordered_samples_without_replacement_stack_safe<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<CounterArrangements<'_, T>> {
    CounterArrangements::new(source, length, Family::OrderedSamplesWithoutReplacement)
}

/// Samples without replacement where order does not matter.
///
/// For `[1, 2]` and length 2: `[1,2]`.
pub fn get_unordered_samples_without_replacement<T: Clone>(
    source: &[T],
    length: usize,
) -> Result<CounterArrangements<'_, T>> {
    CounterArrangements::new(source, length, Family::UnorderedSamplesWithoutReplacement)
}
