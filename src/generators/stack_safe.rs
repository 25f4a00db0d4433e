// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counter-driven generation.
//!
//! Runs a [`MixedRadixCounter`] with one digit per output position and one
//! value per source slot, keeps the digit vectors the family's
//! [`DigitFilter`] accepts, and maps each kept digit to `source[digit]`.
//! The only state besides the counter is a couple of tallies, so the depth
//! of the arrangement never shows up on the call stack.
//!
//! A single-slot source has no valid radix. Its only digit vector is all
//! zeros, which is produced once without a counter.

use super::validate;
use crate::counter::{AllNumbers, MixedRadixCounter};
use crate::error::Result;
use crate::family::{DigitFilter, Family, Strategy};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Where digit vectors come from.
#[derive(Debug, Clone)]
enum Digits {
    Counter(AllNumbers),
    /// Base 1: the all-zero vector, until taken.
    Unary(Option<Vec<usize>>),
}

impl Digits {
    fn next(&mut self) -> Option<Vec<usize>> {
        match self {
            Digits::Counter(numbers) => numbers.next(),
            Digits::Unary(zeros) => zeros.take(),
        }
    }

    fn upper_bound(&self) -> Option<usize> {
        match self {
            Digits::Counter(numbers) => numbers.size_hint().1,
            Digits::Unary(zeros) => Some(usize::from(zeros.is_some())),
        }
    }
}

/// Lazy producer of one family's arrangements, in digit-vector order.
#[derive(Debug, Clone)]
pub struct CounterArrangements<'a, T> {
    source: &'a [T],
    family: Family,
    digits: Digits,
    filter: DigitFilter,
    yielded: usize,
    rejected: usize,
    finished: bool,
}

impl<'a, T: Clone> CounterArrangements<'a, T> {
    pub(crate) fn new(source: &'a [T], length: usize, family: Family) -> Result<Self> {
        validate(source, length, family)?;
        debug!(
            %family,
            strategy = %Strategy::StackSafe,
            source_len = source.len(),
            length,
            expected = ?family.count(source.len(), length),
            "generating arrangements"
        );

        let digits = if source.len() == 1 {
            Digits::Unary(Some(vec![0; length]))
        } else {
            Digits::Counter(MixedRadixCounter::new(source.len(), length)?.all_numbers())
        };
        Ok(Self {
            source,
            family,
            digits,
            filter: family.filter(source.len()),
            yielded: 0,
            rejected: 0,
            finished: false,
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    fn select(&self, digits: &[usize]) -> Vec<T> {
        digits.iter().map(|&digit| self.source[digit].clone()).collect()
    }
}

impl<T: Clone> Iterator for CounterArrangements<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(digits) = self.digits.next() {
            if self.filter.accepts(&digits) {
                self.yielded += 1;
                return Some(self.select(&digits));
            }
            self.rejected += 1;
        }
        if !self.finished {
            self.finished = true;
            trace!(
                family = %self.family,
                yielded = self.yielded,
                rejected = self.rejected,
                "counter exhausted"
            );
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.digits.upper_bound())
    }
}

impl<T: Clone> FusedIterator for CounterArrangements<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(source: &[i32], length: usize, family: Family) -> Vec<Vec<i32>> {
        CounterArrangements::new(source, length, family)
            .unwrap()
            .collect()
    }

    #[test]
    fn test_all_sequences_in_counter_order() {
        assert_eq!(
            collect(&[1, 2], 2, Family::AllSequences),
            vec![vec![1, 1], vec![2, 1], vec![1, 2], vec![2, 2]]
        );
    }

    #[test]
    fn test_single_slot_source() {
        assert_eq!(collect(&[7], 3, Family::AllSequences), vec![vec![7, 7, 7]]);
        assert_eq!(collect(&[7], 1, Family::AllPermutations), vec![vec![7]]);
        assert_eq!(
            collect(&[7], 2, Family::UnorderedSamplesWithReplacement),
            vec![vec![7, 7]]
        );
    }

    #[test]
    fn test_single_slot_source_long_length() {
        let mut producer = CounterArrangements::new(&[7], 64, Family::AllSequences).unwrap();
        assert_eq!(producer.size_hint(), (0, Some(1)));
        assert_eq!(producer.next(), Some(vec![7; 64]));
        assert_eq!(producer.next(), None);
        assert_eq!(producer.size_hint(), (0, Some(0)));
        assert_eq!(producer.rejected, 0);
    }

    #[test]
    fn test_single_slot_source_zero_length() {
        assert_eq!(collect(&[7], 0, Family::UnorderedSamplesWithoutReplacement), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_rejected_vectors_are_skipped() {
        let mut producer = CounterArrangements::new(&['a', 'b', 'c'], 2, Family::OrderedDifferentPermutations).unwrap();
        assert_eq!(producer.family(), Family::OrderedDifferentPermutations);
        assert_eq!(producer.next(), Some(vec!['a', 'b']));
        assert_eq!(producer.next(), Some(vec!['a', 'c']));
        assert_eq!(producer.next(), Some(vec!['b', 'c']));
        assert_eq!(producer.next(), None);
        assert_eq!(producer.next(), None);
        assert_eq!(producer.yielded, 3);
        assert_eq!(producer.rejected, 6);
    }

    #[test]
    fn test_size_hint_upper_bound() {
        let producer = CounterArrangements::new(&[1, 2, 3], 2, Family::AllPermutations).unwrap();
        let (lower, upper) = producer.size_hint();
        assert_eq!(lower, 0);
        assert_eq!(upper, Some(9));
        assert_eq!(producer.count(), 6);
    }
}
