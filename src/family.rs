// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arrangement families and the digit filters that derive them.
//!
//! A family is one combination of the two semantic axes, ordering and
//! replacement, under either the "sequence/permutation" framing or the
//! "sample" framing. The framings are naming variants over the same four
//! filters:
//!
//! | ordered | replacement | digit filter |
//! |---------|-------------|--------------|
//! | yes     | yes         | none |
//! | yes     | no          | all distinct |
//! | no      | yes         | non-decreasing |
//! | no      | no          | distinct and increasing |
//!
//! Filters work on source indices, never on element values, so `T` needs no
//! ordering and equal-valued elements at different positions stay distinct.
//!
//! # Examples
//!
//! ```
//! use arrangements::Family;
//!
//! let family: Family = "AllPermutations".parse().unwrap();
//! assert!(family.is_ordered());
//! assert!(!family.with_replacement());
//! assert_eq!(family.count(4, 2), Some(12));
//! ```

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// One of the eight arrangement families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount)]
pub enum Family {
    /// Ordered, with replacement.
    AllSequences,
    /// Unordered, with replacement. Each multiset of slots appears once, sorted by index.
    SortedSequences,
    /// Ordered, without replacement.
    AllPermutations,
    /// Distinct and strictly increasing indices.
    ///
    /// Despite the name this never reorders elements: the output is the set
    /// of combinations, identical to [`Family::UnorderedSamplesWithoutReplacement`].
    OrderedDifferentPermutations,
    /// Ordered, with replacement.
    OrderedSamplesWithReplacement,
    /// Unordered, with replacement.
    UnorderedSamplesWithReplacement,
    /// Ordered, without replacement.
    OrderedSamplesWithoutReplacement,
    /// Unordered, without replacement.
    UnorderedSamplesWithoutReplacement,
}

/// How a producer walks the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount)]
pub enum Strategy {
    /// Extend every shorter arrangement by one eligible element.
    /// Keeps one frame per output position.
    Direct,
    /// Filter and map the digit vectors of a mixed-radix counter.
    /// Auxiliary state is the digit vector only.
    StackSafe,
}

/// Order constraint between neighbouring digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonic {
    NonDecreasing,
    StrictlyIncreasing,
}

impl Monotonic {
    fn holds(self, left: usize, right: usize) -> bool {
        match self {
            Monotonic::NonDecreasing => left <= right,
            Monotonic::StrictlyIncreasing => left < right,
        }
    }
}

impl Family {
    /// Does the order of elements inside an arrangement matter?
    pub const fn is_ordered(self) -> bool {
        matches!(
            self,
            Family::AllSequences
                | Family::AllPermutations
                | Family::OrderedSamplesWithReplacement
                | Family::OrderedSamplesWithoutReplacement
        )
    }

    /// May one source slot appear more than once in an arrangement?
    pub const fn with_replacement(self) -> bool {
        matches!(
            self,
            Family::AllSequences
                | Family::SortedSequences
                | Family::OrderedSamplesWithReplacement
                | Family::UnorderedSamplesWithReplacement
        )
    }

    /// Only ordered families have an extension rule for [`Strategy::Direct`].
    pub const fn supports(self, strategy: Strategy) -> bool {
        match strategy {
            Strategy::Direct => self.is_ordered(),
            Strategy::StackSafe => true,
        }
    }

    /// Order constraint applied to digit vectors, if any.
    pub const fn monotonic(self) -> Option<Monotonic> {
        match self {
            Family::SortedSequences
            | Family::UnorderedSamplesWithReplacement
            | Family::UnorderedSamplesWithoutReplacement => Some(Monotonic::NonDecreasing),
            Family::OrderedDifferentPermutations => Some(Monotonic::StrictlyIncreasing),
            _ => None,
        }
    }

    /// The filter selecting this family's digit vectors over a source of `source_len` slots.
    pub const fn filter(self, source_len: usize) -> DigitFilter {
        let filter = DigitFilter::any(source_len);
        let filter = if self.with_replacement() {
            filter
        } else {
            filter.distinct()
        };
        match self.monotonic() {
            Some(monotonic) => filter.monotonic(monotonic),
            None => filter,
        }
    }

    /// Expected number of arrangements of `length` drawn from `source_len` slots.
    ///
    /// Returns `None` if the count does not fit in a `u128`.
    pub fn count(self, source_len: usize, length: usize) -> Option<u128> {
        let n = source_len as u128;
        let k = length as u128;
        match (self.is_ordered(), self.with_replacement()) {
            (true, true) => n.checked_pow(u32::try_from(length).ok()?),
            (true, false) => {
                if k > n {
                    return Some(0);
                }
                ((n - k + 1)..=n).try_fold(1u128, |acc, factor| acc.checked_mul(factor))
            }
            (false, true) => {
                if k == 0 {
                    Some(1)
                } else if n == 0 {
                    Some(0)
                } else {
                    binomial(n + k - 1, k)
                }
            }
            (false, false) => binomial(n, k),
        }
    }
}

/// `n` choose `k`, or `None` on overflow.
fn binomial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result = 1u128;
    for i in 0..k {
        // The running product of i+1 consecutive integers is divisible by (i+1)!.
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

/// Predicate over digit vectors.
///
/// This is the only place where the per-family rules are expressed. Every
/// family, and every caller that needs to decide whether an index vector
/// belongs to a family, goes through [`DigitFilter::accepts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitFilter {
    /// Digits must be strictly below this value.
    bound: usize,
    /// No digit may appear twice.
    distinct: bool,
    /// Constraint between each digit and its successor.
    monotonic: Option<Monotonic>,
}

impl DigitFilter {
    /// A filter that accepts every vector whose digits are below `bound`.
    pub const fn any(bound: usize) -> Self {
        Self {
            bound,
            distinct: false,
            monotonic: None,
        }
    }

    /// Require pairwise distinct digits.
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Require the given order between neighbouring digits.
    pub const fn monotonic(mut self, monotonic: Monotonic) -> Self {
        self.monotonic = Some(monotonic);
        self
    }

    /// Does `digits` satisfy every constraint of this filter?
    pub fn accepts(&self, digits: &[usize]) -> bool {
        if digits.iter().any(|&digit| digit >= self.bound) {
            return false;
        }
        if let Some(monotonic) = self.monotonic {
            if !digits.windows(2).all(|pair| monotonic.holds(pair[0], pair[1])) {
                return false;
            }
            // A strictly increasing vector is already distinct.
            if monotonic == Monotonic::StrictlyIncreasing {
                return true;
            }
        }
        !self.distinct || all_distinct(digits)
    }
}

fn all_distinct(digits: &[usize]) -> bool {
    digits
        .iter()
        .enumerate()
        .all(|(i, digit)| !digits[..i].contains(digit))
}
