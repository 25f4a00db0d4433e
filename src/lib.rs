// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of combinatorial arrangements of a finite collection.
//!
//! Given a source slice and a length, the crate lazily produces every
//! sequence, permutation or sample of that length, under each combination of
//! two axes:
//!
//! - **ordering**: is `[a, b]` different from `[b, a]`?
//! - **replacement**: may one source slot appear more than once?
//!
//! # Architecture
//!
//! Two layers:
//!
//! ## Mixed-radix counter
//!
//! [`MixedRadixCounter`] enumerates every digit vector of a given length and
//! base in increasing numeric order. It knows nothing about arrangements.
//!
//! ## Arrangement generators
//!
//! Every [`Family`] is the counter's output seen through a [`DigitFilter`]
//! (none, all distinct, non-decreasing, or distinct and increasing), with
//! each digit read as a source index. Ordered families can also be produced
//! directly, by extending shorter arrangements one slot at a time.
//!
//! | Strategy | Producer | Auxiliary state |
//! |----------|----------|-----------------|
//! | [`Strategy::Direct`] | [`DirectArrangements`] | one frame per position |
//! | [`Strategy::StackSafe`] | [`CounterArrangements`] | one digit vector |
//!
//! Both strategies produce the same set of arrangements.
//!
//! # Example
//!
//! ```
//! use arrangements::{generate_all_sequences_of_length, Family};
//!
//! let sequences: Vec<Vec<char>> = generate_all_sequences_of_length(&['a', 'b', 'c'], 2)
//!     .unwrap()
//!     .collect();
//! assert_eq!(sequences.len(), 9);
//! assert_eq!(Family::AllSequences.count(3, 2), Some(9));
//! ```
//!
//! # Logging
//!
//! Producers emit `tracing` events: one at `debug` level when generation
//! starts and one at `trace` level when a producer runs dry. The crate never
//! installs a subscriber.

pub mod counter;
pub mod error;
pub mod family;
pub mod generators;

// Re-export commonly used types
pub use generators::{
    arrangements, generate_all_permutations_of_length,
    generate_all_permutations_of_length_stack_safe, generate_all_sequences_of_length,
    generate_all_sequences_of_length_stack_safe, generate_ordered_different_permutations_of_length,
    generate_sorted_different_sequences_of_length, get_ordered_samples_with_replacement,
    get_ordered_samples_with_replacement_stack_safe, get_ordered_samples_without_replacement,
    get_ordered_samples_without_replacement_stack_safe, get_unordered_samples_with_replacement,
    get_unordered_samples_without_replacement, Arrangements, CounterArrangements,
    DirectArrangements,
};
pub use counter::{AllNumbers, MixedRadixCounter};
pub use error::{ArrangementError, Result};
pub use family::{DigitFilter, Family, Monotonic, Strategy};
