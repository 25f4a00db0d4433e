// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::fmt::Debug;
use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber, once per test binary.
///
/// The level comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

/// Expected arrangements, compared as a multiset.
///
/// Enumeration order is not checked: the direct and counter-driven
/// strategies visit the same arrangements in different orders.
#[derive(Debug)]
pub struct ArrangementVerifier<T> {
    expected: Vec<Vec<T>>,
}

impl<T: PartialEq + Debug> ArrangementVerifier<T> {
    pub fn new(expected: Vec<Vec<T>>) -> Self {
        Self { expected }
    }

    /// Assert that `actual` yields every expected arrangement exactly once and nothing else.
    pub fn verify(&self, actual: impl IntoIterator<Item = Vec<T>>) {
        let mut remaining: Vec<&Vec<T>> = self.expected.iter().collect();
        let mut count = 0;
        for arrangement in actual {
            count += 1;
            match remaining.iter().position(|candidate| **candidate == arrangement) {
                Some(position) => {
                    remaining.swap_remove(position);
                }
                None => panic!("Arrangement {:?} is not expected", arrangement),
            }
        }
        assert!(
            remaining.is_empty(),
            "Missing arrangements {:?} after {} produced",
            remaining,
            count
        );
    }
}

/// Collect into a sorted list, for set comparisons between strategies.
pub fn sorted<T: Ord>(arrangements: impl IntoIterator<Item = Vec<T>>) -> Vec<Vec<T>> {
    let mut all: Vec<Vec<T>> = arrangements.into_iter().collect();
    all.sort();
    all
}
