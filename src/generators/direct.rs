// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direct generation by extension.
//!
//! Every arrangement of length `L` is an arrangement of length `L - 1`
//! extended by one eligible source slot. The recursion is unrolled into an
//! explicit frame stack: frame `i` holds the slot chosen for position `i`.
//! Advancing the producer pops the deepest frame, moves it to the next
//! eligible slot, and refills the positions below it from slot 0, which is
//! what resuming the innermost suspended recursion level would do.
//!
//! Slots in use are tracked by index, so equal values at different
//! positions of the source are still separate choices.

use super::validate;
use crate::error::{ArrangementError, Result};
use crate::family::{Family, Strategy};
use std::iter::FusedIterator;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No arrangement produced yet.
    Fresh,
    Running,
    Done,
}

/// Lazy producer of an ordered family's arrangements.
///
/// Items come out prefix-major: the last position varies fastest.
#[derive(Debug, Clone)]
pub struct DirectArrangements<'a, T> {
    source: &'a [T],
    family: Family,
    length: usize,
    /// Source slot chosen at each depth.
    frames: Vec<usize>,
    /// Slots currently held by a frame; empty for families with replacement.
    in_use: Vec<bool>,
    state: State,
    yielded: usize,
}

impl<'a, T: Clone> DirectArrangements<'a, T> {
    pub(crate) fn new(source: &'a [T], length: usize, family: Family) -> Result<Self> {
        if !family.supports(Strategy::Direct) {
            return Err(ArrangementError::UnsupportedStrategy {
                family,
                strategy: Strategy::Direct,
            });
        }
        validate(source, length, family)?;
        debug!(
            %family,
            strategy = %Strategy::Direct,
            source_len = source.len(),
            length,
            expected = ?family.count(source.len(), length),
            "generating arrangements"
        );

        let in_use = if family.with_replacement() {
            Vec::new()
        } else {
            vec![false; source.len()]
        };
        Ok(Self {
            source,
            family,
            length,
            frames: Vec::with_capacity(length),
            in_use,
            state: State::Fresh,
            yielded: 0,
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    fn eligible(&self, slot: usize) -> bool {
        self.in_use.get(slot).map_or(true, |used| !used)
    }

    fn next_eligible(&self, from: usize) -> Option<usize> {
        (from..self.source.len()).find(|&slot| self.eligible(slot))
    }

    fn push(&mut self, slot: usize) {
        if let Some(used) = self.in_use.get_mut(slot) {
            *used = true;
        }
        self.frames.push(slot);
    }

    fn pop(&mut self) -> Option<usize> {
        let slot = self.frames.pop()?;
        if let Some(used) = self.in_use.get_mut(slot) {
            *used = false;
        }
        Some(slot)
    }

    /// Fill the remaining positions with the first eligible slots.
    ///
    /// Returns false if some position has no eligible slot left.
    fn descend(&mut self) -> bool {
        while self.frames.len() < self.length {
            match self.next_eligible(0) {
                Some(slot) => self.push(slot),
                None => return false,
            }
        }
        true
    }

    fn emit(&mut self) -> Vec<T> {
        self.yielded += 1;
        self.frames
            .iter()
            .map(|&slot| self.source[slot].clone())
            .collect()
    }
}

impl<T: Clone> Iterator for DirectArrangements<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::Fresh => {
                self.state = State::Running;
                if self.descend() {
                    return Some(self.emit());
                }
            }
            State::Running => {}
        }

        while let Some(slot) = self.pop() {
            if let Some(next) = self.next_eligible(slot + 1) {
                self.push(next);
                if self.descend() {
                    return Some(self.emit());
                }
            }
        }

        self.state = State::Done;
        trace!(family = %self.family, yielded = self.yielded, "extension exhausted");
        None
    }
}

impl<T: Clone> FusedIterator for DirectArrangements<'_, T> {}
