/* embcordic | valid.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use crate::common::Depth;

/******************************************************************************/

/// Shift register of "this slot carries a live result" flags
///
/// Bit 0 is the input stage, bit `STAGES + 1` is the output stage. A flag set by an accepted
/// `start` therefore reaches the output after `STAGES + 1` shifts, together with its data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidTracker<const STAGES: usize> {
    bits: u32
}

impl<const STAGES: usize> ValidTracker<STAGES> {
    /// Number of tracked slots
    pub const LENGTH: usize = Depth::<STAGES>::LATENCY;
    const MASK: u32 = u32::MAX >> (u32::BITS as usize - Self::LENGTH);
    const TOP: u32 = 1 << (Self::LENGTH - 1);

    /// Creates an empty tracker
    pub const fn new() -> Self {
        assert!(Depth::<STAGES>::IS_VALID);
        Self { bits: 0 }
    }

    /// Advances every flag by one slot and enters `start` at slot 0
    pub fn shift(&mut self, start: bool) {
        self.bits = ((self.bits << 1) | start as u32) & Self::MASK;
    }

    /// Drops every flag
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Flag of the output stage, i.e. `data_valid`
    pub const fn output(&self) -> bool {
        self.bits & Self::TOP != 0
    }

    /// Flag of a given slot
    pub const fn is_set(&self, slot: usize) -> bool {
        slot < Self::LENGTH && (self.bits >> slot) & 1 != 0
    }

    /// Number of live results that have not reached the output stage yet
    pub const fn pending(&self) -> usize {
        (self.bits & !Self::TOP).count_ones() as usize
    }

    /// Raw register contents, slot 0 in the least significant bit
    pub const fn bits(&self) -> u32 {
        self.bits
    }
}

/******************************************************************************/
