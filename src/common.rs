/* embcordic | common.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use crate::cordic::ATAN_TABLE;

/// Angle in units of `2π / 2^32` radians per LSB
///
/// Two's complement wraparound is the same thing as reducing modulo a full turn.
pub type AngleCode = i32;

/// A quarter turn (π/2) in angle code units
pub const QUARTER_TURN: AngleCode = 1 << 30;
/// A half turn (π) as an angle code bit pattern
pub const HALF_TURN: AngleCode = i32::MIN;
/// A full turn (2π) in angle code units, one past the representable range
pub const FULL_TURN: u64 = 1 << 32;

/// Width of the sine / cosine output words
pub const OUTPUT_WIDTH: u32 = 16;
/// Width of the internal vector registers (output width + guard bit)
pub const VECTOR_WIDTH: u32 = OUTPUT_WIDTH + 1;

/// Initial X component, pre-scaled by the inverse CORDIC gain so that the result lands near ±32000
pub const X_INIT: i32 = 0x4BE5;
/// Initial Y component
pub const Y_INIT: i32 = 0;

/// Default number of pipeline stages
pub const DEFAULT_STAGES: usize = 16;

/******************************************************************************/

/// Compile-time parameters derived from the pipeline depth
pub struct Depth<const STAGES: usize>;

impl<const STAGES: usize> Depth<STAGES> {
    /// Number of ticks from the one sampling `start` (inclusive) to the one raising `data_valid`
    pub const LATENCY: usize = STAGES + 2;

    /// Number of micro-rotations performed between the first and the last stage
    pub const ITERATIONS: usize = STAGES - 1;

    /// Fails to compile when the depth is not supported
    pub const IS_VALID: bool = {
        assert!(STAGES >= 2, "The pipeline needs at least 2 stages");
        assert!(STAGES - 1 <= ATAN_TABLE.len(), "The pipeline depth exceeds the arctangent table");
        assert!(STAGES + 2 <= u32::BITS as usize, "The valid tracker does not fit in 32 bits");
        true
    };
}

/******************************************************************************/

/// Wraps a value to the width of the internal vector registers
///
/// Example: 0x10000 --> -0x10000, 0x1FFFF --> -1
pub const fn wrap_vector(x: i32) -> i32 {
    const SHIFT: u32 = i32::BITS - VECTOR_WIDTH;
    (x << SHIFT) >> SHIFT
}

/// Drops the guard bit, keeping the low output bits as they are
pub const fn truncate(x: i32) -> i16 {
    x as i16
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_vector() {
        assert_eq!(wrap_vector(0), 0);
        assert_eq!(wrap_vector(0xFFFF), 0xFFFF);
        assert_eq!(wrap_vector(0x10000), -0x10000);
        assert_eq!(wrap_vector(0x1FFFF), -1);
        assert_eq!(wrap_vector(-0x10000), -0x10000);
        assert_eq!(wrap_vector(-0x10001), 0xFFFF);
        assert_eq!(wrap_vector(-X_INIT), -X_INIT);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(31999), 31999);
        assert_eq!(truncate(-31998), -31998);
        // Only the guard bit is lost
        assert_eq!(truncate(0x8000), i16::MIN);
    }

    #[test]
    fn test_depth() {
        assert!(Depth::<DEFAULT_STAGES>::IS_VALID);
        assert_eq!(Depth::<DEFAULT_STAGES>::LATENCY, 18);
        assert_eq!(Depth::<DEFAULT_STAGES>::ITERATIONS, 15);
        assert!(Depth::<2>::IS_VALID);
        assert!(Depth::<30>::IS_VALID);
    }

    #[test]
    fn test_angle_constants() {
        assert_eq!(QUARTER_TURN as u32, 0x4000_0000);
        assert_eq!(HALF_TURN as u32, 0x8000_0000);
        assert_eq!(FULL_TURN, 4 * QUARTER_TURN as u64);
    }
}
