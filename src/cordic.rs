/* embcordic | cordic.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Rotation mode CORDIC datapath: quadrant pre-rotation and micro-rotations */

/******************************************************************************/

use crate::common::{truncate, wrap_vector, AngleCode, Depth, X_INIT, Y_INIT};

include!(concat!(env!("OUT_DIR"), "/cordic_tables.rs"));

/******************************************************************************/

/// A (cosine-like, sine-like) vector held in guard-bit-wide registers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vector {
    /// Cosine-like component
    pub x: i32,
    /// Sine-like component
    pub y: i32
}

/// The state of one pipeline slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageRecord {
    /// Rotated vector
    pub vector: Vector,
    /// Angle still left to rotate away
    pub residual: AngleCode
}

/// Sine and cosine, scaled to approximately ±32000
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SinCos {
    /// Cosine output word
    pub cosine: i16,
    /// Sine output word
    pub sine: i16
}

/// Quadrant selected by the two most significant bits of an angle code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// `00` or `11`: -90° to 90°, already within the convergence domain
    FirstOrFourth,
    /// `01`: 90° to 180°
    Second,
    /// `10`: 180° to 270°
    Third
}

impl Quadrant {
    /// Classifies an angle
    pub const fn of(angle: AngleCode) -> Self {
        match (angle as u32) >> 30 {
            0b01 => Quadrant::Second,
            0b10 => Quadrant::Third,
            _ => Quadrant::FirstOrFourth
        }
    }
}

/******************************************************************************/

/// Builds the stage 0 record for an angle
///
/// The initial vector is always aligned to a principal axis. For the second and third quadrants,
/// it is rotated by ±90° and the residual angle is moved by the same amount, which only requires
/// replacing the two most significant bits.
pub const fn pre_rotate(angle: AngleCode) -> StageRecord {
    const LOW_BITS: u32 = 0x3FFF_FFFF;
    match Quadrant::of(angle) {
        Quadrant::FirstOrFourth => StageRecord {
            vector: Vector { x: X_INIT, y: Y_INIT },
            residual: angle
        },
        Quadrant::Second => StageRecord {
            vector: Vector { x: -Y_INIT, y: X_INIT },
            residual: (angle as u32 & LOW_BITS) as i32
        },
        Quadrant::Third => StageRecord {
            vector: Vector { x: Y_INIT, y: -X_INIT },
            residual: (angle as u32 | !LOW_BITS) as i32
        }
    }
}

impl StageRecord {
    /// Performs the micro-rotation of stage `i`
    ///
    /// The rotation direction follows the sign of the residual angle, and the shifts are arithmetic.
    pub const fn rotate(self, i: usize) -> Self {
        let Vector { x, y } = self.vector;
        let (dx, dy) = (y >> i, x >> i);
        if self.residual < 0 {
            Self {
                vector: Vector { x: wrap_vector(x + dx), y: wrap_vector(y - dy) },
                residual: self.residual.wrapping_add(ATAN_TABLE[i])
            }
        } else {
            Self {
                vector: Vector { x: wrap_vector(x - dx), y: wrap_vector(y + dy) },
                residual: self.residual.wrapping_sub(ATAN_TABLE[i])
            }
        }
    }

    /// Drops the guard bit of the vector
    pub const fn output(self) -> SinCos {
        SinCos {
            cosine: truncate(self.vector.x),
            sine: truncate(self.vector.y)
        }
    }
}

/******************************************************************************/

/// Runs the whole datapath at once, without any pipelining
///
/// The result is bit-identical to what [`crate::CordicPipeline`] outputs for the same angle and depth.
pub const fn evaluate<const STAGES: usize>(angle: AngleCode) -> SinCos {
    assert!(Depth::<STAGES>::IS_VALID);
    let mut record = pre_rotate(angle);
    let mut i = 0;
    while i < Depth::<STAGES>::ITERATIONS {
        record = record.rotate(i);
        i += 1;
    }
    record.output()
}

/******************************************************************************/
