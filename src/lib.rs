/* embcordic | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Pipelined rotation mode CORDIC sine / cosine engine */

/******************************************************************************/

#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

/******************************************************************************/

pub mod angle;
mod common;
mod cordic;
mod pipeline;
mod stream;
mod valid;

pub use angle::AngleError;
pub use common::{
    AngleCode, Depth, DEFAULT_STAGES, FULL_TURN, HALF_TURN, OUTPUT_WIDTH, QUARTER_TURN, VECTOR_WIDTH, X_INIT, Y_INIT
};
pub use cordic::{evaluate, pre_rotate, Quadrant, SinCos, StageRecord, Vector, ATAN_TABLE, GAIN_TABLE};
pub use pipeline::{CordicPipeline, Inputs, Outputs};
pub use stream::SinCosStream;
pub use valid::ValidTracker;

/******************************************************************************/

/// Blocking sine / cosine computation on a fresh pipeline of the default depth
///
/// For example:
/// ```
/// let result = embcordic::sin_cos(embcordic::angle::from_degrees(30.0));
/// assert!((result.sine - 16000).abs() < 24);
/// assert!((result.cosine - 27713).abs() < 24);
/// ```
pub fn sin_cos(angle: AngleCode) -> SinCos {
    CordicPipeline::<DEFAULT_STAGES>::new().compute(angle)
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sin_cos() {
        let cases = [
            (0x0000_0000u32, 32000, 0),
            (0x4000_0000, 0, 32000),
            (0x8000_0000, -32000, 0),
            (0xC000_0000, 0, -32000),
            (0x2AAA_AAAA, 16000, 27713)
        ];
        for (angle, cosine, sine) in cases {
            let result = sin_cos(angle as i32);
            assert!((result.cosine as i32 - cosine).abs() < 24, "angle {:#x}: {:?}", angle, result);
            assert!((result.sine as i32 - sine).abs() < 24, "angle {:#x}: {:?}", angle, result);
            assert_eq!(result, evaluate::<DEFAULT_STAGES>(angle as i32));
        }
    }

    #[test]
    fn test_default_depth() {
        let pipeline: CordicPipeline = CordicPipeline::default();
        assert_eq!(pipeline.stages().len(), DEFAULT_STAGES);
        assert_eq!(CordicPipeline::<DEFAULT_STAGES>::LATENCY, DEFAULT_STAGES + 2);
    }
}
