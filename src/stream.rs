/* embcordic | stream.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use log::debug;

use crate::common::AngleCode;
use crate::cordic::SinCos;
use crate::pipeline::{CordicPipeline, Inputs};

/******************************************************************************/

/// Iterator feeding one angle per tick into a pipeline and yielding the results in order
///
/// Results of computations that were already in flight in the pipeline come out first.
pub struct SinCosStream<I, const STAGES: usize> {
    angles: I,
    pipeline: CordicPipeline<STAGES>,
    exhausted: bool
}

impl<I, const STAGES: usize> SinCosStream<I, STAGES>
where
    I: Iterator<Item = AngleCode>
{
    /// Wraps a pipeline and a source of angles
    pub fn new<A>(pipeline: CordicPipeline<STAGES>, angles: A) -> Self
    where
        A: IntoIterator<Item = AngleCode, IntoIter = I>
    {
        Self {
            angles: angles.into_iter(),
            pipeline,
            exhausted: false
        }
    }

    /// Gives the pipeline back, with whatever is still in flight
    pub fn into_pipeline(self) -> CordicPipeline<STAGES> {
        self.pipeline
    }
}

impl<I, const STAGES: usize> Iterator for SinCosStream<I, STAGES>
where
    I: Iterator<Item = AngleCode>
{
    type Item = SinCos;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let inputs = if self.exhausted {
                Inputs::idle()
            } else if let Some(angle) = self.angles.next() {
                Inputs::start(angle)
            } else {
                debug!("angles exhausted, draining {} result(s)", self.pipeline.in_flight());
                self.exhausted = true;
                Inputs::idle()
            };

            if self.exhausted && self.pipeline.in_flight() == 0 {
                return None;
            }

            if let Some(result) = self.pipeline.tick(inputs).result() {
                return Some(result);
            }
        }
    }
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cordic::evaluate;

    #[test_log::test]
    fn test_stream_order() {
        let angles = (0..100).map(|i: i32| i.wrapping_mul(0x0291_3C5B));
        let mut stream = CordicPipeline::<16>::new().stream(angles.clone());
        for angle in angles {
            assert_eq!(stream.next(), Some(evaluate::<16>(angle)));
        }
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.into_pipeline().in_flight(), 0);
    }

    #[test_log::test]
    fn test_empty_stream() {
        let mut stream = CordicPipeline::<8>::new().stream(core::iter::empty());
        assert_eq!(stream.next(), None);
    }

    #[test_log::test]
    fn test_stream_after_in_flight() {
        let mut pipeline = CordicPipeline::<8>::new();
        pipeline.tick(Inputs::start(0x4000_0000));
        pipeline.tick(Inputs::idle());
        let mut stream = pipeline.stream([0x1000_0000]);
        assert_eq!(stream.next(), Some(evaluate::<8>(0x4000_0000)));
        assert_eq!(stream.next(), Some(evaluate::<8>(0x1000_0000)));
        assert_eq!(stream.next(), None);
    }
}
