/* embcordic | pipeline.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Cycle-accurate model of the pipelined CORDIC engine */

/******************************************************************************/

use log::{debug, trace};

use crate::common::{AngleCode, Depth, DEFAULT_STAGES};
use crate::cordic::{pre_rotate, SinCos, StageRecord, Vector};
use crate::stream::SinCosStream;
use crate::valid::ValidTracker;

/******************************************************************************/

/// Input signals, sampled on each rising clock edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inputs {
    /// Active-low reset, takes priority over everything else
    pub reset_n: bool,
    /// Synchronous gate: when low, the data is frozen and the valid flags are dropped
    pub enable: bool,
    /// Requests a new computation for `angle`
    pub start: bool,
    /// Angle, in units of `2π / 2^32` radians per LSB
    pub angle: AngleCode
}

impl Inputs {
    /// Enabled, no new computation
    pub const fn idle() -> Self {
        Self { reset_n: true, enable: true, start: false, angle: 0 }
    }

    /// Enabled, starts a new computation
    pub const fn start(angle: AngleCode) -> Self {
        Self { reset_n: true, enable: true, start: true, angle }
    }

    /// Enable deasserted
    pub const fn disabled() -> Self {
        Self { reset_n: true, enable: false, start: false, angle: 0 }
    }

    /// Reset asserted
    pub const fn reset() -> Self {
        Self { reset_n: false, enable: false, start: false, angle: 0 }
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self::idle()
    }
}

/// Output signals, as registered by the output stage
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outputs {
    /// Cosine, scaled to approximately ±32000
    pub cosine: i16,
    /// Sine, scaled to approximately ±32000
    pub sine: i16,
    /// Set for one tick when `cosine` and `sine` belong to an accepted `start`
    pub data_valid: bool
}

impl Outputs {
    /// The result, if it is valid
    pub const fn result(&self) -> Option<SinCos> {
        if self.data_valid {
            Some(SinCos { cosine: self.cosine, sine: self.sine })
        } else {
            None
        }
    }
}

/******************************************************************************/

/// The pipelined sine / cosine engine
///
/// Each call to [`CordicPipeline::tick()`] models one rising clock edge. A computation started on
/// a tick comes out, with `data_valid` set, on the `STAGES + 2`-th tick counting that one.
/// A new computation can be started on every tick.
#[derive(Clone, Debug)]
pub struct CordicPipeline<const STAGES: usize = DEFAULT_STAGES> {
    angle: AngleCode,
    stages: [StageRecord; STAGES],
    output: SinCos,
    valid: ValidTracker<STAGES>
}

impl<const STAGES: usize> CordicPipeline<STAGES> {
    /// Number of ticks from `start` (inclusive) to `data_valid`
    pub const LATENCY: usize = Depth::<STAGES>::LATENCY;

    const CLEARED: StageRecord = StageRecord { vector: Vector { x: 0, y: 0 }, residual: 0 };

    /// Creates a pipeline in its reset state
    pub const fn new() -> Self {
        assert!(Depth::<STAGES>::IS_VALID);
        Self {
            angle: 0,
            stages: [Self::CLEARED; STAGES],
            output: SinCos { cosine: 0, sine: 0 },
            valid: ValidTracker::new()
        }
    }

    /// Clocks the pipeline once
    ///
    /// With `enable` high, every record moves one slot forward while its stage transform is
    /// applied, the output stage latches the last record, and `start` enters the valid tracker.
    /// With `enable` low, all the data stays in place but the valid tracker is cleared, so anything
    /// in flight will come out without `data_valid`.
    pub fn tick(&mut self, inputs: Inputs) -> Outputs {
        if !inputs.reset_n {
            self.reset();
            return self.outputs();
        }

        if inputs.enable {
            self.output = self.stages[STAGES - 1].output();
            for i in (0..STAGES - 1).rev() {
                self.stages[i + 1] = self.stages[i].rotate(i);
            }
            self.stages[0] = pre_rotate(self.angle);
            self.angle = inputs.angle;
            self.valid.shift(inputs.start);
            if self.valid.output() {
                trace!("result out: cos = {}, sin = {}", self.output.cosine, self.output.sine);
            }
        } else if self.valid.bits() != 0 {
            trace!("enable low, dropping valid flags {:#x}", self.valid.bits());
            self.valid.clear();
        }

        self.outputs()
    }

    /// Asynchronous reset
    ///
    /// Clears every register immediately, without waiting for a clock edge.
    pub fn reset(&mut self) {
        let live = self.valid.bits().count_ones();
        if live > 0 {
            debug!("reset, discarding {} in-flight result(s)", live);
        }
        *self = Self::new();
    }

    /// Current output signals
    pub const fn outputs(&self) -> Outputs {
        Outputs {
            cosine: self.output.cosine,
            sine: self.output.sine,
            data_valid: self.valid.output()
        }
    }

    /// Number of accepted computations that have not come out yet
    pub const fn in_flight(&self) -> usize {
        self.valid.pending()
    }

    /// Angle held by the input stage
    pub const fn input_angle(&self) -> AngleCode {
        self.angle
    }

    /// Contents of the iteration stages, stage 0 first
    pub const fn stages(&self) -> &[StageRecord; STAGES] {
        &self.stages
    }

    /// State of the valid tracker
    pub const fn valid_tracker(&self) -> &ValidTracker<STAGES> {
        &self.valid
    }

    /// Blocking computation of a single angle
    ///
    /// Starts the computation and clocks the pipeline until it comes out. Computations that were
    /// already in flight keep flowing but their results are not returned.
    /// For example:
    /// ```
    /// let mut pipeline = embcordic::CordicPipeline::<16>::new();
    /// let result = pipeline.compute(0x4000_0000);
    /// assert!(result.sine > 31900 && result.cosine.abs() < 100);
    /// ```
    pub fn compute(&mut self, angle: AngleCode) -> SinCos {
        let mut outputs = self.tick(Inputs::start(angle));
        for _ in 1..Self::LATENCY {
            outputs = self.tick(Inputs::idle());
        }
        debug_assert!(outputs.data_valid);
        SinCos { cosine: outputs.cosine, sine: outputs.sine }
    }

    /// Streams angles through the pipeline, one per tick
    ///
    /// The results come out in order. Once the angles run out, the pipeline is drained.
    /// For example:
    /// ```
    /// let angles = [0, 0x4000_0000, i32::MIN];
    /// let results: Vec<_> = embcordic::CordicPipeline::<16>::new().stream(angles).collect();
    /// assert_eq!(results.len(), 3);
    /// assert!(results[2].cosine < -31900);
    /// ```
    pub fn stream<I>(self, angles: I) -> SinCosStream<I::IntoIter, STAGES>
    where
        I: IntoIterator<Item = AngleCode>
    {
        SinCosStream::new(self, angles)
    }
}

impl<const STAGES: usize> Default for CordicPipeline<STAGES> {
    fn default() -> Self {
        Self::new()
    }
}

/******************************************************************************/
