/* embcordic | angle.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

//! Conversions between floating point angles and angle codes

/******************************************************************************/

use core::f64::consts::TAU;
use core::fmt;

use crate::common::{AngleCode, FULL_TURN};

/******************************************************************************/

/// Conversion error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleError {
    /// The angle is NaN or infinite
    NotFinite
}

impl fmt::Display for AngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleError::NotFinite => write!(f, "angle is not a finite number")
        }
    }
}

impl core::error::Error for AngleError {}

/******************************************************************************/

/// Converts a number of turns to the nearest angle code, modulo a full turn
fn from_turns(turns: f64) -> AngleCode {
    let fraction = turns - libm::floor(turns);
    libm::round(fraction * FULL_TURN as f64) as u64 as u32 as i32
}

/// Converts radians to the nearest angle code, rejecting NaN and infinities
pub fn try_from_radians(radians: f64) -> Result<AngleCode, AngleError> {
    if !radians.is_finite() {
        return Err(AngleError::NotFinite);
    }
    Ok(from_turns(radians / TAU))
}

/// Converts radians to the nearest angle code
///
/// NaN and infinities convert to 0.
pub fn from_radians(radians: f64) -> AngleCode {
    try_from_radians(radians).unwrap_or(0)
}

/// Converts degrees to the nearest angle code
///
/// NaN and infinities convert to 0.
pub fn from_degrees(degrees: f64) -> AngleCode {
    if !degrees.is_finite() {
        return 0;
    }
    from_turns(degrees / 360.0)
}

/// Converts an angle code to radians, in [-π, π)
pub fn to_radians(angle: AngleCode) -> f64 {
    angle as f64 * TAU / FULL_TURN as f64
}

/// Converts an angle code to degrees, in [-180, 180)
pub fn to_degrees(angle: AngleCode) -> f64 {
    angle as f64 * 360.0 / FULL_TURN as f64
}

/******************************************************************************/
