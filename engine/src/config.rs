// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::RangeInclusive, time::Duration};

use crate::{ok, AlgorithmId, CommonError, CommonErrorType, CommonResult};

pub const DEFAULT_ARRAY_SIZE: usize = 50;
pub const DEFAULT_SPEED: u32 = 50;

/// Bounds the host shell accepts for the bar-count knob.
pub const ARRAY_SIZE_RANGE: RangeInclusive<usize> = 5..=100;

/// Bounds the host shell accepts for the speed knob.
pub const SPEED_RANGE: RangeInclusive<u32> = 1..=100;

const MS_PER_SECOND: u32 = 1_000;

/// The visualization's pacing knob: every step is delayed by `1000 / speed` ms. A
/// zero/low guard keeps a nonsense speed from dividing by zero; speeds above 1000
/// collapse the delay to zero, which is what the test harness uses to drive runs flat
/// out over the same code path.
#[must_use]
pub fn step_delay_from_speed(speed: u32) -> Duration {
    Duration::from_millis(u64::from(MS_PER_SECOND / speed.max(1)))
}

/// Recognized configuration options of the visualizer shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VizConfig {
    /// Drives the bar count of generated arrays.
    pub array_size: usize,
    /// Inversely drives the per-step delay; see [`step_delay_from_speed`].
    pub speed: u32,
    pub algorithm: AlgorithmId,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            array_size: DEFAULT_ARRAY_SIZE,
            speed: DEFAULT_SPEED,
            algorithm: AlgorithmId::default(),
        }
    }
}

impl VizConfig {
    /// # Errors
    ///
    /// Returns [`CommonErrorType::ValueOutOfRange`] when either knob is outside its
    /// documented range.
    pub fn try_validate(&self) -> CommonResult<()> {
        if !ARRAY_SIZE_RANGE.contains(&self.array_size) {
            return CommonError::new_error_result(
                CommonErrorType::ValueOutOfRange,
                &format!(
                    "array size {} is outside {:?}",
                    self.array_size, ARRAY_SIZE_RANGE
                ),
            );
        }
        if !SPEED_RANGE.contains(&self.speed) {
            return CommonError::new_error_result(
                CommonErrorType::ValueOutOfRange,
                &format!("speed {} is outside {:?}", self.speed, SPEED_RANGE),
            );
        }
        ok!()
    }

    #[must_use]
    pub fn step_delay(&self) -> Duration { step_delay_from_speed(self.speed) }
}
