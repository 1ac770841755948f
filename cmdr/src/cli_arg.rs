// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use clap::Parser;
use sortviz_engine::{AlgorithmId, CommonError, CommonErrorType, CommonResult,
                     DEFAULT_ARRAY_SIZE, DEFAULT_SPEED};
use strum::IntoEnumIterator;

/// Run an animated sorting visualization in the terminal.
#[derive(Debug, Parser)]
#[command(name = "sortviz", version, about)]
pub struct CLIArg {
    /// Number of bars in the generated array.
    #[arg(long, short = 'n', default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Playback speed; the per-step delay is 1000 / speed milliseconds.
    #[arg(long, short, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,

    /// Which algorithm to run: bubble, selection, insertion, merge, or quick.
    #[arg(long, short, default_value = "bubble")]
    pub algorithm: String,

    /// Log engine lifecycle events at debug level.
    #[arg(long)]
    pub enable_logging: bool,
}

impl CLIArg {
    /// # Errors
    ///
    /// Returns [`CommonErrorType::InvalidArguments`] when the `--algorithm` value is
    /// not one of the five known identifiers.
    pub fn try_parse_algorithm(&self) -> CommonResult<AlgorithmId> {
        AlgorithmId::from_str(&self.algorithm).map_or_else(
            |_| {
                let valid = AlgorithmId::iter()
                    .map(|it| it.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                CommonError::new_error_result(
                    CommonErrorType::InvalidArguments,
                    &format!(
                        "unknown algorithm '{}', expected one of: {valid}",
                        self.algorithm
                    ),
                )
            },
            Ok,
        )
    }
}
