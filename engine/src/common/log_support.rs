// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in [tracing](https://docs.rs/tracing) bootstrap for binaries that embed this
//! engine. The library itself only *emits* events ([`tracing::debug!`] at run lifecycle
//! points); wiring a subscriber is the host's decision, typically behind a `--log` CLI
//! flag.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::CommonResult;

/// Installs a global [`tracing_subscriber`] registry with a single `fmt` layer filtered
/// to the given level. Call this at most once per process.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> CommonResult<()> {
    tracing_subscriber::registry()
        .with(level_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .into_diagnostic()
}
