// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Animated sorting visualizer engine
//!
//! Five classic comparison sorts (bubble, selection, insertion, merge, quick) turned
//! into suspendable, cancelable animation pipelines. Each algorithm is an `async fn`
//! whose every observable event - a comparison, a swap, a finalized index - flows
//! through one choke point, the [`StepEmitter`], which owns all pacing (per-step
//! delay, pause polling) and the cooperative stop check.
//!
//! # Architecture
//!
//! - [`StepEmitter`]: serializes algorithm events into [`EngineSignal`]s on an mpsc
//!   channel; the sole owner of the two suspension points (animation delay, pause
//!   poll loop).
//! - [`StatsAccumulator`]: comparison/swap totals plus wall-clock elapsed time,
//!   mutated only through the emitter's companion call.
//! - The algorithms ([`bubble_sort`], [`selection_sort`], [`insertion_sort`],
//!   [`merge_sort`], [`quick_sort`]): straight-line sorting code; recursion composes
//!   depth-first and unwinds on [`Aborted`] via `?`.
//! - [`SortVisualizer`]: the playback controller - start/pause/resume/stop state
//!   machine, one spawned tokio task per run, a fresh [`RunControl`] per run so
//!   nothing is process-wide.
//!
//! # Life of a sort run
//!
//! ```text
//! SortVisualizer::start ──▶ tokio task: algorithm loop
//!                               │  every comparison / swap
//!                               ▼
//!                          StepEmitter ── stop? ── pause poll ── delay
//!                               │
//!                               ▼  mpsc channel
//!                          EngineSignal::{Frame, StatsUpdate, ...} ──▶ host renderer
//! ```
//!
//! The host consumes [`EngineSignal`]s: `Frame` carries one [`StepEvent`] to render,
//! `StatsUpdate` refreshes the readouts, and `RunCompleted` / `RunStopped` close the
//! run (completion keeps the sorted marks, a stop clears everything).
//!
//! Rendering itself - bars, sliders, buttons, themes - is deliberately out of scope;
//! this crate ends at the signal channel.

// Attach sources.
pub mod algorithms;
pub mod common;
pub mod config;
pub mod controller;
pub mod step;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use algorithms::*;
pub use common::*;
pub use config::*;
pub use controller::*;
pub use step::*;
