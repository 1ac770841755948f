// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared helpers for driving the step machinery in tests: a zero-delay emitter and a
//! drain-the-channel collector, so algorithm tests stay synchronous-looking and fast.

use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc::{channel, Receiver};

use crate::{EngineSignal, RunControl, StatsSnapshot, StepEmitter, StepEvent,
            CHANNEL_WIDTH};

/// A started run with zero per-step delay. Returns the emitter, the signal receiver,
/// and the control block (for stop/pause poking).
pub(crate) fn test_emitter(
) -> (StepEmitter, Receiver<EngineSignal>, Arc<RunControl>) {
    let control = Arc::new(RunControl::new_started());
    let (sender, receiver) = channel(CHANNEL_WIDTH);
    let emitter = StepEmitter::new(control.clone(), sender, Duration::ZERO);
    (emitter, receiver, control)
}

/// Everything a finished run left on the signal channel, split by kind but with the raw
/// interleaving preserved.
#[derive(Debug)]
pub(crate) struct SignalCapture {
    pub raw: Vec<EngineSignal>,
    pub frames: Vec<StepEvent>,
    pub stats: Vec<StatsSnapshot>,
}

impl SignalCapture {
    /// Frames that carry a compare highlight, in emission order.
    pub fn compare_frames(&self) -> Vec<&StepEvent> {
        self.frames
            .iter()
            .filter(|frame| frame.compare_indices.is_some())
            .collect()
    }

    /// Finalized indices in emission order (additive across frames).
    pub fn sorted_marks(&self) -> Vec<usize> {
        self.frames
            .iter()
            .flat_map(|frame| frame.sorted_indices.iter().copied())
            .collect()
    }
}

/// Drains whatever is currently buffered on the channel. Call after the run under test
/// has returned; the sender side may still be alive, so this uses `try_recv` rather
/// than waiting for channel closure.
pub(crate) fn drain_signals(receiver: &mut Receiver<EngineSignal>) -> SignalCapture {
    let mut capture = SignalCapture {
        raw: vec![],
        frames: vec![],
        stats: vec![],
    };
    while let Ok(signal) = receiver.try_recv() {
        match &signal {
            EngineSignal::Frame(frame) => capture.frames.push(frame.clone()),
            EngineSignal::StatsUpdate(snapshot) => capture.stats.push(*snapshot),
            EngineSignal::RunCompleted | EngineSignal::RunStopped => {}
        }
        capture.raw.push(signal);
    }
    capture
}
