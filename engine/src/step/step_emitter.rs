// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single choke point through which every algorithm reports a visual frame and
//! yields control. All pacing (per-step delay), the pause-wait loop, and the
//! cooperative stop check live here, so the algorithm bodies stay straight-line
//! sorting code.

use std::{sync::Arc, time::Duration};

use smallvec::smallvec;
use tokio::{sync::mpsc::Sender, time::sleep};

use crate::{EngineSignal, RunControl, SortedIndices, StatsAccumulator, StatsSnapshot,
            StepEvent, PAUSE_POLL_INTERVAL};

/// Cooperative cancellation marker. Not a fault: it means a stop was requested and the
/// algorithm must unwind immediately, performing no further array mutation, stats
/// updates, or sorted-marking. Propagates through arbitrarily deep recursion with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

/// Return type of every suspendable algorithm step. `Err(Aborted)` short-circuits the
/// run; it is never conflated with a valid empty result.
pub type StepResult<T> = core::result::Result<T, Aborted>;

/// Emits [`StepEvent`] frames and [`StatsSnapshot`] updates for one sort run.
///
/// There are exactly two suspension points in a run, both inside this struct:
/// 1. the fixed per-step animation delay ([`Self::emit_step`]), and
/// 2. the pause poll loop (also [`Self::emit_step`]).
///
/// Steps are strictly sequential: frame N+1 is not produced before frame N's delay has
/// elapsed and (if paused) the run has resumed.
#[derive(Debug)]
pub struct StepEmitter {
    control: Arc<RunControl>,
    signal_sender: Sender<EngineSignal>,
    step_delay: Duration,
    stats: StatsAccumulator,
}

impl StepEmitter {
    /// Captures the run's start timestamp (for elapsed-time reporting) as a side
    /// effect, so build this at the moment the run actually starts.
    #[must_use]
    pub fn new(
        control: Arc<RunControl>,
        signal_sender: Sender<EngineSignal>,
        step_delay: Duration,
    ) -> Self {
        Self {
            control,
            signal_sender,
            step_delay,
            stats: StatsAccumulator::start_now(),
        }
    }

    #[must_use]
    pub fn is_stop_requested(&self) -> bool { self.control.is_stop_requested() }

    #[must_use]
    pub fn stats_snapshot(&self) -> StatsSnapshot { self.stats.snapshot() }

    /// Reports one paced visual frame.
    ///
    /// 1. If a stop was requested: returns [`Aborted`] immediately - no frame, no stats
    ///    side effect.
    /// 2. While paused (and not stopped): polls every [`PAUSE_POLL_INTERVAL`] without
    ///    consuming the step. This is the sole pause point.
    /// 3. Sleeps the per-step delay (the `1000 / speed` pacing knob, applied to every
    ///    step), then re-checks the stop flag: a stop that raced with the delay
    ///    suppresses the frame.
    ///
    /// # Errors
    ///
    /// Returns [`Aborted`] when a stop was requested; callers unwind with `?`.
    pub async fn emit_step(
        &mut self,
        array: &[u32],
        compare_indices: Option<(usize, usize)>,
        pivot_index: Option<usize>,
    ) -> StepResult<()> {
        if self.control.is_stop_requested() {
            return Err(Aborted);
        }

        while self.control.is_paused() && !self.control.is_stop_requested() {
            sleep(PAUSE_POLL_INTERVAL).await;
        }

        sleep(self.step_delay).await;

        if self.control.is_stop_requested() {
            return Err(Aborted);
        }

        self.send_frame(array, compare_indices, smallvec![], pivot_index)
            .await;
        Ok(())
    }

    /// Finalizes one index: an un-paced frame whose only payload (besides the array
    /// snapshot) is the additive sorted mark. Sorted marks are non-reversible for the
    /// run.
    ///
    /// # Errors
    ///
    /// Returns [`Aborted`] when a stop was requested, so no sorted-marking can escape
    /// after a stop.
    pub async fn mark_sorted(&mut self, array: &[u32], index: usize) -> StepResult<()> {
        if self.control.is_stop_requested() {
            return Err(Aborted);
        }
        self.send_frame(array, None, smallvec![index], None).await;
        Ok(())
    }

    /// [`Self::mark_sorted`] followed by a half-delay sleep. Used only by the cosmetic
    /// finalization sweeps (insertion sort, outermost quick sort call). Deliberately no
    /// pause poll: the sweeps ignore the pause flag.
    ///
    /// # Errors
    ///
    /// Returns [`Aborted`] when a stop was requested.
    pub async fn mark_sorted_paced(
        &mut self,
        array: &[u32],
        index: usize,
    ) -> StepResult<()> {
        self.mark_sorted(array, index).await?;
        sleep(self.step_delay / 2).await;
        Ok(())
    }

    /// Companion call invoked adjacent to each comparison or swap. Updates the running
    /// totals (elapsed time recomputed from the captured start timestamp) and pushes a
    /// [`EngineSignal::StatsUpdate`] so the host readouts follow every increment.
    pub async fn record_stats(&mut self, delta_comparisons: u64, delta_swaps: u64) {
        let snapshot = self.stats.record(delta_comparisons, delta_swaps);
        // We don't care about the result of this operation.
        self.signal_sender
            .send(EngineSignal::StatsUpdate(snapshot))
            .await
            .ok();
    }

    async fn send_frame(
        &mut self,
        array: &[u32],
        compare_indices: Option<(usize, usize)>,
        sorted_indices: SortedIndices,
        pivot_index: Option<usize>,
    ) {
        let frame = StepEvent {
            array: array.to_vec(),
            compare_indices,
            sorted_indices,
            pivot_index,
        };
        // We don't care about the result of this operation.
        self.signal_sender
            .send(EngineSignal::Frame(frame))
            .await
            .ok();
    }
}
