// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The playback controller: owns the run/pause/stop state machine and dispatches to the
//! selected algorithm on a spawned tokio task. State machine:
//!
//! ```text
//! Idle -> Running -> {Paused <-> Running} -> {Completed | Stopped} -> Idle
//! ```

use std::sync::Arc;

use tokio::sync::{mpsc::Sender, oneshot};

use crate::{bubble_sort, generate_random_array, insertion_sort, merge_sort, ok,
            quick_sort, selection_sort, step_delay_from_speed, AlgorithmId,
            CommonError, CommonErrorType, CommonResult, EngineSignal, RunControl,
            RunOutcome, StepEmitter, StepResult};

/// One visualizer instance driving at most one sort run at a time. Multiple instances
/// can coexist: nothing here is process-wide - each run owns a fresh [`RunControl`]
/// and the instances only share whatever signal channel the host gave them.
#[derive(Debug)]
pub struct SortVisualizer {
    signal_sender: Sender<EngineSignal>,
    /// Control block of the current (or most recent) run. Replaced wholesale by
    /// [`Self::start`] so a stop aimed at a finished run can never bleed into the next.
    control: Arc<RunControl>,
    maybe_run_outcome_rx: Option<oneshot::Receiver<RunOutcome>>,
}

impl SortVisualizer {
    /// The host keeps the receiving end of `signal_sender`'s channel and renders every
    /// [`EngineSignal`] it yields.
    #[must_use]
    pub fn new(signal_sender: Sender<EngineSignal>) -> Self {
        Self {
            signal_sender,
            control: Arc::new(RunControl::default()),
            maybe_run_outcome_rx: None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool { self.control.is_running() }

    #[must_use]
    pub fn is_paused(&self) -> bool { self.control.is_paused() }

    /// Starts a run: rejected (returns `false`, nothing happens) while a previous run
    /// is still active. Otherwise resets stats, captures the start timestamp, clones
    /// `array` into a working copy owned by the run task, and dispatches the selected
    /// algorithm. On normal completion the host receives [`EngineSignal::RunCompleted`];
    /// after a stop it receives [`EngineSignal::RunStopped`].
    ///
    /// A stopped run unwinds within one suspension point but not synchronously; hosts
    /// that start back-to-back runs on one channel should [`Self::await_run`] first so
    /// the previous run's closing signal cannot interleave with the new run's frames.
    pub fn start(&mut self, algorithm: AlgorithmId, array: &[u32], speed: u32) -> bool {
        if self.control.is_running() {
            tracing::debug!(message = "start rejected, a run is already active");
            return false;
        }

        let control = Arc::new(RunControl::new_started());
        self.control = control.clone();

        let (outcome_sender, outcome_receiver) = oneshot::channel::<RunOutcome>();
        self.maybe_run_outcome_rx = Some(outcome_receiver);

        let signal_sender = self.signal_sender.clone();
        let mut working = array.to_vec();
        let step_delay = step_delay_from_speed(speed);

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "starting sort run",
            algorithm = %algorithm,
            array_len = working.len(),
            step_delay = ?step_delay
        );

        tokio::spawn(async move {
            let mut emitter =
                StepEmitter::new(control.clone(), signal_sender.clone(), step_delay);

            let result = run_algorithm(algorithm, &mut working, &mut emitter).await;

            let outcome = if result.is_ok() && !control.is_stop_requested() {
                // We don't care about the result of this operation.
                signal_sender.send(EngineSignal::RunCompleted).await.ok();
                RunOutcome::Completed
            } else {
                // We don't care about the result of this operation.
                signal_sender.send(EngineSignal::RunStopped).await.ok();
                RunOutcome::Stopped
            };

            control.set_running(false);

            // % is Display, ? is Debug.
            tracing::debug!(
                message = "sort run finished",
                outcome = ?outcome,
                stats = ?emitter.stats_snapshot()
            );

            // We don't care about the result of this operation.
            outcome_sender.send(outcome).ok();
        });

        true
    }

    /// Blocks the run at its next emitter call; no in-flight comparison/swap state is
    /// lost. No-op when nothing is running.
    pub fn pause(&self) {
        if self.control.is_running() {
            self.control.set_paused(true);
        }
    }

    /// No-op when nothing is running.
    pub fn resume(&self) {
        if self.control.is_running() {
            self.control.set_paused(false);
        }
    }

    pub fn toggle_pause(&self) {
        if self.control.is_running() {
            self.control.set_paused(!self.control.is_paused());
        }
    }

    /// Safe to call at any point, including immediately after [`Self::start`]. The run
    /// observes the request within one suspension point and unwinds; the host receives
    /// [`EngineSignal::RunStopped`], whose contract is a full visual reset (sorted
    /// marks included - unlike completion, which keeps them). No-op when nothing is
    /// running.
    pub fn stop(&self) {
        if !self.control.is_running() {
            return;
        }
        tracing::debug!(message = "stop requested");
        self.control.request_stop();
    }

    /// Resolves once the current run's task has fully unwound. `None` when no run was
    /// started since the last call.
    pub async fn await_run(&mut self) -> Option<RunOutcome> {
        match self.maybe_run_outcome_rx.take() {
            Some(receiver) => receiver.await.ok(),
            None => None,
        }
    }

    /// A fresh random array, refused while a (not-stopped) run still owns the display.
    ///
    /// # Errors
    ///
    /// Returns [`CommonErrorType::InvalidState`] when a run is active.
    pub fn try_generate(&self, size: usize) -> CommonResult<Vec<u32>> {
        if self.control.is_running() && !self.control.is_stop_requested() {
            return CommonError::new_error_result(
                CommonErrorType::InvalidState,
                "cannot generate a new array while a sort run is active",
            );
        }
        ok!(generate_random_array(size))
    }
}

/// Dispatch table from [`AlgorithmId`] to the algorithm bodies. Merge sort composes
/// owned sub-vectors, so the working array is moved through it and replaced.
async fn run_algorithm(
    algorithm: AlgorithmId,
    arr: &mut Vec<u32>,
    emitter: &mut StepEmitter,
) -> StepResult<()> {
    match algorithm {
        AlgorithmId::Bubble => bubble_sort(arr, emitter).await,
        AlgorithmId::Selection => selection_sort(arr, emitter).await,
        AlgorithmId::Insertion => insertion_sort(arr, emitter).await,
        AlgorithmId::Merge => {
            let sorted = merge_sort(std::mem::take(arr), 0, emitter).await?;
            *arr = sorted;
            ok!()
        }
        AlgorithmId::Quick => {
            let high = arr.len().saturating_sub(1);
            quick_sort(arr, 0, high, emitter).await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use tokio::sync::mpsc::channel;

    use super::*;
    use crate::{test_fixtures::drain_signals, CHANNEL_WIDTH};

    /// High enough that the per-step delay collapses to zero.
    const FAST: u32 = 10_000;
    /// 20 ms per step: slow enough to poke a run mid-flight from a test.
    const SLOW: u32 = 50;

    fn fixture() -> (SortVisualizer, tokio::sync::mpsc::Receiver<EngineSignal>) {
        let (sender, receiver) = channel(CHANNEL_WIDTH);
        (SortVisualizer::new(sender), receiver)
    }

    #[test_case(AlgorithmId::Bubble; "bubble")]
    #[test_case(AlgorithmId::Selection; "selection")]
    #[test_case(AlgorithmId::Insertion; "insertion")]
    #[test_case(AlgorithmId::Merge; "merge")]
    #[test_case(AlgorithmId::Quick; "quick")]
    #[tokio::test]
    async fn test_completes_with_sorted_permutation(algorithm: AlgorithmId) {
        let (mut visualizer, mut receiver) = fixture();
        let input = vec![42, 9, 77, 5, 100, 13, 5, 61];

        assert!(visualizer.start(algorithm, &input, FAST));
        assert_eq!(visualizer.await_run().await, Some(RunOutcome::Completed));
        assert!(!visualizer.is_running());

        let mut expected = input.clone();
        expected.sort_unstable();

        let capture = drain_signals(&mut receiver);
        assert_eq!(capture.frames.last().unwrap().array, expected);
        assert_eq!(capture.raw.last().unwrap(), &EngineSignal::RunCompleted);

        // Stats readouts only ever grow.
        for pair in capture.stats.windows(2) {
            assert!(pair[1].comparisons >= pair[0].comparisons);
            assert!(pair[1].swaps >= pair[0].swaps);
        }
    }

    #[tokio::test]
    async fn test_start_rejected_while_running_and_allowed_after() {
        let (mut visualizer, _receiver) = fixture();
        let input = vec![8, 3, 9, 1, 5, 2, 7, 4];

        assert!(visualizer.start(AlgorithmId::Bubble, &input, SLOW));
        assert!(!visualizer.start(AlgorithmId::Quick, &input, SLOW));

        visualizer.stop();
        assert_eq!(visualizer.await_run().await, Some(RunOutcome::Stopped));

        assert!(visualizer.start(AlgorithmId::Quick, &input, FAST));
        assert_eq!(visualizer.await_run().await, Some(RunOutcome::Completed));
    }

    #[tokio::test]
    async fn test_stop_immediately_after_start() {
        let (mut visualizer, mut receiver) = fixture();

        assert!(visualizer.start(AlgorithmId::Merge, &[6, 2, 9, 4], SLOW));
        visualizer.stop();

        assert_eq!(visualizer.await_run().await, Some(RunOutcome::Stopped));
        let capture = drain_signals(&mut receiver);
        assert_eq!(capture.raw.last().unwrap(), &EngineSignal::RunStopped);
    }

    #[tokio::test]
    async fn test_stop_mid_run_silences_stats_after_run_stopped() {
        let (mut visualizer, mut receiver) = fixture();
        let input = vec![8, 3, 9, 1, 5, 2, 7, 4];

        assert!(visualizer.start(AlgorithmId::Bubble, &input, SLOW));
        tokio::time::sleep(Duration::from_millis(80)).await;
        visualizer.stop();
        assert_eq!(visualizer.await_run().await, Some(RunOutcome::Stopped));

        // The task has fully unwound; the closing signal must be the last word.
        let capture = drain_signals(&mut receiver);
        assert_eq!(capture.raw.last().unwrap(), &EngineSignal::RunStopped);
        assert!(!visualizer.is_running());
    }

    #[tokio::test]
    async fn test_pause_resume_is_a_no_op_on_final_results() {
        let input = vec![8, 3, 9, 1, 5, 2, 7, 4];

        // Baseline: unpaused run, flat out.
        let (mut baseline, mut baseline_receiver) = fixture();
        assert!(baseline.start(AlgorithmId::Insertion, &input, FAST));
        assert_eq!(baseline.await_run().await, Some(RunOutcome::Completed));
        let baseline_capture = drain_signals(&mut baseline_receiver);
        let baseline_stats = *baseline_capture.stats.last().unwrap();

        // Paused run: same input, interrupted mid-flight.
        let (mut visualizer, mut receiver) = fixture();
        assert!(visualizer.start(AlgorithmId::Insertion, &input, SLOW));
        tokio::time::sleep(Duration::from_millis(60)).await;

        visualizer.pause();
        assert!(visualizer.is_paused());
        // Let in-flight steps settle, then verify the stream has gone quiet.
        tokio::time::sleep(Duration::from_millis(300)).await;
        drain_signals(&mut receiver);
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(drain_signals(&mut receiver).raw.is_empty());

        visualizer.resume();
        assert_eq!(visualizer.await_run().await, Some(RunOutcome::Completed));

        let capture = drain_signals(&mut receiver);
        let final_stats = *capture.stats.last().unwrap();
        assert_eq!(capture.frames.last().unwrap().array, vec![1, 2, 3, 4, 5, 7, 8, 9]);
        assert_eq!(
            (final_stats.comparisons, final_stats.swaps),
            (baseline_stats.comparisons, baseline_stats.swaps)
        );
    }

    #[tokio::test]
    async fn test_pause_and_resume_are_no_ops_when_idle() {
        let (visualizer, _receiver) = fixture();

        visualizer.pause();
        assert!(!visualizer.is_paused());
        visualizer.toggle_pause();
        assert!(!visualizer.is_paused());
        visualizer.stop();
        assert!(!visualizer.is_running());
    }

    #[tokio::test]
    async fn test_try_generate_refused_while_running() {
        let (mut visualizer, _receiver) = fixture();

        assert!(visualizer.start(AlgorithmId::Selection, &[9, 8, 7, 6, 5], SLOW));
        assert!(visualizer.try_generate(10).is_err());

        visualizer.stop();
        assert_eq!(visualizer.await_run().await, Some(RunOutcome::Stopped));

        let array = visualizer.try_generate(10).unwrap();
        assert_eq!(array.len(), 10);
    }

    #[tokio::test]
    async fn test_await_run_without_start_resolves_none() {
        let (mut visualizer, _receiver) = fixture();
        assert_eq!(visualizer.await_run().await, None);
    }
}
