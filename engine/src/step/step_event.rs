// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use crate::StatsSnapshot;

/// Inline storage for the handful of indices a single frame can finalize. Most frames
/// finalize zero or one.
pub type SortedIndices = SmallVec<[usize; 4]>;

/// One visual frame: the unit passed to the renderer, produced only by
/// [`crate::StepEmitter`].
///
/// Renderer contract:
/// - [`Self::array`] replaces the displayed array wholesale (never a patch). During
///   merge sort this is the concatenated sub-array under merge, with
///   [`Self::compare_indices`] still expressed at original-array level, so a highlight
///   index can exceed the snapshot length; renderers ignore out-of-range highlights.
/// - [`Self::compare_indices`] replaces the active highlight pair; `None` clears it.
/// - [`Self::sorted_indices`] are additive and non-reversible for the run.
/// - [`Self::pivot_index`]: `Some` replaces the prior pivot mark; `None` leaves it in
///   place. Pivot and highlight marks are cleared only by the run-end signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEvent {
    pub array: Vec<u32>,
    pub compare_indices: Option<(usize, usize)>,
    pub sorted_indices: SortedIndices,
    pub pivot_index: Option<usize>,
}

/// Outbound protocol of the engine: everything the host renderer needs flows through a
/// single mpsc channel of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSignal {
    /// Render one [`StepEvent`].
    Frame(StepEvent),
    /// Update the comparison/swap/elapsed-time readouts.
    StatsUpdate(StatsSnapshot),
    /// The run finished normally: mark the entire array sorted, clear highlight and
    /// pivot marks.
    RunCompleted,
    /// The run was stopped: full visual reset, sorted marks included (distinct from
    /// [`Self::RunCompleted`], which keeps them).
    RunStopped,
}
