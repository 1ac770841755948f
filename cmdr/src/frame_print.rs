// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain-text sink for the engine's signal stream. This is the "renderer" side of the
//! [`StepEvent`] contract: the array is replaced wholesale per frame, the compare
//! highlight is replaced (or cleared) per frame, sorted marks accumulate for the whole
//! run, and the pivot mark persists until a frame replaces it or the run ends.

use std::{collections::HashSet, fmt::Write as _};

use sortviz_engine::{EngineSignal, StatsSnapshot, StepEvent};

/// Accumulated display state for one run, fed one [`EngineSignal`] at a time.
#[derive(Debug, Default)]
pub struct FramePrinter {
    array: Vec<u32>,
    compare_indices: Option<(usize, usize)>,
    sorted: HashSet<usize>,
    pivot: Option<usize>,
    last_stats: Option<StatsSnapshot>,
}

impl FramePrinter {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn last_stats(&self) -> Option<StatsSnapshot> { self.last_stats }

    /// Applies one signal and returns the line to print, if the signal produces one.
    pub fn apply(&mut self, signal: &EngineSignal) -> Option<String> {
        match signal {
            EngineSignal::Frame(step) => {
                self.apply_frame(step);
                Some(self.render_strip())
            }
            EngineSignal::StatsUpdate(snapshot) => {
                self.last_stats = Some(*snapshot);
                None
            }
            EngineSignal::RunCompleted => {
                // Completion keeps the sorted marks and finalizes the rest.
                self.sorted.extend(0..self.array.len());
                self.compare_indices = None;
                self.pivot = None;
                Some(format!("{} <- complete", self.render_strip()))
            }
            EngineSignal::RunStopped => {
                // A stop is a full visual reset, sorted marks included.
                self.sorted.clear();
                self.compare_indices = None;
                self.pivot = None;
                Some(format!("{} <- stopped", self.render_strip()))
            }
        }
    }

    fn apply_frame(&mut self, step: &StepEvent) {
        self.array = step.array.clone();
        self.compare_indices = step.compare_indices;
        self.sorted.extend(step.sorted_indices.iter().copied());
        if step.pivot_index.is_some() {
            self.pivot = step.pivot_index;
        }
    }

    /// One line per frame: compare pair in `[..]`, pivot in `(..)`, finalized bars
    /// suffixed with `*`. Out-of-range highlight indices (merge sort's sub-array
    /// frames) simply don't land on any cell.
    fn render_strip(&self) -> String {
        let mut acc = String::with_capacity(self.array.len() * 6);
        for (index, value) in self.array.iter().enumerate() {
            let in_compare = self
                .compare_indices
                .is_some_and(|(a, b)| index == a || index == b);
            let cell = if in_compare {
                format!("[{value}]")
            } else if self.pivot == Some(index) {
                format!("({value})")
            } else if self.sorted.contains(&index) {
                format!("{value}*")
            } else {
                value.to_string()
            };
            // We don't care about the result of this operation.
            _ = write!(acc, "{cell:>6}");
        }
        acc
    }
}
