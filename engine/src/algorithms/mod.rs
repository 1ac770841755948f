// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The five step-generating sort procedures. They share one contract: the working array
//! is mutated in place (merge sort composes owned sub-vectors), every comparison and
//! swap goes through the [`crate::StepEmitter`], and a stop request unwinds the whole
//! call tree via [`crate::Aborted`] without finishing remaining work or double-marking
//! sorted state.

pub mod algorithm_id;
pub mod bubble_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod selection_sort;

pub use algorithm_id::*;
pub use bubble_sort::*;
pub use insertion_sort::*;
pub use merge_sort::*;
pub use quick_sort::*;
pub use selection_sort::*;
