// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Extension trait for [`AtomicBool`] with ergonomic methods for common operations. See
//! [`AtomicBoolExt`] for details.
//!
//! [`AtomicBool`]: std::sync::atomic::AtomicBool

use std::sync::atomic::{AtomicBool, Ordering};

/// Ergonomic helpers for [`AtomicBool`] that hide [`SeqCst`] boilerplate.
///
/// All operations use [`SeqCst`] ordering so callers never have to choose. The run
/// control flags these back are read on every suspension point of a sort run, where the
/// cost of the strongest ordering is noise next to the per-step animation delay.
///
/// [`AtomicBool`]: std::sync::atomic::AtomicBool
/// [`SeqCst`]: Ordering::SeqCst
pub trait AtomicBoolExt {
    /// Reads the current value.
    fn get(&self) -> bool;

    /// Writes `value`.
    fn set(&self, value: bool);
}

impl AtomicBoolExt for AtomicBool {
    fn get(&self) -> bool { self.load(Ordering::SeqCst) }

    fn set(&self, value: bool) { self.store(value, Ordering::SeqCst) }
}
