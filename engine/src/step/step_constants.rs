// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// Capacity of the outbound [`crate::EngineSignal`] channel.
pub const CHANNEL_WIDTH: usize = 1_000;

/// How often a paused run re-checks the pause and stop flags.
pub const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);
