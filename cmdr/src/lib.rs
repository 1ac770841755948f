// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal shell for the `sortviz_engine` crate: argument parsing and a plain-text
//! frame sink. All the interesting machinery lives in the engine; this crate only
//! consumes its signal channel.

pub mod cli_arg;
pub mod frame_print;

pub use cli_arg::*;
pub use frame_print::*;
