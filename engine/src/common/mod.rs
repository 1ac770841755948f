// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub mod common_atomic;
pub mod common_result_and_error;
pub mod decl_macros;
pub mod log_support;

pub use common_atomic::*;
pub use common_result_and_error::*;
