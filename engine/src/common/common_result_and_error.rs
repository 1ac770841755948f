// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct for the fallible surface of this crate: config validation,
/// generate-while-running rejection, logging bootstrap. Cooperative cancellation of a
/// sort run is *not* an error and does not travel through this type; see
/// [`crate::Aborted`].
#[derive(Debug, Clone)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// Some common errors that can occur.
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy)]
pub enum CommonErrorType {
    #[default]
    General,
    InvalidArguments,
    InvalidState,
    ValueOutOfRange,
}

impl Error for CommonError {}

/// Implement [`Display`] trait (needed by [`Error`] trait). This is the same as the
/// [`Debug`] implementation (which is derived above).
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`] available.
    ///
    /// # Errors
    ///
    /// Always returns an [`Err`] variant wrapping the newly constructed error.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }
}
