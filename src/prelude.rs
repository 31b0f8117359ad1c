//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use exception_or::prelude::*;
//!
//! let parsed: ExceptionOr<i32> = capture(|| "12".parse::<i32>());
//! assert_eq!(parsed.get_value(), Ok(&12));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`safe_interface!`], [`fail!`]
//! - **Types**: [`ExceptionOr`], [`Failure`], [`FailureKind`], [`MultiException`], [`Safe`], [`Wrapper`]
//! - **Traits**: [`FailureClass`], [`IntoFailure`], [`ResultExt`]
//! - **Functions**: [`capture`]

// Macros
pub use crate::{fail, safe_interface};

// Core types
pub use crate::safe::{capture, Safe, Wrapper};
pub use crate::types::{ExceptionOr, Failure, FailureKind, MultiException};

// Traits
pub use crate::traits::{FailureClass, IntoFailure, ResultExt};

/// Result alias for routines that signal a [`Failure`] directly, such as
/// validation methods finishing with [`MultiException::signal_if_failed`].
pub type FailResult<T> = Result<T, Failure>;
