//! Failure classification for error types.
//!
//! This module provides the [`FailureClass`] trait, which places an error type
//! in the [`FailureKind`] hierarchy so that captured failures can be matched by
//! kind later on.
//!
//! # Examples
//!
//! ```
//! use exception_or::{Failure, FailureClass, FailureKind};
//!
//! #[derive(Debug)]
//! enum AgeError {
//!     TooOld,
//!     TooYoung,
//! }
//!
//! impl core::fmt::Display for AgeError {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         match self {
//!             AgeError::TooOld => f.write_str("too old"),
//!             AgeError::TooYoung => f.write_str("too young"),
//!         }
//!     }
//! }
//!
//! impl core::error::Error for AgeError {}
//!
//! impl FailureClass for AgeError {
//!     fn failure_kind(&self) -> FailureKind {
//!         match self {
//!             AgeError::TooOld => FailureKind::NotSupported,
//!             AgeError::TooYoung => FailureKind::Argument,
//!         }
//!     }
//! }
//!
//! let failure = Failure::from_error(AgeError::TooOld);
//! assert_eq!(failure.kind(), FailureKind::NotSupported);
//! assert_eq!(failure.message(), "too old");
//! ```

use core::num::{IntErrorKind, ParseFloatError, ParseIntError, TryFromIntError};
use core::str::Utf8Error;

use crate::types::FailureKind;

/// Places an error type in the [`FailureKind`] hierarchy.
///
/// Implement it for the error types your targets raise. Any type that also
/// implements `Error + Send + Sync + 'static` then converts into a
/// [`Failure`](crate::Failure) automatically.
pub trait FailureClass {
    /// Returns the kind this error is captured as.
    ///
    /// Defaults to [`FailureKind::Generic`].
    #[inline]
    fn failure_kind(&self) -> FailureKind {
        FailureKind::Generic
    }
}

impl FailureClass for ParseIntError {
    fn failure_kind(&self) -> FailureKind {
        match self.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FailureKind::Overflow,
            _ => FailureKind::Format,
        }
    }
}

impl FailureClass for ParseFloatError {
    #[inline]
    fn failure_kind(&self) -> FailureKind {
        FailureKind::Format
    }
}

impl FailureClass for Utf8Error {
    #[inline]
    fn failure_kind(&self) -> FailureKind {
        FailureKind::Format
    }
}

impl FailureClass for core::fmt::Error {
    #[inline]
    fn failure_kind(&self) -> FailureKind {
        FailureKind::Format
    }
}

impl FailureClass for TryFromIntError {
    #[inline]
    fn failure_kind(&self) -> FailureKind {
        FailureKind::Overflow
    }
}

/// Classification for standard I/O errors.
#[cfg(feature = "std")]
impl FailureClass for std::io::Error {
    fn failure_kind(&self) -> FailureKind {
        use std::io::ErrorKind;
        match self.kind() {
            ErrorKind::InvalidInput => FailureKind::Argument,
            ErrorKind::Unsupported => FailureKind::NotSupported,
            _ => FailureKind::Io,
        }
    }
}
