//! Extension trait for moving between `Result` and [`ExceptionOr`].
//!
//! # Examples
//!
//! ```
//! use exception_or::{traits::ResultExt, FailureKind};
//!
//! let parsed = "abc".parse::<i32>().fail_as(FailureKind::Argument);
//! assert_eq!(parsed.unwrap_err().kind(), FailureKind::Argument);
//!
//! let captured = "42".parse::<i32>().into_exception_or();
//! assert_eq!(captured.get_value(), Ok(&42));
//! ```

use core::error::Error;

use crate::traits::IntoFailure;
use crate::types::{ExceptionOr, Failure, FailureKind};

/// Extension methods on `Result` for capturing its error side.
pub trait ResultExt<T, E> {
    /// Captures the error under an explicit kind, keeping it as the cause.
    ///
    /// Handy for foreign error types that have no [`FailureClass`](crate::FailureClass)
    /// impl, or whose default class is wrong for the call site.
    ///
    /// # Errors
    ///
    /// The captured [`Failure`] when `self` is `Err`.
    fn fail_as(self, kind: FailureKind) -> Result<T, Failure>
    where
        E: Error + Send + Sync + 'static;

    /// Converts into an [`ExceptionOr`], capturing the error.
    fn into_exception_or(self) -> ExceptionOr<T>
    where
        E: IntoFailure;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn fail_as(self, kind: FailureKind) -> Result<T, Failure>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(|e| Failure::with_kind(kind, e))
    }

    #[inline]
    fn into_exception_or(self) -> ExceptionOr<T>
    where
        E: IntoFailure,
    {
        ExceptionOr::from(self)
    }
}
