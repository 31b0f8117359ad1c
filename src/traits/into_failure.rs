//! Conversion of raised values into a [`Failure`].
//!
//! # Implementations
//!
//! - `Failure` - identity conversion
//! - any `E: FailureClass + Error + Send + Sync + 'static` - classified by
//!   [`FailureClass::failure_kind`], the error kept as the cause
//! - `&'static str` and `String` - a [`FailureKind::Generic`] failure
//!
//! # Examples
//!
//! ```
//! use exception_or::{traits::IntoFailure, FailureKind};
//!
//! let failure = "Invalid input, you are crazy!".into_failure();
//! assert_eq!(failure.kind(), FailureKind::Generic);
//!
//! let failure = "x".parse::<i32>().unwrap_err().into_failure();
//! assert_eq!(failure.kind(), FailureKind::Format);
//! ```
use core::error::Error;

use crate::traits::FailureClass;
use crate::types::alloc_type::String;
use crate::types::{Failure, FailureKind};

/// Converts a raised value into a [`Failure`].
///
/// Wrapped methods may return `Result<T, E>` for any `E: IntoFailure`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be captured as a failure",
    label = "this type does not implement `IntoFailure`",
    note = "implement `FailureClass` for error types, or convert with `Failure::with_kind`"
)]
pub trait IntoFailure {
    /// Converts `self` into a [`Failure`].
    fn into_failure(self) -> Failure;
}

impl IntoFailure for Failure {
    /// Identity conversion; the failure is not wrapped a second time.
    #[inline]
    fn into_failure(self) -> Failure {
        self
    }
}

impl<E> IntoFailure for E
where
    E: FailureClass + Error + Send + Sync + 'static,
{
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::from_error(self)
    }
}

impl IntoFailure for &'static str {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(FailureKind::Generic, self)
    }
}

impl IntoFailure for String {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(FailureKind::Generic, self)
    }
}
