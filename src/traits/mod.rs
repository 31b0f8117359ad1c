//! Core traits for capturing and classifying failures.
//!
//! - [`FailureClass`]: places an error type in the [`FailureKind`](crate::FailureKind) hierarchy
//! - [`IntoFailure`]: converts raised values into a [`Failure`](crate::Failure)
//! - [`ResultExt`]: moves a plain `Result` into the failure vocabulary
//!
//! # Examples
//!
//! ```
//! use exception_or::traits::{IntoFailure, ResultExt};
//! use exception_or::FailureKind;
//!
//! let failure = String::from("boom").into_failure();
//! assert_eq!(failure.kind(), FailureKind::Generic);
//!
//! let result = u8::try_from(300_i32).into_exception_or();
//! assert!(result.has_failed_with(&[FailureKind::Overflow]));
//! ```

pub mod failure_class;
pub mod into_failure;
pub mod result_ext;

pub use failure_class::FailureClass;
pub use into_failure::IntoFailure;
pub use result_ext::ResultExt;
