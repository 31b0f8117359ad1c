//! Call anything, get a value back: raised failures become [`ExceptionOr`] results.
//!
//! The crate is made of four pieces:
//!
//! - [`ExceptionOr`] - the result container, holding either the produced value
//!   or a classified [`Failure`]
//! - [`FailureKind`] and [`FailureClass`] - a closed failure hierarchy with
//!   nominal "is-a" matching
//! - [`MultiException`] - collects several validation failures and signals
//!   them as one
//! - [`Safe`] / [`Wrapper`] - the call interceptor that turns every call on a
//!   target into an `ExceptionOr`
//!
//! # Examples
//!
//! ## Wrapping a Target
//!
//! ```
//! use exception_or::{safe_interface, Failure, FailureKind, Safe};
//!
//! trait AgeCalculator {
//!     fn calc(&self, age: i32) -> Result<i32, Failure>;
//! }
//!
//! safe_interface! {
//!     trait SafeAgeCalculator: AgeCalculator {
//!         fn calc(&self, age: i32) -> i32;
//!     }
//! }
//!
//! struct Demo;
//!
//! impl AgeCalculator for Demo {
//!     fn calc(&self, age: i32) -> Result<i32, Failure> {
//!         if age > 60 {
//!             return Err(Failure::not_supported("You are already old"));
//!         }
//!         Ok(age + 40)
//!     }
//! }
//!
//! let demo = Demo;
//! let calc = Safe::wrapper(&demo);
//!
//! assert_eq!(calc.calc(34).into_value(), Ok(74));
//!
//! let old = calc.calc(70);
//! assert!(old.has_failed_with(&[FailureKind::NotSupported, FailureKind::Argument]));
//! ```
//!
//! ## Aggregating Validation Failures
//!
//! ```
//! use exception_or::{Failure, MultiException};
//!
//! let mut errors = MultiException::new();
//! errors.add(Failure::argument("Too young"));
//! errors.add(Failure::argument("0 or negative age not supported"));
//!
//! let combined = errors.signal_if_failed().unwrap_err();
//! assert_eq!(combined.message(), "Too young; 0 or negative age not supported");
//! assert_eq!(combined.inner().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Declarative macros for safe interfaces and failures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Call interception
pub mod safe;
/// Classification and conversion traits
pub mod traits;
/// Result, failure and aggregation types
pub mod types;

pub use safe::{capture, capture_value, IntoWrapper, MethodTable, Safe, Wrapper};
pub use traits::{FailureClass, IntoFailure, ResultExt};
pub use types::{
    Ancestors, Cause, ExceptionOr, Failure, FailureKind, FailureVec, MultiException, ResultState,
    Rethrow, UsageError,
};

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}
