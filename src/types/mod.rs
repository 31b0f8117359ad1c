//! Result, failure and aggregation types.
//!
//! # Examples
//!
//! ```
//! use exception_or::{ExceptionOr, Failure, FailureKind};
//!
//! let result: ExceptionOr<u8> = "300".parse::<u8>().into();
//! assert!(result.has_failed_with(&[FailureKind::Arithmetic]));
//! assert_eq!(result.get_failure().unwrap().kind(), FailureKind::Overflow);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod exception_or;
pub mod failure;
pub mod failure_kind;
pub mod multi_exception;
pub mod usage_error;

pub use exception_or::*;
pub use failure::*;
pub use failure_kind::*;
pub use multi_exception::*;
pub use usage_error::*;

/// SmallVec-backed storage for accumulated failures.
///
/// Validation passes rarely trip more than a couple of rules, so two items are
/// kept inline before spilling to the heap.
pub type FailureVec = SmallVec<[Failure; 2]>;
