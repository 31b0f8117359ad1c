//! Macros for declaring safe interfaces and building failures.
//!
//! - [`macro@crate::safe_interface`] - Re-exposes a capability trait on
//!   [`Wrapper`](crate::Wrapper) with every method returning
//!   [`ExceptionOr`](crate::ExceptionOr).
//! - [`macro@crate::fail`] - Builds a [`Failure`](crate::Failure) of a given kind
//!   from a format string.
//! - [`macro@crate::impl_failure_class`] - Gives an error type a fixed
//!   [`FailureKind`](crate::FailureKind).
//!
//! # Examples
//!
//! ```
//! use exception_or::{fail, safe_interface, Failure, FailureKind, Safe};
//!
//! trait Inventory {
//!     fn take(&self, count: u32) -> Result<u32, Failure>;
//! }
//!
//! safe_interface! {
//!     trait SafeInventory: Inventory {
//!         fn take(&self, count: u32) -> u32;
//!     }
//! }
//!
//! struct Shelf(u32);
//!
//! impl Inventory for Shelf {
//!     fn take(&self, count: u32) -> Result<u32, Failure> {
//!         if count > self.0 {
//!             return Err(fail!(ArgumentOutOfRange, "only {} left", self.0));
//!         }
//!         Ok(self.0 - count)
//!     }
//! }
//!
//! let shelf = Shelf(3);
//! let safe = Safe::wrapper(&shelf);
//! assert_eq!(safe.take(2).into_value(), Ok(1));
//! assert!(safe.take(5).has_failed_with(&[FailureKind::Argument]));
//! ```

/// Declares the `ExceptionOr`-returning view of a capability trait.
///
/// Given a trait `Cap` whose methods take `&self`, the macro declares a new
/// trait with the same methods returning `ExceptionOr<R>` (`ExceptionOr<()>`
/// when no return type is written) and implements it for every
/// [`Wrapper`](crate::Wrapper) whose target implements `Cap`, trait objects
/// included.
///
/// By default a method of `Cap` returns `Result<R, E>` with `E: IntoFailure`.
/// A method that returns a plain `R` is declared with a trailing `= value`;
/// its only failure channel is a panic, captured as
/// [`FailureKind::Panic`](crate::FailureKind::Panic) under the `std` feature.
///
/// # Syntax
///
/// ```text
/// safe_interface! {
///     pub trait SafeCap: Cap {
///         fn method(&self, arg: Type) -> Return;
///         fn unit_method(&self);
///         fn plain_method(&self) -> Return = value;
///     }
/// }
/// ```
///
/// ```
/// use exception_or::{safe_interface, FailureKind, Safe};
///
/// trait Named {
///     fn name(&self) -> String;
///     fn initial(&self) -> char;
/// }
///
/// safe_interface! {
///     trait SafeNamed: Named {
///         fn name(&self) -> String = value;
///         fn initial(&self) -> char = value;
///     }
/// }
///
/// struct Nobody;
///
/// impl Named for Nobody {
///     fn name(&self) -> String {
///         String::new()
///     }
///
///     fn initial(&self) -> char {
///         self.name().chars().next().expect("name is empty")
///     }
/// }
///
/// let safe = Safe::wrapper(&Nobody);
/// assert_eq!(safe.name().into_value(), Ok(String::new()));
/// assert!(safe.initial().has_failed_with(&[FailureKind::Panic]));
/// ```
///
/// Only the declared methods exist on the proxy; calling anything else is
/// rejected at compile time.
///
/// ```compile_fail
/// use exception_or::{safe_interface, Failure, Safe};
///
/// trait Counter {
///     fn count(&self) -> Result<u32, Failure>;
///     fn reset(&self) -> Result<(), Failure>;
/// }
///
/// safe_interface! {
///     trait SafeCounter: Counter {
///         fn count(&self) -> u32;
///     }
/// }
///
/// struct Zero;
///
/// impl Counter for Zero {
///     fn count(&self) -> Result<u32, Failure> { Ok(0) }
///     fn reset(&self) -> Result<(), Failure> { Ok(()) }
/// }
///
/// let zero = Zero;
/// let _ = Safe::wrapper(&zero).reset();
/// ```
#[macro_export]
macro_rules! safe_interface {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident : $cap:path {
            $(
                $(#[$method_meta:meta])*
                fn $method:ident(&self $(, $arg:ident : $arg_ty:ty)*) $(-> $ret:ty)? $(= $mode:ident)?;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis trait $name {
            $(
                $(#[$method_meta])*
                fn $method(&self $(, $arg: $arg_ty)*)
                    -> $crate::ExceptionOr<$crate::__safe_return!($($ret)?)>;
            )*
        }

        impl<'__a, __T> $name for $crate::Wrapper<'__a, __T>
        where
            __T: $cap + ?Sized,
        {
            $(
                #[inline]
                fn $method(&self $(, $arg: $arg_ty)*)
                    -> $crate::ExceptionOr<$crate::__safe_return!($($ret)?)>
                {
                    $crate::__safe_call!(
                        $($mode)?;
                        self,
                        move |target| <__T as $cap>::$method(target $(, $arg)*)
                    )
                }
            )*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __safe_return {
    () => {
        ()
    };
    ($ret:ty) => {
        $ret
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __safe_call {
    (; $wrapper:expr, $call:expr) => {
        $wrapper.invoke($call)
    };
    (value; $wrapper:expr, $call:expr) => {
        $wrapper.invoke_value($call)
    };
}

/// Builds a [`Failure`](crate::Failure) of the named kind with a formatted message.
///
/// ```
/// use exception_or::{fail, FailureKind};
///
/// let age = 70;
/// let failure = fail!(NotSupported, "{age} is already old");
/// assert_eq!(failure.kind(), FailureKind::NotSupported);
/// assert_eq!(failure.message(), "70 is already old");
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($arg:tt)+) => {
        $crate::Failure::new($crate::FailureKind::$kind, $crate::__private::format!($($arg)+))
    };
}

/// Implements [`FailureClass`](crate::traits::FailureClass) with a fixed kind.
///
/// # Examples
///
/// ```
/// use exception_or::{impl_failure_class, traits::IntoFailure, FailureKind};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct MissingName;
///
/// impl fmt::Display for MissingName {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("name is required")
///     }
/// }
///
/// impl std::error::Error for MissingName {}
///
/// impl_failure_class!(MissingName => ArgumentNull);
///
/// let failure = MissingName.into_failure();
/// assert_eq!(failure.kind(), FailureKind::ArgumentNull);
/// assert_eq!(failure.message(), "name is required");
/// ```
#[macro_export]
macro_rules! impl_failure_class {
    ($type:ty => $kind:ident) => {
        impl $crate::traits::FailureClass for $type {
            #[inline]
            fn failure_kind(&self) -> $crate::FailureKind {
                $crate::FailureKind::$kind
            }
        }
    };
}
