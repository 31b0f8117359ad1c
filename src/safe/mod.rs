//! Call interception: run a call, capture whatever it raises.
//!
//! [`Safe::wrapper`] hands out a [`Wrapper`], a borrowed proxy around a target.
//! Every call made through the proxy runs synchronously and comes back as an
//! [`ExceptionOr`]: the returned value on success, the classified [`Failure`]
//! otherwise. With the `std` feature a panic inside the call is captured too,
//! as a [`FailureKind::Panic`](crate::FailureKind::Panic) failure.
//!
//! Proxies expose the target's operations in three ways:
//!
//! - a capability trait declared with [`safe_interface!`](crate::safe_interface),
//!   which gives the proxy the same method names with `ExceptionOr` returns;
//! - [`Wrapper::invoke`] / [`Wrapper::invoke_value`] with a closure;
//! - [`Wrapper::dispatch`] through a [`MethodTable`] when the method name is
//!   only known at runtime.
//!
//! # Examples
//!
//! ```
//! use exception_or::{Failure, FailureKind, Safe};
//!
//! struct Greeter;
//!
//! impl Greeter {
//!     fn greet(&self, name: &str) -> Result<String, Failure> {
//!         if name.is_empty() {
//!             return Err(Failure::argument("name is empty"));
//!         }
//!         Ok(format!("hello, {name}"))
//!     }
//! }
//!
//! let greeter = Greeter;
//! let safe = Safe::wrapper(&greeter);
//!
//! assert_eq!(safe.invoke(|g| g.greet("ada")).into_value().unwrap(), "hello, ada");
//! assert!(safe.invoke(|g| g.greet("")).has_failed_with(&[FailureKind::Argument]));
//! ```
use core::fmt::{self, Debug};

use crate::traits::IntoFailure;
use crate::types::{ExceptionOr, Failure, UsageError};

mod dispatch;

pub use dispatch::MethodTable;

/// Entry point for wrapping targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Safe;

impl Safe {
    /// Wraps `target` in a proxy whose calls return [`ExceptionOr`].
    ///
    /// `target` is either a reference to the object to wrap or an existing
    /// [`Wrapper`]. Wrapping a wrapper returns that same single-layer proxy, so
    /// failures are never captured twice.
    ///
    /// Pass an existing wrapper by value; `Wrapper` is `Copy`, so this leaves
    /// the original usable. A reference `&wrapper` is just another target and
    /// yields a second proxy layer around the first, which exposes none of the
    /// target's capability methods.
    ///
    /// ```
    /// use exception_or::{Safe, Wrapper};
    ///
    /// let numbers = vec![1, 2, 3];
    /// let once = Safe::wrapper(&numbers);
    /// let twice: Wrapper<'_, Vec<i32>> = Safe::wrapper(once);
    /// assert!(core::ptr::eq(once.target(), twice.target()));
    /// ```
    #[inline]
    pub fn wrapper<'a, W>(target: W) -> Wrapper<'a, W::Target>
    where
        W: IntoWrapper<'a>,
    {
        target.into_wrapper()
    }
}

/// Things [`Safe::wrapper`] accepts.
///
/// Implemented for plain references, which start a new proxy, and for
/// [`Wrapper`] itself, which is returned unchanged.
pub trait IntoWrapper<'a> {
    /// The wrapped object's type.
    type Target: ?Sized + 'a;

    fn into_wrapper(self) -> Wrapper<'a, Self::Target>;
}

impl<'a, T: ?Sized + 'a> IntoWrapper<'a> for &'a T {
    type Target = T;

    #[inline]
    fn into_wrapper(self) -> Wrapper<'a, T> {
        Wrapper::new(self)
    }
}

impl<'a, T: ?Sized + 'a> IntoWrapper<'a> for Wrapper<'a, T> {
    type Target = T;

    #[inline]
    fn into_wrapper(self) -> Wrapper<'a, T> {
        self
    }
}

/// Borrowed proxy around a target; see the [module docs](self).
///
/// The proxy never owns the target and keeps no state between calls.
pub struct Wrapper<'a, T: ?Sized> {
    target: &'a T,
}

impl<'a, T: ?Sized> Wrapper<'a, T> {
    #[inline]
    pub fn new(target: &'a T) -> Self {
        Self { target }
    }

    /// The wrapped object.
    #[inline]
    pub fn target(&self) -> &'a T {
        self.target
    }

    /// Runs a `Result`-returning call on the target and captures its outcome.
    ///
    /// The call is made exactly once, synchronously, with no retry.
    pub fn invoke<R, E, F>(&self, call: F) -> ExceptionOr<R>
    where
        F: FnOnce(&'a T) -> Result<R, E>,
        E: IntoFailure,
    {
        let target = self.target;
        capture(move || call(target))
    }

    /// Runs a call returning a plain value; only a panic can make it fail.
    pub fn invoke_value<R, F>(&self, call: F) -> ExceptionOr<R>
    where
        F: FnOnce(&'a T) -> R,
    {
        let target = self.target;
        capture_value(move || call(target))
    }

    /// Calls the method registered as `name` in `table`.
    ///
    /// # Errors
    ///
    /// [`UsageError::NoSuchMethod`] if `table` has no method called `name`.
    /// Failures raised by the method itself are captured, never returned here.
    #[inline]
    pub fn dispatch<A, R>(
        &self,
        table: &MethodTable<T, A, R>,
        name: &str,
        args: A,
    ) -> Result<ExceptionOr<R>, UsageError> {
        table.call(self.target, name, args)
    }
}

impl<T: ?Sized> Clone for Wrapper<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Wrapper<'_, T> {}

impl<T: ?Sized> Debug for Wrapper<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper").field("target", &core::any::type_name::<T>()).finish()
    }
}

/// Runs `call` and captures its outcome.
///
/// `Ok(v)` becomes [`ExceptionOr::Success`]; `Err(e)` becomes
/// [`ExceptionOr::Failed`] with `e` converted through [`IntoFailure`]. With the
/// `std` feature a panic is captured as well. Nothing escapes to the caller.
///
/// ```
/// use exception_or::capture;
///
/// let mut counter = 0;
/// let result = capture(|| {
///     counter += 1;
///     "7".parse::<i32>()
/// });
/// assert_eq!(result.get_value(), Ok(&7));
/// assert_eq!(counter, 1);
/// ```
pub fn capture<R, E, F>(call: F) -> ExceptionOr<R>
where
    F: FnOnce() -> Result<R, E>,
    E: IntoFailure,
{
    let outcome = match run_guarded(call) {
        Ok(Ok(value)) => ExceptionOr::Success(value),
        Ok(Err(error)) => ExceptionOr::Failed(error.into_failure()),
        Err(panicked) => ExceptionOr::Failed(panicked),
    };

    #[cfg(feature = "tracing")]
    match &outcome {
        ExceptionOr::Success(_) => tracing::trace!("wrapped call succeeded"),
        ExceptionOr::Failed(failure) => {
            tracing::debug!(kind = %failure.kind(), error = %failure, "captured failure");
        }
    }

    outcome
}

/// [`capture`] for calls returning a plain value.
pub fn capture_value<R, F>(call: F) -> ExceptionOr<R>
where
    F: FnOnce() -> R,
{
    capture(move || Ok::<R, Failure>(call()))
}

#[cfg(feature = "std")]
fn run_guarded<T, F>(call: F) -> Result<T, Failure>
where
    F: FnOnce() -> T,
{
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(call)).map_err(|payload| {
        let failure = Failure::panic(panic_message(&*payload));
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %failure, "captured panic");
        failure
    })
}

#[cfg(not(feature = "std"))]
#[inline]
fn run_guarded<T, F>(call: F) -> Result<T, Failure>
where
    F: FnOnce() -> T,
{
    Ok(call())
}

#[cfg(feature = "std")]
fn panic_message(payload: &(dyn core::any::Any + Send)) -> crate::types::alloc_type::String {
    use crate::types::alloc_type::ToString;

    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<crate::types::alloc_type::String>() {
        message.clone()
    } else {
        "wrapped call panicked".to_string()
    }
}
