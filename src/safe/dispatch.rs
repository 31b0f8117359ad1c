use core::fmt::{self, Debug};

use crate::safe::capture;
use crate::traits::IntoFailure;
use crate::types::alloc_type::{Box, Vec};
use crate::types::{ExceptionOr, Failure, UsageError};

type Method<T, A, R> = Box<dyn Fn(&T, A) -> Result<R, Failure>>;

/// Methods of `T` addressable by name, all taking `A` and returning `R`.
///
/// A table is the declared surface of a target for call sites that only learn
/// the method name at runtime. Calling a name the table does not declare is a
/// [`UsageError::NoSuchMethod`], returned directly; failures raised by a
/// declared method are captured like any other wrapped call.
///
/// # Examples
///
/// ```
/// use exception_or::{Failure, MethodTable, Safe, UsageError};
///
/// struct Thermostat;
///
/// impl Thermostat {
///     fn set(&self, celsius: i32) -> Result<i32, Failure> {
///         if celsius > 30 {
///             return Err(Failure::argument("too hot"));
///         }
///         Ok(celsius)
///     }
/// }
///
/// let table: MethodTable<Thermostat, i32, i32> =
///     MethodTable::new().register("set", Thermostat::set);
/// let safe = Safe::wrapper(&Thermostat);
///
/// assert_eq!(safe.dispatch(&table, "set", 21).unwrap().into_value(), Ok(21));
/// assert!(safe.dispatch(&table, "set", 40).unwrap().has_failed());
/// assert!(matches!(
///     safe.dispatch(&table, "reset", 0),
///     Err(UsageError::NoSuchMethod { .. })
/// ));
/// ```
pub struct MethodTable<T: ?Sized, A, R> {
    methods: Vec<(&'static str, Method<T, A, R>)>,
}

impl<T: ?Sized, A, R> MethodTable<T, A, R> {
    #[inline]
    pub fn new() -> Self {
        Self { methods: Vec::new() }
    }

    /// Declares `method` under `name`, replacing any earlier method of that name.
    pub fn register<E, F>(mut self, name: &'static str, method: F) -> Self
    where
        F: Fn(&T, A) -> Result<R, E> + 'static,
        E: IntoFailure,
    {
        let boxed: Method<T, A, R> = Box::new(move |target: &T, args: A| {
            method(target, args).map_err(IntoFailure::into_failure)
        });

        match self.methods.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = boxed,
            None => self.methods.push((name, boxed)),
        }
        self
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.methods.iter().any(|(existing, _)| *existing == name)
    }

    /// Declared method names in registration order.
    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.iter().map(|(name, _)| *name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Calls `name` on `target` and captures the outcome.
    ///
    /// # Errors
    ///
    /// [`UsageError::NoSuchMethod`] if `name` was never registered.
    pub fn call(&self, target: &T, name: &str, args: A) -> Result<ExceptionOr<R>, UsageError> {
        let Some((_, method)) = self.methods.iter().find(|(existing, _)| *existing == name) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(method = name, "dispatch to undeclared method");
            return Err(UsageError::NoSuchMethod { method: name.into() });
        };

        Ok(capture(move || method(target, args)))
    }
}

impl<T: ?Sized, A, R> Default for MethodTable<T, A, R> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, A, R> Debug for MethodTable<T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        f.debug_struct("MethodTable").field("methods", &names).finish()
    }
}
