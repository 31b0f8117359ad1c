//! Classified record of a captured failure.
//!
//! A [`Failure`] pairs a [`FailureKind`] with a human readable message and the
//! original [`Cause`], which keeps the raised error object (or the combined
//! originals of an aggregate) around for diagnostics and rethrow.
use core::error::Error;
use core::fmt::{self, Debug, Display};

use crate::traits::FailureClass;
use crate::types::alloc_type::{Arc, String, ToString, Vec};
use crate::types::FailureKind;

/// What a [`Failure`] was captured from.
#[derive(Clone)]
pub enum Cause {
    /// Constructed directly from a kind and message.
    Raised,
    /// The original error value raised by the failing call.
    Error(Arc<dyn Error + Send + Sync + 'static>),
    /// A panic caught while a wrapped call was running.
    Panic,
    /// The ordered originals combined by [`MultiException`](crate::MultiException).
    Aggregate(Vec<Failure>),
}

impl Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Raised => f.write_str("Raised"),
            Cause::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Cause::Panic => f.write_str("Panic"),
            Cause::Aggregate(items) => f.debug_tuple("Aggregate").field(items).finish(),
        }
    }
}

impl PartialEq for Cause {
    /// Error causes compare by identity of the shared error object.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cause::Raised, Cause::Raised) | (Cause::Panic, Cause::Panic) => true,
            (Cause::Error(a), Cause::Error(b)) => Arc::ptr_eq(a, b),
            (Cause::Aggregate(a), Cause::Aggregate(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Cause {}

/// A captured failure: kind, message and original cause.
///
/// # Examples
///
/// ```
/// use exception_or::{Failure, FailureKind};
///
/// let failure = Failure::argument("age must be positive");
/// assert_eq!(failure.kind(), FailureKind::Argument);
/// assert!(failure.is(FailureKind::System));
/// assert_eq!(failure.to_string(), "age must be positive");
/// assert_eq!(format!("{failure:#}"), "ArgumentError: age must be positive");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub(crate) kind: FailureKind,
    pub(crate) message: String,
    pub(crate) cause: Cause,
}

impl Failure {
    /// Creates a failure of the given kind with no underlying error object.
    #[inline]
    pub fn new<S: Into<String>>(kind: FailureKind, message: S) -> Self {
        Self { kind, message: message.into(), cause: Cause::Raised }
    }

    /// Captures an error, classifying it through its [`FailureClass`] impl.
    ///
    /// The message is the error's `Display` output and the error itself is kept
    /// as the cause.
    pub fn from_error<E>(error: E) -> Self
    where
        E: FailureClass + Error + Send + Sync + 'static,
    {
        let kind = error.failure_kind();
        Self::with_kind(kind, error)
    }

    /// Captures an error under an explicitly chosen kind.
    ///
    /// Useful for foreign error types that cannot implement [`FailureClass`].
    pub fn with_kind<E>(kind: FailureKind, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { kind, message: error.to_string(), cause: Cause::Error(Arc::new(error)) }
    }

    /// [`FailureKind::Generic`] failure.
    #[inline]
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::new(FailureKind::Generic, message)
    }

    /// [`FailureKind::Argument`] failure.
    #[inline]
    pub fn argument<S: Into<String>>(message: S) -> Self {
        Self::new(FailureKind::Argument, message)
    }

    /// [`FailureKind::NotSupported`] failure.
    #[inline]
    pub fn not_supported<S: Into<String>>(message: S) -> Self {
        Self::new(FailureKind::NotSupported, message)
    }

    /// [`FailureKind::InvalidOperation`] failure.
    #[inline]
    pub fn invalid_operation<S: Into<String>>(message: S) -> Self {
        Self::new(FailureKind::InvalidOperation, message)
    }

    #[cfg(feature = "std")]
    pub(crate) fn panic<S: Into<String>>(message: S) -> Self {
        Self { kind: FailureKind::Panic, message: message.into(), cause: Cause::Panic }
    }

    pub(crate) fn aggregate(message: String, items: Vec<Failure>) -> Self {
        Self { kind: FailureKind::Aggregate, message, cause: Cause::Aggregate(items) }
    }

    #[inline]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// `true` if this failure's kind is `kind` or derives from it.
    #[inline]
    pub fn is(&self, kind: FailureKind) -> bool {
        self.kind.is_a(kind)
    }

    /// `true` if this failure's kind matches any of `kinds`.
    #[inline]
    pub fn is_any(&self, kinds: &[FailureKind]) -> bool {
        self.kind.matches_any(kinds)
    }

    /// Sub-failures of an aggregate in insertion order; empty otherwise.
    ///
    /// ```
    /// use exception_or::{Failure, MultiException};
    ///
    /// let mut errors = MultiException::new();
    /// errors.add(Failure::argument("too young"));
    /// errors.add(Failure::argument("too small"));
    ///
    /// let combined = errors.signal_if_failed().unwrap_err();
    /// let messages: Vec<_> = combined.inner().iter().map(|f| f.message()).collect();
    /// assert_eq!(messages, ["too young", "too small"]);
    /// ```
    #[inline]
    pub fn inner(&self) -> &[Failure] {
        match &self.cause {
            Cause::Aggregate(items) => items,
            _ => &[],
        }
    }

    /// `true` for failures combined by [`MultiException`](crate::MultiException).
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self.cause, Cause::Aggregate(_))
    }

    /// Borrows the original error as `E`, if that is what was raised.
    ///
    /// ```
    /// use exception_or::Failure;
    ///
    /// let parse = "x".parse::<u8>().unwrap_err();
    /// let failure = Failure::from_error(parse.clone());
    /// assert_eq!(failure.downcast_ref::<core::num::ParseIntError>(), Some(&parse));
    /// ```
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        match &self.cause {
            Cause::Error(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl Display for Failure {
    /// `{}` prints the message; `{:#}` prefixes the kind and lists aggregated items.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.message);
        }

        write!(f, "{}: {}", self.kind, self.message)?;
        for item in self.inner() {
            write!(f, "\n  - {}: {}", item.kind, item.message)?;
        }
        Ok(())
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Cause::Error(err) => Some(err.as_ref() as &(dyn Error + 'static)),
            _ => None,
        }
    }
}
