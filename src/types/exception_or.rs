use crate::traits::IntoFailure;
use crate::types::{Failure, FailureKind, ResultState, UsageError};

/// Either the value a call produced or the failure it raised.
///
/// `ExceptionOr<T>` is what every intercepted call returns. Exactly one of the
/// two variants is ever present, and a result never changes after it is built.
///
/// # Examples
///
/// ```
/// use exception_or::{ExceptionOr, Failure, FailureKind};
///
/// let ok = ExceptionOr::success(74);
/// assert!(!ok.has_failed());
/// assert_eq!(ok.get_value(), Ok(&74));
///
/// let failed = ExceptionOr::<i32>::failed(Failure::not_supported("already old"));
/// assert!(failed.has_failed_with(&[FailureKind::NotSupported, FailureKind::Argument]));
/// assert!(failed.get_value().is_err());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExceptionOr<T> {
    Success(T),
    Failed(Failure),
}

impl<T> ExceptionOr<T> {
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Builds a failed result from anything convertible into a [`Failure`].
    #[inline]
    pub fn failed<F: IntoFailure>(failure: F) -> Self {
        Self::Failed(failure.into_failure())
    }

    /// `true` iff this result holds a failure.
    #[must_use]
    #[inline]
    pub fn has_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    #[must_use]
    #[inline]
    pub fn has_succeeded(&self) -> bool {
        !self.has_failed()
    }

    /// `true` iff this result failed with a kind that is-a member of `kinds`.
    ///
    /// Lets callers tell expected failure classes apart from unexpected ones.
    ///
    /// ```
    /// use exception_or::{ExceptionOr, Failure, FailureKind};
    ///
    /// let r = ExceptionOr::<()>::failed(Failure::new(FailureKind::ArgumentNull, "missing name"));
    /// assert!(r.has_failed_with(&[FailureKind::Argument]));
    /// assert!(!r.has_failed_with(&[FailureKind::NotSupported]));
    /// ```
    #[must_use]
    #[inline]
    pub fn has_failed_with(&self, kinds: &[FailureKind]) -> bool {
        match self {
            Self::Success(_) => false,
            Self::Failed(failure) => failure.is_any(kinds),
        }
    }

    #[inline]
    pub fn state(&self) -> ResultState {
        match self {
            Self::Success(_) => ResultState::Succeeded,
            Self::Failed(_) => ResultState::Failed,
        }
    }

    /// Borrows the success value.
    ///
    /// # Errors
    ///
    /// [`UsageError::InvalidState`] if the result failed.
    #[inline]
    pub fn get_value(&self) -> Result<&T, UsageError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(_) => Err(UsageError::invalid_state("get_value", ResultState::Failed)),
        }
    }

    /// Takes the success value.
    ///
    /// # Errors
    ///
    /// [`UsageError::InvalidState`] if the result failed.
    #[inline]
    pub fn into_value(self) -> Result<T, UsageError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(_) => Err(UsageError::invalid_state("into_value", ResultState::Failed)),
        }
    }

    /// Borrows the captured failure.
    ///
    /// # Errors
    ///
    /// [`UsageError::InvalidState`] if the result succeeded.
    #[inline]
    pub fn get_failure(&self) -> Result<&Failure, UsageError> {
        match self {
            Self::Success(_) => {
                Err(UsageError::invalid_state("get_failure", ResultState::Succeeded))
            }
            Self::Failed(failure) => Ok(failure),
        }
    }

    /// Takes the captured failure.
    ///
    /// # Errors
    ///
    /// [`UsageError::InvalidState`] if the result succeeded.
    #[inline]
    pub fn into_failure(self) -> Result<Failure, UsageError> {
        match self {
            Self::Success(_) => {
                Err(UsageError::invalid_state("into_failure", ResultState::Succeeded))
            }
            Self::Failed(failure) => Ok(failure),
        }
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    #[inline]
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// Starts a selective rethrow. See [`Rethrow::when`].
    #[inline]
    pub fn rethrow(self) -> Rethrow<T> {
        Rethrow { result: self }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> ExceptionOr<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ExceptionOr::Success(f(value)),
            Self::Failed(failure) => ExceptionOr::Failed(failure),
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> ExceptionOr<U>
    where
        F: FnOnce(T) -> ExceptionOr<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failed(failure) => ExceptionOr::Failed(failure),
        }
    }

    /// Calls `op` with the failure, if any, to recover.
    #[inline]
    pub fn or_else<F>(self, op: F) -> ExceptionOr<T>
    where
        F: FnOnce(Failure) -> ExceptionOr<T>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failed(failure) => op(failure),
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        self.into()
    }
}

impl<T, E: IntoFailure> From<Result<T, E>> for ExceptionOr<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failed(error.into_failure()),
        }
    }
}

impl<T> From<ExceptionOr<T>> for Result<T, Failure> {
    #[inline]
    fn from(result: ExceptionOr<T>) -> Self {
        match result {
            ExceptionOr::Success(value) => Ok(value),
            ExceptionOr::Failed(failure) => Err(failure),
        }
    }
}

/// Pending selective rethrow, created by [`ExceptionOr::rethrow`].
#[must_use = "a rethrow does nothing until `when` or `when_kind` is called"]
#[derive(Debug)]
pub struct Rethrow<T> {
    result: ExceptionOr<T>,
}

impl<T> Rethrow<T> {
    /// Re-signals the failure if its kind is-a member of `kinds`.
    ///
    /// Returns `Err` with the original failure (cause intact) so `?` propagates
    /// it; any other outcome is handed back unchanged. An aggregate failure only
    /// matches [`FailureKind::Aggregate`] or its ancestors, never the kinds of
    /// its inner items.
    ///
    /// # Errors
    ///
    /// The captured [`Failure`] when it matches `kinds`.
    ///
    /// ```
    /// use exception_or::{ExceptionOr, Failure, FailureKind};
    ///
    /// fn old_age(result: ExceptionOr<i32>) -> Result<bool, Failure> {
    ///     let result = result.rethrow().when(&[FailureKind::Overflow, FailureKind::NotSupported])?;
    ///     Ok(result.has_failed())
    /// }
    ///
    /// assert!(old_age(ExceptionOr::failed(Failure::not_supported("too old"))).is_err());
    /// assert_eq!(old_age(ExceptionOr::failed(Failure::argument("too young"))), Ok(true));
    /// assert_eq!(old_age(ExceptionOr::success(74)), Ok(false));
    /// ```
    pub fn when(self, kinds: &[FailureKind]) -> Result<ExceptionOr<T>, Failure> {
        match self.result {
            ExceptionOr::Failed(failure) if failure.is_any(kinds) => Err(failure),
            other => Ok(other),
        }
    }

    /// Single-kind form of [`Rethrow::when`].
    ///
    /// # Errors
    ///
    /// The captured [`Failure`] when it is-a `kind`.
    #[inline]
    pub fn when_kind(self, kind: FailureKind) -> Result<ExceptionOr<T>, Failure> {
        self.when(&[kind])
    }
}
