use core::error::Error;
use core::fmt::{self, Display};

use crate::types::alloc_type::String;

/// Misuse of this crate's own API.
///
/// Usage errors are returned directly to the caller instead of being captured
/// into an [`ExceptionOr`](crate::ExceptionOr): they describe a bug at the call
/// site, not a failure of the wrapped business logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// An accessor was called on the wrong variant of a result.
    InvalidState {
        /// The misused accessor, e.g. `"get_value"`.
        operation: &'static str,
        /// The state the result was actually in.
        state: ResultState,
    },
    /// A named dispatch targeted a method that was never registered.
    NoSuchMethod { method: String },
}

/// Which variant an [`ExceptionOr`](crate::ExceptionOr) holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultState {
    Succeeded,
    Failed,
}

impl UsageError {
    #[inline]
    pub(crate) fn invalid_state(operation: &'static str, state: ResultState) -> Self {
        Self::InvalidState { operation, state }
    }
}

impl Display for ResultState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultState::Succeeded => f.write_str("succeeded"),
            ResultState::Failed => f.write_str("failed"),
        }
    }
}

impl Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::InvalidState { operation, state } => {
                write!(f, "{operation} called on a {state} result")
            }
            UsageError::NoSuchMethod { method } => {
                write!(f, "no method named `{method}` is exposed by the wrapped target")
            }
        }
    }
}

impl Error for UsageError {}
