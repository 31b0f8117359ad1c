//! Closed hierarchy of failure kinds.
//!
//! Every captured failure carries a [`FailureKind`]. Kinds form a tree rooted at
//! [`FailureKind::Generic`]; matching is nominal, so asking for a base kind also
//! matches every kind derived from it.
//!
//! ```text
//! GenericError
//! ├── SystemError
//! │   ├── ArgumentError
//! │   │   ├── ArgumentNullError
//! │   │   └── ArgumentOutOfRangeError
//! │   ├── NotSupportedError
//! │   ├── InvalidOperationError
//! │   ├── ArithmeticError
//! │   │   ├── OverflowError
//! │   │   └── DivideByZeroError
//! │   ├── FormatError
//! │   └── IoError
//! ├── AggregateError
//! └── PanicError
//! ```
//!
//! # Examples
//!
//! ```
//! use exception_or::FailureKind;
//!
//! assert!(FailureKind::ArgumentNull.is_a(FailureKind::Argument));
//! assert!(FailureKind::ArgumentNull.is_a(FailureKind::Generic));
//! assert!(!FailureKind::Argument.is_a(FailureKind::ArgumentNull));
//! ```
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag identifying the runtime type of a captured failure.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum FailureKind {
    /// Root of the hierarchy. Plain failures with no more specific class.
    #[cfg_attr(feature = "serde", serde(rename = "GenericError"))]
    Generic,
    #[cfg_attr(feature = "serde", serde(rename = "SystemError"))]
    System,
    #[cfg_attr(feature = "serde", serde(rename = "ArgumentError"))]
    Argument,
    #[cfg_attr(feature = "serde", serde(rename = "ArgumentNullError"))]
    ArgumentNull,
    #[cfg_attr(feature = "serde", serde(rename = "ArgumentOutOfRangeError"))]
    ArgumentOutOfRange,
    #[cfg_attr(feature = "serde", serde(rename = "NotSupportedError"))]
    NotSupported,
    #[cfg_attr(feature = "serde", serde(rename = "InvalidOperationError"))]
    InvalidOperation,
    #[cfg_attr(feature = "serde", serde(rename = "ArithmeticError"))]
    Arithmetic,
    #[cfg_attr(feature = "serde", serde(rename = "OverflowError"))]
    Overflow,
    #[cfg_attr(feature = "serde", serde(rename = "DivideByZeroError"))]
    DivideByZero,
    #[cfg_attr(feature = "serde", serde(rename = "FormatError"))]
    Format,
    #[cfg_attr(feature = "serde", serde(rename = "IoError"))]
    Io,
    /// Combined failure produced by [`MultiException`](crate::MultiException).
    #[cfg_attr(feature = "serde", serde(rename = "AggregateError"))]
    Aggregate,
    /// A panic captured while a wrapped call was running.
    #[cfg_attr(feature = "serde", serde(rename = "PanicError"))]
    Panic,
}

impl FailureKind {
    /// Every kind, parents before children.
    pub const ALL: [FailureKind; 14] = [
        FailureKind::Generic,
        FailureKind::System,
        FailureKind::Argument,
        FailureKind::ArgumentNull,
        FailureKind::ArgumentOutOfRange,
        FailureKind::NotSupported,
        FailureKind::InvalidOperation,
        FailureKind::Arithmetic,
        FailureKind::Overflow,
        FailureKind::DivideByZero,
        FailureKind::Format,
        FailureKind::Io,
        FailureKind::Aggregate,
        FailureKind::Panic,
    ];

    /// Returns the direct parent kind, or `None` for [`FailureKind::Generic`].
    #[inline]
    pub const fn parent(self) -> Option<FailureKind> {
        use FailureKind::*;
        match self {
            Generic => None,
            System | Aggregate | Panic => Some(Generic),
            Argument | NotSupported | InvalidOperation | Arithmetic | Format | Io => Some(System),
            ArgumentNull | ArgumentOutOfRange => Some(Argument),
            Overflow | DivideByZero => Some(Arithmetic),
        }
    }

    /// Iterates from `self` up to the root, `self` included.
    ///
    /// ```
    /// use exception_or::FailureKind;
    ///
    /// let chain: Vec<_> = FailureKind::Overflow.ancestors().collect();
    /// assert_eq!(
    ///     chain,
    ///     [FailureKind::Overflow, FailureKind::Arithmetic, FailureKind::System, FailureKind::Generic]
    /// );
    /// ```
    #[inline]
    pub fn ancestors(self) -> Ancestors {
        Ancestors { next: Some(self) }
    }

    /// Nominal subtype test: `true` if `self` is `other` or derives from it.
    #[inline]
    pub fn is_a(self, other: FailureKind) -> bool {
        self.ancestors().any(|kind| kind == other)
    }

    /// `true` if `self` is-a any of `kinds`. An empty set matches nothing.
    #[inline]
    pub fn matches_any(self, kinds: &[FailureKind]) -> bool {
        kinds.iter().any(|&kind| self.is_a(kind))
    }

    /// Number of steps from the root; `Generic` has depth 0.
    #[inline]
    pub fn depth(self) -> usize {
        self.ancestors().count() - 1
    }

    /// Display name of the kind, e.g. `"ArgumentError"`.
    pub const fn name(self) -> &'static str {
        use FailureKind::*;
        match self {
            Generic => "GenericError",
            System => "SystemError",
            Argument => "ArgumentError",
            ArgumentNull => "ArgumentNullError",
            ArgumentOutOfRange => "ArgumentOutOfRangeError",
            NotSupported => "NotSupportedError",
            InvalidOperation => "InvalidOperationError",
            Arithmetic => "ArithmeticError",
            Overflow => "OverflowError",
            DivideByZero => "DivideByZeroError",
            Format => "FormatError",
            Io => "IoError",
            Aggregate => "AggregateError",
            Panic => "PanicError",
        }
    }
}

impl Default for FailureKind {
    #[inline]
    fn default() -> Self {
        FailureKind::Generic
    }
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over a kind and its ancestors. Created by [`FailureKind::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<FailureKind>,
}

impl Iterator for Ancestors {
    type Item = FailureKind;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

impl core::iter::FusedIterator for Ancestors {}
