use crate::traits::IntoFailure;
use crate::types::alloc_type::String;
use crate::types::{Failure, FailureVec};

/// Collects independent validation failures and reports them together.
///
/// A validation routine creates one aggregator, [`add`](Self::add)s a failure
/// for every violated rule, and finishes with
/// [`signal_if_failed`](Self::signal_if_failed). Nothing is signalled when no
/// rule failed; otherwise exactly one [`FailureKind::Aggregate`](crate::FailureKind::Aggregate)
/// failure carries every item in insertion order.
///
/// # Examples
///
/// ```
/// use exception_or::{Failure, MultiException};
///
/// fn validate(age: i32) -> Result<bool, Failure> {
///     let mut errors = MultiException::new();
///     if age <= 10 {
///         errors.add(Failure::argument("Too young"));
///     }
///     if age >= 40 {
///         errors.add(Failure::argument("Too old"));
///     }
///     errors.signal_if_failed()?;
///     Ok(true)
/// }
///
/// assert_eq!(validate(25), Ok(true));
/// assert_eq!(validate(5).unwrap_err().message(), "Too young");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiException {
    items: FailureVec,
}

impl MultiException {
    /// Joins item messages in the combined failure's message.
    pub const SEPARATOR: &'static str = "; ";

    #[inline]
    pub fn new() -> Self {
        Self { items: FailureVec::new() }
    }

    /// Appends a failure. No validation, no deduplication.
    #[inline]
    pub fn add<F: IntoFailure>(&mut self, failure: F) {
        self.items.push(failure.into_failure());
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Failure> {
        self.items.iter()
    }

    /// Combines the accumulated items into one failure, or `None` if empty.
    pub fn finish(self) -> Option<Failure> {
        if self.items.is_empty() {
            return None;
        }

        let mut message = String::new();
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                message.push_str(Self::SEPARATOR);
            }
            message.push_str(item.message());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            count = self.items.len(),
            combined = %message,
            "signalling aggregated failure"
        );

        Some(Failure::aggregate(message, self.items.into_vec()))
    }

    /// Signals the combined failure if anything was added.
    ///
    /// # Errors
    ///
    /// One [`FailureKind::Aggregate`](crate::FailureKind::Aggregate) failure when
    /// at least one item was added.
    #[inline]
    pub fn signal_if_failed(self) -> Result<(), Failure> {
        match self.finish() {
            None => Ok(()),
            Some(combined) => Err(combined),
        }
    }
}

impl<F: IntoFailure> Extend<F> for MultiException {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(IntoFailure::into_failure));
    }
}

impl<F: IntoFailure> FromIterator<F> for MultiException {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self { items: iter.into_iter().map(IntoFailure::into_failure).collect() }
    }
}

impl IntoIterator for MultiException {
    type Item = Failure;
    type IntoIter = smallvec::IntoIter<[Failure; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiException {
    type Item = &'a Failure;
    type IntoIter = core::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
