// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::Error;
use crate::logger::trace;

/// Hashed in place of a payload by every absent optional
const ABSENT_HASH: u64 = 0;

/// An immutable container holding either exactly one value or nothing.
///
/// The usual entry points are [`Optional::wrap`], which turns a missing input
/// into [`Optional::Absent`], and [`Optional::absent`]. Once built, an
/// optional is never modified; every combinator consumes it and returns a
/// new one.
///
/// Combinators only call the closure they are given when the optional is
/// [`Optional::Present`]. On [`Optional::Absent`] the closure is dropped
/// without being invoked.
///
/// Equality compares payloads, and the hash of a present optional is the
/// hash of its payload, so `Optional::present(v)` and `v` land in the same
/// bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Optional<T> {
    /// Holds the wrapped value
    Present(T),
    /// Holds nothing
    Absent,
}

impl<T> Optional<T> {
    /// The canonical absent optional, shared by every caller.
    pub const ABSENT: Self = Optional::Absent;

    /// Wraps a value that may be missing.
    ///
    /// `None` becomes [`Optional::Absent`], `Some(v)` becomes
    /// [`Optional::Present`]. There is no way to end up with a present
    /// optional that holds "nothing".
    pub fn wrap(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Self::ABSENT,
        }
    }

    /// Wraps a value that is known to exist.
    pub const fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// Returns the canonical absent optional.
    pub const fn absent() -> Self {
        Self::ABSENT
    }

    /// Extracts the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] when called on an absent optional.
    /// This signals unchecked access by the caller and should not be retried.
    #[doc(alias = "unwrap")]
    pub fn get(self) -> Result<T, Error> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => {
                trace!("get called on an absent optional");
                Err(Error::ElementNotFound)
            }
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Applies `transform` to the wrapped value.
    ///
    /// `transform` is never called on an absent optional.
    pub fn map<S, F>(self, transform: F) -> Optional<S>
    where
        F: FnOnce(T) -> S,
    {
        match self {
            Optional::Present(value) => Optional::Present(transform(value)),
            Optional::Absent => Optional::ABSENT,
        }
    }

    /// Applies a transform whose result may itself be missing.
    ///
    /// The result is passed back through [`Optional::wrap`], so a present
    /// input mapped to `None` comes out absent. `transform` is never called
    /// on an absent optional.
    pub fn filter_map<S, F>(self, transform: F) -> Optional<S>
    where
        F: FnOnce(T) -> Option<S>,
    {
        match self {
            Optional::Present(value) => Optional::wrap(transform(value)),
            Optional::Absent => Optional::ABSENT,
        }
    }

    /// Chains a transform that produces its own optional.
    ///
    /// The returned optional is exactly what `transform` produced; it is not
    /// wrapped again. `transform` is never called on an absent optional.
    pub fn flat_map<S, F>(self, transform: F) -> Optional<S>
    where
        F: FnOnce(T) -> Optional<S>,
    {
        match self {
            Optional::Present(value) => transform(value),
            Optional::Absent => Optional::ABSENT,
        }
    }

    /// Keeps the wrapped value only if `predicate` accepts it.
    ///
    /// `predicate` is never called on an absent optional.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(value) => {
                if predicate(&value) {
                    Optional::Present(value)
                } else {
                    Self::ABSENT
                }
            }
            Optional::Absent => Self::ABSENT,
        }
    }

    /// Returns true if a value is wrapped.
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns true if no value is wrapped.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Runs `action` on the wrapped value, if there is one.
    pub fn do_if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Optional::Present(value) = self {
            action(value);
        }
    }

    /// Returns the wrapped value, or `alternative` when absent.
    ///
    /// `alternative` is built by the caller either way; use
    /// [`Optional::or_else_get`] when it is expensive.
    pub fn or_else(self, alternative: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => alternative,
        }
    }

    /// Returns the wrapped value, or the result of `supplier` when absent.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => supplier(),
        }
    }

    /// Returns the wrapped value, or fails with the error built by
    /// `error_supplier`.
    ///
    /// # Errors
    ///
    /// On an absent optional, returns exactly the error `error_supplier`
    /// produced. `error_supplier` is not called when a value is present.
    pub fn or_else_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(error_supplier()),
        }
    }

    /// Returns an iterator over the zero or one wrapped values.
    pub fn iter(&self) -> IntoIter<&T> {
        self.as_ref().into_iter()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::ABSENT
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Optional::Present(value) => value.hash(state),
            Optional::Absent => ABSENT_HASH.hash(state),
        }
    }
}

impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Some {{value={value}}}"),
            Optional::Absent => f.write_str("Empty option"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::wrap(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(Option::from(self).into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the value of an [`Optional`], yielding it at most once
#[derive(Debug, Clone)]
pub struct IntoIter<T>(std::option::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
