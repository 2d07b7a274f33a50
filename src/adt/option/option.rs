use std::mem;

use derive_more::IsVariant;

use super::{EmptyValueError, Iter, IterMut};
#[cfg(feature = "result")]
use crate::adt::result::{Err, Ok, Result};
use crate::util::panic::Panic;

pub use self::Option::{Nil, Some};

/// A value which may or may not be present, without resorting to a sentinel. An Option is always
/// exactly one of [`Some`], holding a single value, or [`Nil`], holding nothing.
///
/// [`Nil`] carries no state, so every `Nil` of a given type is indistinguishable from every other.
/// It is also the [`Default`] value.
///
/// # Failure
/// The only method which can fail is [`Option::expect`], which panics when called on `Nil`. All
/// other combinators propagate absence by value. Where failure should be handled rather than
/// asserted against, use [`Option::try_expect`] or one of the `get_or*` methods instead.
///
/// # Example
/// ```
/// use it::adt::{Nil, Option, Some};
///
/// let found: Option<u32> = Some(5);
/// assert_eq!(found.map(|x| x + 1).get_or(0), 6);
///
/// let missing: Option<u32> = Nil;
/// assert_eq!(missing.map(|x| x + 1).get_or(0), 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Option<T> {
    /// No value is present.
    #[default]
    Nil,
    /// A value of type `T` is present.
    Some(T),
}

impl<T> Option<T> {
    /// Converts from `&Option<T>` to `Option<&T>`.
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Some(value) => Some(value),
            Nil => Nil,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    pub const fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Some(value) => Some(value),
            Nil => Nil,
        }
    }

    /// Returns the contained value, asserting that it is present.
    ///
    /// This should only be called where program logic has already established that the Option is
    /// [`Some`].
    ///
    /// # Panics
    /// Panics with the message of [`EmptyValueError`] if the Option is [`Nil`]. The panic is
    /// attributed to the caller's location.
    #[track_caller]
    pub fn expect(self) -> T {
        match self {
            Some(value) => value,
            Nil => EmptyValueError.panic(),
        }
    }

    /// Returns the contained value, or [`EmptyValueError`] if the Option is [`Nil`]. This is the
    /// non-panicking counterpart of [`Option::expect`], useful with the `?` operator.
    pub fn try_expect(self) -> std::result::Result<T, EmptyValueError> {
        self.into_std().ok_or(EmptyValueError)
    }

    /// Applies `f` to the contained value. `f` is never invoked on [`Nil`], so a chain of maps
    /// stops at the first `Nil`.
    pub fn map<R, F: FnOnce(T) -> R>(self, f: F) -> Option<R> {
        match self {
            Some(value) => Some(f(value)),
            Nil => Nil,
        }
    }

    /// Applies `f` to the contained value, or returns `default` if the Option is [`Nil`].
    pub fn map_or<R, F: FnOnce(T) -> R>(self, default: R, f: F) -> R {
        match self {
            Some(value) => f(value),
            Nil => default,
        }
    }

    /// Returns the contained value, or `default` if the Option is [`Nil`].
    pub fn get_or(self, default: T) -> T {
        match self {
            Some(value) => value,
            Nil => default,
        }
    }

    /// Returns the contained value, or computes one with `f` if the Option is [`Nil`].
    pub fn get_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Some(value) => value,
            Nil => f(),
        }
    }

    /// Returns the contained value, or [`T::default()`](Default::default) if the Option is
    /// [`Nil`].
    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        self.get_or_else(T::default)
    }

    /// Logical AND: returns `other` if this Option is [`Some`], otherwise [`Nil`]. `other` is
    /// dropped in the latter case.
    pub fn and_<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Some(_) => other,
            Nil => Nil,
        }
    }

    /// The lazy form of [`Option::and_`]: `f` is only invoked if this Option is [`Some`], and
    /// receives the contained value.
    pub fn and_then<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Option<U> {
        match self {
            Some(value) => f(value),
            Nil => Nil,
        }
    }

    /// Logical OR: returns this Option if it is [`Some`], otherwise `other`.
    pub fn or_(self, other: Option<T>) -> Option<T> {
        match self {
            Some(value) => Some(value),
            Nil => other,
        }
    }

    /// The lazy form of [`Option::or_`]: `f` is only invoked if this Option is [`Nil`].
    pub fn or_else<F: FnOnce() -> Option<T>>(self, f: F) -> Option<T> {
        match self {
            Some(value) => Some(value),
            Nil => f(),
        }
    }

    /// Returns this Option if it is [`Some`] and `predicate` holds for the contained value,
    /// otherwise [`Nil`].
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Option<T> {
        match self {
            Some(value) if predicate(&value) => Some(value),
            _ => Nil,
        }
    }

    /// Takes the value out of the Option, leaving [`Nil`] in its place.
    pub const fn take(&mut self) -> Option<T> {
        mem::replace(self, Nil)
    }

    /// Transforms the Option into a [`Result`], mapping [`Some(v)`](Some) to [`Ok(v)`](Ok) and
    /// [`Nil`] to [`Err(error)`](Err).
    #[cfg(feature = "result")]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Some(value) => Ok(value),
            Nil => Err(error),
        }
    }

    /// Converts this Option into the equivalent [`std::option::Option`].
    pub fn into_std(self) -> std::option::Option<T> {
        match self {
            Some(value) => std::option::Option::Some(value),
            Nil => None,
        }
    }

    /// Returns an iterator over the contained value, yielding one item for [`Some`] and none for
    /// [`Nil`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.as_ref().into_std())
    }

    /// Returns an iterator over a mutable reference to the contained value.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut(self.as_mut().into_std())
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(value: std::option::Option<T>) -> Self {
        match value {
            std::option::Option::Some(value) => Some(value),
            None => Nil,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        value.into_std()
    }
}
