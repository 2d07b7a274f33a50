use std::fmt::{Debug, Display};
use std::panic;

use derive_more::IsVariant;

use super::{Iter, IterMut};
#[cfg(feature = "option")]
use crate::adt::option::{Nil, Option, Some};

pub use self::Result::{Err, Ok};

/// The outcome of a fallible computation, carried explicitly as a value. A Result is always
/// exactly one of [`Ok`], holding a success value, or [`Err`], holding an error value describing
/// why the computation did not succeed.
///
/// The error type `E` is unconstrained: it is any payload the caller finds descriptive, not
/// necessarily a type implementing [`Error`](std::error::Error).
///
/// # Failure
/// [`Result::expect`] (and its message-based sibling [`Result::throw`]) are the only methods which
/// can fail. Every other combinator propagates an [`Err`] by value.
///
/// # Example
/// ```
/// use it::adt::{Err, Ok, Result};
///
/// let first: Result<u32, &str> = Ok(10);
/// assert_eq!(first.and_(Ok(20)).expect(), 20);
///
/// let failed: Result<u32, &str> = Err("bad");
/// assert_eq!(failed.or_(Ok(1)).expect(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Result<T, E> {
    /// A successful outcome.
    Ok(T),
    /// A failed outcome, with an error describing the failure.
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error),
        }
    }

    /// Converts from `&mut Result<T, E>` to `Result<&mut T, &mut E>`.
    pub const fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error),
        }
    }

    /// Returns the contained success value, asserting that the computation succeeded.
    ///
    /// Unlike [`Result::throw`], the contained error itself becomes the panic payload, so that a
    /// caller catching the unwind can recover it with
    /// [`downcast`](std::boxed::Box::downcast).
    ///
    /// Because the default panic hook cannot print a non-string payload, the error's [`Debug`]
    /// representation is written to standard error before unwinding begins.
    ///
    /// # Panics
    /// Panics with the contained error as the payload if the Result is an [`Err`]. The panic is
    /// attributed to the caller's location.
    #[track_caller]
    pub fn expect(self) -> T
    where
        E: Debug + Send + 'static,
    {
        match self {
            Ok(value) => value,
            Err(error) => {
                eprintln!("called `Result::expect` on an `Err` value: {:?}", error);
                panic::panic_any(error)
            },
        }
    }

    /// Returns the contained success value, panicking with the message of the contained error
    /// otherwise.
    ///
    /// # Panics
    /// Panics if the Result is an [`Err`]. The panic is attributed to the caller's location.
    #[track_caller]
    pub fn throw(self) -> T
    where
        E: Display,
    {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }

    /// Applies `f` to the success value. `f` is never invoked on an [`Err`], which is returned
    /// unchanged.
    pub fn map<R, F: FnOnce(T) -> R>(self, f: F) -> Result<R, E> {
        match self {
            Ok(value) => Ok(f(value)),
            Err(error) => Err(error),
        }
    }

    /// Applies `f` to the error value, leaving an [`Ok`] untouched.
    pub fn map_err<R, F: FnOnce(E) -> R>(self, f: F) -> Result<T, R> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(f(error)),
        }
    }

    /// Applies `f` to the success value, or returns `default` if the Result is an [`Err`].
    pub fn map_or<R, F: FnOnce(T) -> R>(self, default: R, f: F) -> R {
        match self {
            Ok(value) => f(value),
            Err(_) => default,
        }
    }

    /// Returns the success value, or `default` if the Result is an [`Err`].
    pub fn get_or(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error with `f`.
    pub fn get_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Ok(value) => value,
            Err(error) => f(error),
        }
    }

    /// Returns the success value, or [`T::default()`](Default::default) if the Result is an
    /// [`Err`].
    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(_) => T::default(),
        }
    }

    /// Returns `other` if this Result is [`Ok`], otherwise this Result's error.
    pub fn and_<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Ok(_) => other,
            Err(error) => Err(error),
        }
    }

    /// The lazy form of [`Result::and_`]: `f` is only invoked on [`Ok`], and receives the success
    /// value.
    pub fn and_then<U, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<U, E> {
        match self {
            Ok(value) => f(value),
            Err(error) => Err(error),
        }
    }

    /// Returns this Result if it is [`Ok`], otherwise `other`.
    pub fn or_(self, other: Result<T, E>) -> Result<T, E> {
        match self {
            Ok(value) => Ok(value),
            Err(_) => other,
        }
    }

    /// The lazy form of [`Result::or_`]: `f` is only invoked on [`Err`], and receives the error.
    pub fn or_else<F, O: FnOnce(E) -> Result<T, F>>(self, f: O) -> Result<T, F> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => f(error),
        }
    }

    /// Discards the error, converting [`Ok(v)`](Ok) into [`Some(v)`](Some) and [`Err`] into
    /// [`Nil`].
    #[cfg(feature = "option")]
    pub fn ok(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(_) => Nil,
        }
    }

    /// Discards the success value, converting [`Err(e)`](Err) into [`Some(e)`](Some) and [`Ok`]
    /// into [`Nil`].
    #[cfg(feature = "option")]
    pub fn err(self) -> Option<E> {
        match self {
            Ok(_) => Nil,
            Err(error) => Some(error),
        }
    }

    /// Converts this Result into the equivalent [`std::result::Result`], which allows it to be
    /// used with the `?` operator.
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Ok(value) => std::result::Result::Ok(value),
            Err(error) => std::result::Result::Err(error),
        }
    }

    /// Returns an iterator over the success value, yielding one item for [`Ok`] and none for
    /// [`Err`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.as_ref().into_std().ok())
    }

    /// Returns an iterator over a mutable reference to the success value.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut(self.as_mut().into_std().ok())
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            std::result::Result::Ok(value) => Ok(value),
            std::result::Result::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        value.into_std()
    }
}
