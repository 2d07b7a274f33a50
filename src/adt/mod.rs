//! Closed-variant types for values which may be absent or computations which may fail.
//!
//! # Purpose
//! [`Option`] and [`Result`] replace two habits: returning a sentinel for "nothing found", and
//! raising an untyped error for an expected, recoverable failure. Both are enums, so the set of
//! variants is closed and every match over them is checked for exhaustiveness at compile time.
//!
//! # Method
//! The two families deliberately mirror each other. Each has a single extraction method which can
//! fail (`expect`), while every other combinator is total and propagates [`Nil`] or [`Err`] by
//! value. `expect` is intended for points where program logic has already established that the
//! value is present, so reaching the failure path signals a bug rather than a condition to
//! recover from.
//!
//! Both types intentionally share their names with the prelude. The variants are re-exported here
//! so that `use it::adt::*;` shadows the prelude's versions within a scope, and conversions to and
//! from the [`std`] types are provided for interoperating with the rest of the ecosystem, including
//! the `?` operator.
#![warn(missing_docs)]

#[cfg(feature = "option")]
pub mod option;
#[cfg(feature = "result")]
pub mod result;

#[cfg(feature = "option")]
#[doc(inline)]
pub use option::{EmptyValueError, Nil, Option, Some};
#[cfg(feature = "result")]
#[doc(inline)]
pub use result::{Err, Ok, Result};
