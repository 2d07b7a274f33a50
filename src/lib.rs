//! This crate is my collection of small "interactive tools" that I keep reaching for.
//!
//! # Purpose
//! Most of what started out in this collection (path helpers, formatting, iterator recipes and the
//! like) is better served by the standard library and established crates. What remains is
//! [`adt`]: an [`Option`](adt::Option) with a [`Nil`](adt::Nil) variant and a matching
//! [`Result`](adt::Result), which I use to experiment with combinator APIs without fighting the
//! prelude's types.
//!
//! # Error Handling
//! Only one method on each type can fail, and it does so by panicking: `expect`. This is meant for
//! call sites where absence or failure has already been ruled out, so a panic there indicates a
//! logic error. Every other combinator is total.
//!
//! When this crate defines errors, they are small structs (often ZSTs) that implement
//! [`Error`](std::error::Error) via `derive_more`, rather than strings.
//!
//! # Features
//! - `option`: [`adt::Option`] and [`adt::EmptyValueError`].
//! - `result`: [`adt::Result`].
//! - `adt-all` (default): both of the above, plus conversions between them.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "adt")]
pub mod adt;

pub(crate) mod util;
