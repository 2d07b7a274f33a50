//! A module containing [`Option`] and associated types.
//!
//! Aside from the type itself, this module provides [`EmptyValueError`], which is raised when
//! attempting to extract a value from [`Nil`], and types for owned and borrowed iteration.

mod error;
mod iter;
mod ops;
mod option;

pub use error::*;
pub use iter::*;
pub use option::*;
