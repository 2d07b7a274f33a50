//! A module containing [`Result`] and associated types, which are currently limited to iteration
//! over the success value.

mod iter;
mod ops;
mod result;

pub use iter::*;
pub use result::*;
